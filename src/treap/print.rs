use crate::treap::node::Node;
use std::fmt;

/// Deepest level drawn with branch indentation. Deeper nodes are prefixed with their depth so a
/// line never grows with the height of the tree.
pub const MAX_INDENT_DEPTH: usize = 32;

enum Branch {
    Root,
    Left,
    Right,
}

/// Renders the shape of a treap, one node per line.
///
/// Each line shows a key followed by its priority in parentheses. Children are listed left
/// first, and a `·` marks a missing child whose sibling exists. Nodes deeper than
/// [`MAX_INDENT_DEPTH`] are written as `[depth]` followed by their branch instead of being
/// indented further.
pub struct TreeDisplay<'a, K, V> {
    root: Option<&'a Node<K, V>>,
}

impl<'a, K, V> TreeDisplay<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>) -> Self {
        TreeDisplay { root }
    }
}

impl<'a, K, V> fmt::Display for TreeDisplay<'a, K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let root = match self.root {
            Some(root) => root,
            None => return writeln!(f, "(empty)"),
        };

        // frames are (child, prefix length, depth, branch) over a single shared prefix
        let mut prefix = String::new();
        let mut stack = vec![(Some(root), 0, 0, Branch::Root)];
        while let Some((child, prefix_len, depth, branch)) = stack.pop() {
            prefix.truncate(prefix_len);
            let connector = match branch {
                Branch::Root => "",
                Branch::Left => "├── ",
                Branch::Right => "└── ",
            };
            let indent = if depth > MAX_INDENT_DEPTH {
                write!(f, "[{}] ", depth)?;
                ""
            } else {
                prefix.as_str()
            };
            let node = match child {
                Some(node) => node,
                None => {
                    writeln!(f, "{}{}·", indent, connector)?;
                    continue;
                },
            };
            writeln!(f, "{}{}{} ({})", indent, connector, node.key(), node.priority())?;

            if node.left().is_none() && node.right().is_none() {
                continue;
            }
            if depth < MAX_INDENT_DEPTH {
                match branch {
                    Branch::Root => {},
                    Branch::Left => prefix.push_str("│   "),
                    Branch::Right => prefix.push_str("    "),
                }
            }
            stack.push((node.right(), prefix.len(), depth + 1, Branch::Right));
            stack.push((node.left(), prefix.len(), depth + 1, Branch::Left));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_INDENT_DEPTH;
    use crate::treap::{RandomPriority, SequencePriority, Treap};

    #[test]
    fn test_display_empty() {
        let treap: Treap<u32, ()> =
            Treap::with_priority_source("empty", RandomPriority::from_seed([1, 1, 1, 1]));
        assert_eq!(treap.display().to_string(), "(empty)\n");
    }

    #[test]
    fn test_display_single() {
        let mut treap = Treap::with_priority_source("single", SequencePriority::new(vec![4]));
        treap.insert(1, ());
        assert_eq!(treap.display().to_string(), "1 (4)\n");
    }

    #[test]
    fn test_display_nested() {
        let priorities = SequencePriority::new(vec![10, 50, 5, 80]);
        let mut treap = Treap::with_priority_source("stars", priorities);
        for name in &["Sirius", "Procyon", "Barnard's Star", "Gl 406"] {
            treap.insert(*name, ());
        }
        let expected = "\
Gl 406 (80)
├── Barnard's Star (5)
└── Procyon (50)
    ├── ·
    └── Sirius (10)
";
        assert_eq!(treap.display().to_string(), expected);
    }

    #[test]
    fn test_display_right_branch_indent() {
        let priorities = SequencePriority::new(vec![9, 8, 7]);
        let mut treap = Treap::with_priority_source("chain", priorities);
        for key in 1..=3 {
            treap.insert(key, ());
        }
        let expected = "\
1 (9)
├── ·
└── 2 (8)
    ├── ·
    └── 3 (7)
";
        assert_eq!(treap.display().to_string(), expected);
    }

    #[test]
    fn test_display_depth_cutoff() {
        // Ascending keys with ascending priorities form a left spine rooted at the last key.
        let len = 40;
        let priorities = SequencePriority::new((1..=len).collect());
        let mut treap = Treap::with_priority_source("spine", priorities);
        for key in 0..len {
            treap.insert(key, ());
        }

        let output = treap.display().to_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2 * len as usize - 1);
        assert_eq!(lines[0], "39 (40)");

        let deepest_drawn = format!("{}├── 7 (8)", "│   ".repeat(MAX_INDENT_DEPTH - 1));
        assert!(lines.contains(&deepest_drawn.as_str()));
        assert!(lines.contains(&"[33] ├── 6 (7)"));
        assert!(lines.contains(&"[39] ├── 0 (1)"));
        assert!(lines.contains(&"[33] └── ·"));
        assert_eq!(lines[lines.len() - 1], "└── ·");
    }
}
