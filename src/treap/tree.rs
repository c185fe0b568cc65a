use crate::treap::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

enum Direction {
    Left,
    Right,
}

// precondition: the node has a right child
pub fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.left = Some(node);
    child
}

// precondition: the node has a left child
pub fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.right = Some(node);
    child
}

/// Inserts `new_node` below `tree`, routing equal keys to the right, then rotates it up until
/// its parent has a priority at least as high as its own.
///
/// Nodes on the search path are detached onto an explicit stack on the way down and reattached
/// on the way up, so the depth of the tree never translates into call stack depth.
pub fn insert<K, V>(tree: &mut Tree<K, V>, new_node: Node<K, V>)
where
    K: Ord,
{
    let mut path = Vec::new();
    let mut curr = tree.take();
    while let Some(mut node) = curr {
        if new_node.entry.key < node.entry.key {
            curr = node.left.take();
            path.push((node, Direction::Left));
        } else {
            curr = node.right.take();
            path.push((node, Direction::Right));
        }
    }

    let mut child = Box::new(new_node);
    while let Some((mut node, direction)) = path.pop() {
        child = match direction {
            Direction::Left => {
                node.left = Some(child);
                if node.is_heap_property_violated(&node.left) {
                    rotate_right(node)
                } else {
                    node
                }
            },
            Direction::Right => {
                node.right = Some(child);
                if node.is_heap_property_violated(&node.right) {
                    rotate_left(node)
                } else {
                    node
                }
            },
        };
    }
    *tree = Some(child);
}

pub fn search<'a, K, V, Q>(tree: &'a Tree<K, V>, key: &Q) -> Option<&'a Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree.as_deref();
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = node.left.as_deref(),
            Ordering::Greater => curr = node.right.as_deref(),
            Ordering::Equal => return Some(node),
        }
    }
    None
}

/// Visits every node in key order.
pub fn traverse<K, V, F>(tree: &Tree<K, V>, mut visitor: F)
where
    F: FnMut(&Node<K, V>),
{
    let mut stack = Vec::new();
    let mut curr = tree.as_deref();
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left.as_deref();
        }
        match stack.pop() {
            Some(node) => {
                visitor(node);
                curr = node.right.as_deref();
            },
            None => break,
        }
    }
}

pub fn height<K, V>(tree: &Tree<K, V>) -> usize {
    let mut max_depth = 0;
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push((&**node, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            max_depth = depth;
        }
        if let Some(ref left_node) = node.left {
            stack.push((&**left_node, depth + 1));
        }
        if let Some(ref right_node) = node.right {
            stack.push((&**right_node, depth + 1));
        }
    }
    max_depth
}

/// Releases every node without recursing into the subtrees.
pub fn clear<K, V>(tree: &mut Tree<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::{clear, height, insert, rotate_left, rotate_right, search, traverse, Tree};
    use crate::treap::node::Node;

    fn leaf(key: u32, priority: u32) -> Tree<u32, ()> {
        Some(Box::new(Node::new(key, (), priority)))
    }

    fn keys(tree: &Tree<u32, ()>) -> Vec<u32> {
        let mut keys = Vec::new();
        traverse(tree, |node| keys.push(*node.key()));
        keys
    }

    //      20             10
    //     /  \           /  \
    //    10   30   ->   0    20
    //   /  \                /  \
    //  0    15             15   30
    fn sample() -> Box<Node<u32, ()>> {
        let mut left = Node::new(10, (), 0);
        left.left = leaf(0, 0);
        left.right = leaf(15, 0);
        let mut root = Node::new(20, (), 0);
        root.left = Some(Box::new(left));
        root.right = leaf(30, 0);
        Box::new(root)
    }

    #[test]
    fn test_rotate_right() {
        let node = rotate_right(sample());
        assert_eq!(*node.key(), 10);
        assert_eq!(node.left().map(|n| *n.key()), Some(0));
        let right = node.right().expect("Expected right child node to be `Some`.");
        assert_eq!(*right.key(), 20);
        assert_eq!(right.left().map(|n| *n.key()), Some(15));
        assert_eq!(right.right().map(|n| *n.key()), Some(30));
    }

    #[test]
    fn test_rotate_right_then_left() {
        let tree = Some(sample());
        let before = keys(&tree);
        let node = rotate_left(rotate_right(tree.unwrap()));
        assert_eq!(*node.key(), 20);
        assert_eq!(node.left().map(|n| *n.key()), Some(10));
        assert_eq!(node.right().map(|n| *n.key()), Some(30));
        let tree = Some(node);
        assert_eq!(keys(&tree), before);
        assert_eq!(height(&tree), 3);
    }

    #[test]
    fn test_rotate_left_then_right() {
        let tree = Some(sample());
        let before = keys(&tree);
        let node = rotate_left(sample());
        assert_eq!(*node.key(), 30);
        let node = rotate_right(node);
        assert_eq!(*node.key(), 20);
        assert_eq!(keys(&Some(node)), before);
    }

    #[test]
    fn test_insert_rotates_up() {
        let mut tree = None;
        insert(&mut tree, Node::new(2, (), 1));
        insert(&mut tree, Node::new(1, (), 2));
        insert(&mut tree, Node::new(3, (), 3));
        let root = tree.as_ref().expect("Expected root node to be `Some`.");
        assert_eq!(*root.key(), 3);
        assert_eq!(root.left().map(|n| *n.key()), Some(1));
        assert_eq!(keys(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_equal_priority_does_not_rotate() {
        let mut tree = None;
        insert(&mut tree, Node::new(2, (), 5));
        insert(&mut tree, Node::new(1, (), 5));
        let root = tree.as_ref().expect("Expected root node to be `Some`.");
        assert_eq!(*root.key(), 2);
    }

    #[test]
    fn test_insert_duplicate_goes_right() {
        let mut tree = None;
        insert(&mut tree, Node::new(1, (), 9));
        insert(&mut tree, Node::new(1, (), 1));
        let root = tree.as_ref().expect("Expected root node to be `Some`.");
        assert!(root.left().is_none());
        assert_eq!(root.right().map(|n| *n.key()), Some(1));
    }

    #[test]
    fn test_search() {
        let mut tree = None;
        for (key, priority) in vec![(5, 3), (2, 7), (8, 1), (6, 9)] {
            insert(&mut tree, Node::new(key, (), priority));
        }
        assert_eq!(search(&tree, &6).map(|n| n.priority()), Some(9));
        assert!(search(&tree, &7).is_none());
    }

    #[test]
    fn test_empty() {
        let mut tree: Tree<u32, ()> = None;
        assert!(search(&tree, &1).is_none());
        assert_eq!(height(&tree), 0);
        assert!(keys(&tree).is_empty());
        clear(&mut tree);
        assert!(tree.is_none());
    }

    #[test]
    fn test_clear() {
        let mut tree = Some(sample());
        clear(&mut tree);
        assert!(tree.is_none());
    }
}
