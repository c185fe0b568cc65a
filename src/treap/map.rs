use crate::treap::node::Node;
use crate::treap::print::TreeDisplay;
use crate::treap::priority::{PrioritySource, RandomPriority};
use crate::treap::tree;
use std::borrow::Borrow;

/// An ordered collection of key-payload pairs implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a key, a payload, and a priority. Keys in the right subtree of a node are
/// greater than or equal to its key. Keys in its left subtree are less than its key as long as
/// all keys are distinct. The priority of a node is at least as high as the priority of its
/// children. Because priorities are drawn at random, the expected height of the tree is
/// proportional to the logarithm of the number of keys.
///
/// Keys are not deduplicated: inserting a key that is already present adds another node to the
/// right of the existing one, and every insertion increases the length by one. A later rotation
/// may lift that node above its equal, so with duplicates present the left subtree of a node can
/// hold keys equal to its own. Keys still come out in non-decreasing order from
/// [`traverse`](Treap::traverse), and a search finds one of the equal nodes.
///
/// # Examples
///
/// ```
/// use star_treap::treap::Treap;
///
/// let mut treap = Treap::new("stars");
/// treap.insert("Sirius", 2.64);
/// treap.insert("Procyon", 3.51);
///
/// assert_eq!(treap.get("Procyon"), Some(&3.51));
/// assert_eq!(treap.get("Vega"), None);
/// assert_eq!(treap.len(), 2);
/// ```
pub struct Treap<K, V, P = RandomPriority> {
    label: String,
    root: tree::Tree<K, V>,
    len: usize,
    priorities: P,
}

impl<K, V> Treap<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `Treap<K, V>` whose priorities are drawn from a randomly seeded
    /// generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use star_treap::treap::Treap;
    ///
    /// let treap: Treap<u32, u32> = Treap::new("numbers");
    /// assert_eq!(treap.label(), "numbers");
    /// ```
    pub fn new<S>(label: S) -> Self
    where
        S: Into<String>,
    {
        Treap::with_priority_source(label, RandomPriority::new())
    }
}

impl<K, V, P> Treap<K, V, P>
where
    K: Ord,
    P: PrioritySource,
{
    /// Constructs a new, empty treap that takes node priorities from `priorities`.
    ///
    /// # Examples
    ///
    /// ```
    /// use star_treap::treap::{SequencePriority, Treap};
    ///
    /// let mut treap = Treap::with_priority_source("fixed", SequencePriority::new(vec![1, 2]));
    /// treap.insert(1, "one");
    /// treap.insert(2, "two");
    /// assert_eq!(treap.root().map(|node| *node.key()), Some(2));
    /// ```
    pub fn with_priority_source<S>(label: S, priorities: P) -> Self
    where
        S: Into<String>,
    {
        Treap {
            label: label.into(),
            root: None,
            len: 0,
            priorities,
        }
    }

    /// Inserts a key-payload pair into the treap. Equal keys are kept side by side.
    ///
    /// # Examples
    ///
    /// ```
    /// use star_treap::treap::Treap;
    ///
    /// let mut treap = Treap::new("numbers");
    /// treap.insert(1, 1);
    /// treap.insert(1, 2);
    /// assert_eq!(treap.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let priority = self.priorities.next_priority();
        tree::insert(&mut self.root, Node::new(key, value, priority));
        self.len += 1;
    }
}

impl<K, V, P> Treap<K, V, P> {
    /// Returns the node holding a particular key, or `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use star_treap::treap::Treap;
    ///
    /// let mut treap = Treap::new("numbers");
    /// treap.insert(1, 10);
    /// assert_eq!(treap.search(&1).map(|node| *node.value()), Some(10));
    /// assert!(treap.search(&0).is_none());
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::search(&self.root, key)
    }

    /// Returns the payload associated with a particular key, or `None` if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|node| node.value())
    }

    /// Checks if a key exists in the treap.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Invokes `visitor` once for every node, in key order. Does nothing on an empty treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use star_treap::treap::Treap;
    ///
    /// let mut treap = Treap::new("numbers");
    /// treap.insert(3, ());
    /// treap.insert(1, ());
    /// treap.insert(2, ());
    ///
    /// let mut keys = Vec::new();
    /// treap.traverse(|node| keys.push(*node.key()));
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&Node<K, V>),
    {
        tree::traverse(&self.root, visitor)
    }

    /// Returns the root node, or `None` if the treap is empty.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the number of nodes in the treap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the treap is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the label the treap was created with.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a value that renders the shape of the treap when formatted with `{}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use star_treap::treap::{SequencePriority, Treap};
    ///
    /// let mut treap = Treap::with_priority_source("fixed", SequencePriority::new(vec![2, 1]));
    /// treap.insert("b", ());
    /// treap.insert("a", ());
    /// assert_eq!(treap.display().to_string(), "b (2)\n├── a (1)\n└── ·\n");
    /// ```
    pub fn display(&self) -> TreeDisplay<'_, K, V> {
        TreeDisplay::new(self.root())
    }
}

/// Constructs an empty, unlabeled treap with random priorities.
///
/// # Examples
///
/// ```
/// use star_treap::treap::Treap;
///
/// let treap: Treap<u32, u32> = Treap::default();
/// assert!(treap.is_empty());
/// assert_eq!(treap.label(), "");
/// ```
impl<K, V> Default for Treap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Treap::new(String::new())
    }
}

impl<K, V, P> Drop for Treap<K, V, P> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}
