use crate::entry::Entry;
use crate::treap::tree;

/// An internal node of a treap.
///
/// Nodes are only created by [`Treap::insert`](crate::treap::Treap::insert) and are exposed
/// read-only so callers can walk or render the tree shape.
pub struct Node<K, V> {
    pub(crate) entry: Entry<K, V>,
    pub(crate) priority: u32,
    pub(crate) left: tree::Tree<K, V>,
    pub(crate) right: tree::Tree<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, priority: u32) -> Self {
        Node {
            entry: Entry { key, value },
            priority,
            left: None,
            right: None,
        }
    }

    /// Returns the key of the node.
    pub fn key(&self) -> &K {
        &self.entry.key
    }

    /// Returns the payload stored in the node.
    pub fn value(&self) -> &V {
        &self.entry.value
    }

    /// Returns the heap priority the node was assigned when it was inserted.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns the root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    /// Returns the root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    pub(crate) fn is_heap_property_violated(&self, child: &tree::Tree<K, V>) -> bool {
        match child {
            Some(ref child_node) => child_node.priority > self.priority,
            None => false,
        }
    }
}
