//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod map;
mod node;
mod print;
mod priority;
mod tree;

pub use self::map::Treap;
pub use self::node::Node;
pub use self::print::{TreeDisplay, MAX_INDENT_DEPTH};
pub use self::priority::{PrioritySource, RandomPriority, SequencePriority, DEFAULT_MAX_PRIORITY};
