use rand::{Rng, SeedableRng, XorShiftRng};

/// The default inclusive upper bound of randomly drawn priorities.
pub const DEFAULT_MAX_PRIORITY: u32 = 5000;

/// A generator of node priorities.
///
/// A treap only stays balanced in expectation if every priority is drawn independently of the
/// keys and of the other priorities. Deterministic implementations are useful for tests.
pub trait PrioritySource {
    /// Returns the priority of the next node to be created.
    fn next_priority(&mut self) -> u32;
}

/// Draws priorities uniformly at random from `[0, max_priority]`.
///
/// # Examples
///
/// ```
/// use star_treap::treap::{PrioritySource, RandomPriority};
///
/// let mut priorities = RandomPriority::from_seed([1, 2, 3, 4]).max_priority(10);
/// assert!(priorities.next_priority() <= 10);
/// ```
pub struct RandomPriority<R = XorShiftRng> {
    rng: R,
    max_priority: u32,
}

impl RandomPriority<XorShiftRng> {
    /// Constructs a source seeded from the thread-local generator.
    pub fn new() -> Self {
        RandomPriority::with_rng(rand::weak_rng())
    }

    /// Constructs a reproducible source.
    ///
    /// # Panics
    ///
    /// Panics if every word of `seed` is zero.
    pub fn from_seed(seed: [u32; 4]) -> Self {
        RandomPriority::with_rng(XorShiftRng::from_seed(seed))
    }
}

impl Default for RandomPriority<XorShiftRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RandomPriority<R>
where
    R: Rng,
{
    /// Constructs a source backed by an arbitrary generator.
    pub fn with_rng(rng: R) -> Self {
        RandomPriority {
            rng,
            max_priority: DEFAULT_MAX_PRIORITY,
        }
    }

    /// Sets the inclusive upper bound of generated priorities.
    pub fn max_priority(mut self, max_priority: u32) -> Self {
        self.max_priority = max_priority;
        self
    }
}

impl<R> PrioritySource for RandomPriority<R>
where
    R: Rng,
{
    fn next_priority(&mut self) -> u32 {
        if self.max_priority == u32::MAX {
            self.rng.next_u32()
        } else {
            self.rng.gen_range(0, self.max_priority + 1)
        }
    }
}

/// Replays a fixed list of priorities, starting over once it is exhausted.
///
/// # Examples
///
/// ```
/// use star_treap::treap::{PrioritySource, SequencePriority};
///
/// let mut priorities = SequencePriority::new(vec![10, 50]);
/// assert_eq!(priorities.next_priority(), 10);
/// assert_eq!(priorities.next_priority(), 50);
/// assert_eq!(priorities.next_priority(), 10);
/// ```
pub struct SequencePriority {
    priorities: Vec<u32>,
    index: usize,
}

impl SequencePriority {
    /// Constructs a source that yields `priorities` in order.
    ///
    /// # Panics
    ///
    /// Panics if `priorities` is empty.
    pub fn new(priorities: Vec<u32>) -> Self {
        assert!(!priorities.is_empty());
        SequencePriority {
            priorities,
            index: 0,
        }
    }
}

impl PrioritySource for SequencePriority {
    fn next_priority(&mut self) -> u32 {
        let priority = self.priorities[self.index];
        self.index = (self.index + 1) % self.priorities.len();
        priority
    }
}
