//! Transposition cache keyed on the exact search window.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ataxx_core::Side;
use tracing::debug;

/// Cache key: the position plus every search parameter that shaped the result.
///
/// The `(alpha, beta)` window is part of the key on purpose: an entry
/// computed under a narrow window may describe a cutoff rather than an
/// exact score, so it is only safe to reuse when the window matches
/// exactly. That costs hit rate but can never return a stale bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey<G> {
    /// The position being searched.
    pub game: G,
    /// The side about to move.
    pub side: Side,
    /// Remaining search depth.
    pub depth: u8,
    /// Lower bound of the window at probe time.
    pub alpha: i32,
    /// Upper bound of the window at probe time.
    pub beta: i32,
}

/// Abstract transposition cache. Replacement strategy is left to the
/// implementor; the search only requires that `load` after `store` with
/// an identical key returns the stored value or nothing at all.
pub trait Transposition<G> {
    /// Create a cache bounded to `capacity` entries.
    fn new(capacity: usize) -> Self
    where
        Self: Sized;

    /// Look up a previously stored search result.
    fn load(&self, key: &SearchKey<G>) -> Option<(G, i32)>;

    /// Record the result of a completed search.
    fn store(&mut self, key: SearchKey<G>, board: G, score: i32);
}

/// Bounded transposition table with flush-on-full replacement: once the
/// table holds `capacity` entries, the next store wipes it wholesale.
/// No aging, no per-entry eviction.
pub struct TranspositionTable<G> {
    entries: HashMap<SearchKey<G>, (G, i32)>,
    capacity: usize,
}

impl<G: Eq + Hash + Clone> TranspositionTable<G> {
    /// Create a table bounded to `capacity` entries (at least one).
    pub fn new(capacity: usize) -> TranspositionTable<G> {
        TranspositionTable {
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Return the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the entry bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<G: Eq + Hash + Clone> Transposition<G> for TranspositionTable<G> {
    fn new(capacity: usize) -> Self {
        TranspositionTable::new(capacity)
    }

    fn load(&self, key: &SearchKey<G>) -> Option<(G, i32)> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: SearchKey<G>, board: G, score: i32) {
        if self.entries.len() >= self.capacity {
            debug!(entries = self.entries.len(), "transposition table full, flushing");
            self.entries.clear();
        }
        self.entries.insert(key, (board, score));
    }
}

impl<G> fmt::Debug for TranspositionTable<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("entries", &self.entries.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
