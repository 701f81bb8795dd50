//! Transposition cache: a hash-keyed memo of searched positions.
//!
//! Entries are stored under the position hash alone, with no verification
//! field; two positions colliding on the full 64-bit hash are conflated.
//! The cache is private to one search invocation and cleared on entry.

use std::collections::HashMap;

use bitbot_core::Move;

#[derive(Clone, Copy, Debug)]
pub struct TtEntry {
    pub best_move: Move,
    pub score: i32,
    /// Remaining depth the stored score was searched to.
    pub depth: u8,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn probe(&self, key: u64) -> Option<TtEntry> {
        self.entries.get(&key).copied()
    }

    pub fn store(&mut self, key: u64, best_move: Move, score: i32, depth: u8) {
        self.entries.insert(
            key,
            TtEntry {
                best_move,
                score,
                depth,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
