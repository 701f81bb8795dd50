//! Alpha-beta chess engine
//!
//! Iterative-deepening alpha-beta search over `bitbot_core`'s legal move
//! generator, with a Zobrist-keyed transposition cache and a material
//! evaluator as the default leaf heuristic.

mod eval;
mod search;
mod tt;

pub use eval::{Evaluate, MaterialEval, PIECE_VALUES};
pub use search::{AlphaBeta, MATE_SCORE};
pub use tt::{TranspositionTable, TtEntry};
