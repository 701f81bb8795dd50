//! Material-based position evaluation

use bitbot_core::{Color, Position, PIECE_KINDS};

/// Leaf heuristic contract: a pure score for `pos` from `side`'s point of
/// view, higher is better. The search treats implementations as opaque.
pub trait Evaluate {
    fn evaluate(&self, pos: &Position, side: Color) -> i32;
}

/// Material value per piece kind in centipawns, in bitboard-table order.
pub const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Plain material counting.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEval;

impl Evaluate for MaterialEval {
    fn evaluate(&self, pos: &Position, side: Color) -> i32 {
        let mut score = 0i32;
        for kind in PIECE_KINDS {
            let value = PIECE_VALUES[kind.idx()];
            score += value * pos.piece_bb(Color::White, kind).popcount() as i32;
            score -= value * pos.piece_bb(Color::Black, kind).popcount() as i32;
        }
        match side {
            Color::White => score,
            Color::Black => -score,
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
