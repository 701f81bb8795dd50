//! Iterative-deepening alpha-beta search.
//!
//! One public entry: `find_best_move`. Each deepening pass runs full-width
//! alpha-beta over the root moves; the wall-clock budget is polled only at
//! root-move boundaries, and a pass cut short by the deadline is discarded
//! whole rather than partially trusted.

use std::time::Duration;

use bitbot_core::{
    attackers_of, legal_moves, Color, Move, Position, TimeControl, Zobrist, DEFAULT_SEED,
};

use crate::eval::Evaluate;
use crate::tt::TranspositionTable;

/// Base score for mate; remaining depth is added on top so that shallower
/// mates outrank deeper ones.
pub const MATE_SCORE: i32 = 1_000_000;

/// Alpha-beta engine: evaluator, seeded position hasher, and a
/// transposition cache private to each `find_best_move` call.
pub struct AlphaBeta<E: Evaluate> {
    evaluator: E,
    zobrist: Zobrist,
    tt: TranspositionTable,
    nodes: u64,
}

impl<E: Evaluate> AlphaBeta<E> {
    pub fn new(evaluator: E) -> Self {
        Self::with_seed(evaluator, DEFAULT_SEED)
    }

    /// Build with an explicit hasher seed, for reproducible runs.
    pub fn with_seed(evaluator: E, seed: u64) -> Self {
        Self {
            evaluator,
            zobrist: Zobrist::from_seed(seed),
            tt: TranspositionTable::new(),
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick a move for `side` within `max_depth` plies and the given time
    /// budget. Returns None only when the root has no legal moves; the
    /// caller tells mate from stalemate by whether `side` is in check.
    pub fn find_best_move(
        &mut self,
        pos: &Position,
        side: Color,
        max_depth: u8,
        budget: Option<Duration>,
    ) -> Option<Move> {
        self.tt.clear();
        self.nodes = 0;
        let clock = TimeControl::start(budget);

        let mut moves = legal_moves(pos, side);
        if moves.is_empty() {
            return None;
        }
        let root_hash = self.zobrist.hash(pos, side);

        let mut best: Option<Move> = None;
        for depth in 1..=max_depth {
            // Searching the previous best first tightens the window early.
            if let Some(prev) = best {
                if let Some(i) = moves.iter().position(|&m| m == prev) {
                    moves.swap(0, i);
                }
            }

            match self.root_pass(pos, side, depth, &moves, root_hash, &clock) {
                Some((mv, score)) => {
                    best = Some(mv);
                    log::debug!(
                        "depth {depth} done in {:.3?}: best {mv:?} score {score} ({} nodes)",
                        clock.elapsed(),
                        self.nodes
                    );
                }
                None => {
                    log::debug!(
                        "budget spent during depth {depth}, keeping depth {} result",
                        depth - 1
                    );
                    break;
                }
            }
            if clock.expired() {
                break;
            }
        }

        // With a budget too tight for even one completed pass, any legal
        // move beats forfeiting.
        best.or_else(|| moves.first().copied())
    }

    /// One full-width pass at the target depth. Returns None if the budget
    /// ran out before every root move was searched.
    fn root_pass(
        &mut self,
        pos: &Position,
        side: Color,
        depth: u8,
        moves: &[Move],
        root_hash: u64,
        clock: &TimeControl,
    ) -> Option<(Move, i32)> {
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for &mv in moves {
            if clock.expired() {
                return None;
            }

            let mut child = pos.clone();
            child.apply_move(mv);
            let child_hash = self.zobrist.update(root_hash, pos, &child, mv);
            let score = self.search(
                &child,
                child_hash,
                depth - 1,
                alpha,
                beta,
                side.other(),
                side,
            );

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }
        best
    }

    /// Alpha-beta over fresh position copies, maximizing whenever it is the
    /// searching side's turn and minimizing otherwise.
    #[allow(clippy::too_many_arguments)]
    fn search(
        &mut self,
        pos: &Position,
        hash: u64,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        turn: Color,
        searching: Color,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(pos, searching);
        }

        // A cached score searched at least this deep is taken as-is; a
        // shallower entry still donates its move as an ordering hint.
        let mut hint: Option<Move> = None;
        if let Some(entry) = self.tt.probe(hash) {
            if entry.depth >= depth {
                return entry.score;
            }
            hint = Some(entry.best_move);
        }

        let mut moves = legal_moves(pos, turn);
        if moves.is_empty() {
            return if attackers_of(pos, turn).any() {
                // Mated: catastrophic for whoever is to move, scaled by
                // remaining depth so nearer mates dominate.
                if turn == searching {
                    -(MATE_SCORE + depth as i32)
                } else {
                    MATE_SCORE + depth as i32
                }
            } else {
                0 // stalemate
            };
        }
        if let Some(hint) = hint {
            if let Some(i) = moves.iter().position(|&m| m == hint) {
                moves.swap(0, i);
            }
        }

        let maximizing = turn == searching;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = moves[0];

        for &mv in &moves {
            let mut child = pos.clone();
            child.apply_move(mv);
            let child_hash = self.zobrist.update(hash, pos, &child, mv);
            let score = self.search(
                &child,
                child_hash,
                depth - 1,
                alpha,
                beta,
                turn.other(),
                searching,
            );

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        self.tt.store(hash, best_move, best_score, depth);
        best_score
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
