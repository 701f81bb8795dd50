//! Game-session adapter.
//!
//! Bridges a move-list game protocol to the engine: replay the history into
//! a fresh position (or just the latest move on later calls), ask the
//! search for a reply, play it on the internal board and hand it back.

use alphabeta_engine::{AlphaBeta, MaterialEval};
use bitbot_core::{
    legal_moves, move_to_uci, uci_to_move, Color, ParseMoveError, Position, SearchLimits,
};

#[cfg(test)]
mod lib_tests;

/// What the game host tells us each turn: which side we play and every move
/// made so far, oldest first, in coordinate notation.
#[derive(Debug, Clone)]
pub struct GameState {
    pub playing: Color,
    pub moves: Vec<String>,
}

impl GameState {
    pub fn new(playing: Color) -> Self {
        Self {
            playing,
            moves: Vec::new(),
        }
    }
}

/// A playing session. Keeps its own board in sync with the host's move
/// list so consecutive calls only need the latest move applied.
pub struct Bot {
    position: Position,
    applied: usize,
    engine: AlphaBeta<MaterialEval>,
    limits: SearchLimits,
}

impl Bot {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            position: Position::startpos(),
            applied: 0,
            engine: AlphaBeta::new(MaterialEval),
            limits,
        }
    }

    /// Decide the next move for the state's playing side. `Ok(None)` means
    /// the game is over at our root: mate if we stand in check, stalemate
    /// otherwise. Malformed history moves are rejected, not applied.
    pub fn next_move(&mut self, gs: &GameState) -> Result<Option<String>, ParseMoveError> {
        // A shorter list than what we already replayed means a new game.
        if gs.moves.len() < self.applied {
            log::debug!("history shrank, starting a fresh board");
            self.position = Position::startpos();
            self.applied = 0;
        }

        for txt in &gs.moves[self.applied..] {
            let mv = uci_to_move(txt)?;
            self.position.apply_move(mv);
        }
        self.applied = gs.moves.len();

        let reply = self.engine.find_best_move(
            &self.position,
            gs.playing,
            self.limits.depth,
            self.limits.move_time,
        );
        match reply {
            Some(mv) => {
                self.position.apply_move(mv);
                self.applied += 1;
                let txt = move_to_uci(mv);
                log::info!(
                    "playing {txt} after {} nodes ({} prior moves)",
                    self.engine.nodes(),
                    gs.moves.len()
                );
                Ok(Some(txt))
            }
            None => Ok(None),
        }
    }

    /// Legal replies in the current session position, mostly for the host
    /// to validate input against.
    pub fn legal_replies(&self, side: Color) -> Vec<String> {
        legal_moves(&self.position, side)
            .into_iter()
            .map(move_to_uci)
            .collect()
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new(SearchLimits::default())
    }
}
