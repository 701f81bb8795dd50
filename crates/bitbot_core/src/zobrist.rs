//! Zobrist position hashing.
//!
//! A position's identity hash XOR-combines random feature keys: one per
//! piece-on-square (12 x 64), one for the side to move, one per castling
//! right, and one per en passant file. The key tables are filled from an
//! explicitly seeded generator passed in by the caller, so hashes are
//! reproducible from run to run and across test processes.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::board::Position;
use crate::types::*;

/// Seed for the engine's own hasher instance.
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct Zobrist {
    pieces: [[[u64; 64]; 6]; 2],
    side: u64,
    /// Keys for [wk, wq, bk, bq].
    castling: [u64; 4],
    en_passant: [u64; 8],
}

impl Zobrist {
    /// Fill the key tables from the supplied generator.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut pieces = [[[0u64; 64]; 6]; 2];
        for color in pieces.iter_mut() {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.next_u64();
                }
            }
        }
        let side = rng.next_u64();
        let mut castling = [0u64; 4];
        for key in castling.iter_mut() {
            *key = rng.next_u64();
        }
        let mut en_passant = [0u64; 8];
        for key in en_passant.iter_mut() {
            *key = rng.next_u64();
        }
        Self {
            pieces,
            side,
            castling,
            en_passant,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed))
    }

    #[inline(always)]
    fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Full hash of a position with `side` to move.
    pub fn hash(&self, pos: &Position, side: Color) -> u64 {
        let mut h = 0u64;
        for color in [Color::White, Color::Black] {
            for kind in PIECE_KINDS {
                for square in pos.piece_bb(color, kind) {
                    h ^= self.pieces[color.idx()][kind.idx()][square as usize];
                }
            }
        }
        if side == Color::Black {
            h ^= self.side;
        }
        if pos.castling.wk {
            h ^= self.castling[0];
        }
        if pos.castling.wq {
            h ^= self.castling[1];
        }
        if pos.castling.bk {
            h ^= self.castling[2];
        }
        if pos.castling.bq {
            h ^= self.castling[3];
        }
        if let Some(target) = pos.en_passant {
            h ^= self.en_passant[file_of(target) as usize];
        }
        h
    }

    /// Incremental update across one applied move. `before` is the position
    /// the move was applied to and `after` the result; the returned value
    /// equals `hash(after, turn.other())` given `hash == hash(before, turn)`.
    pub fn update(&self, hash: u64, before: &Position, after: &Position, mv: Move) -> u64 {
        let mut h = hash ^ self.side;

        // Castling rights only ever disappear.
        if before.castling.wk != after.castling.wk {
            h ^= self.castling[0];
        }
        if before.castling.wq != after.castling.wq {
            h ^= self.castling[1];
        }
        if before.castling.bk != after.castling.bk {
            h ^= self.castling[2];
        }
        if before.castling.bq != after.castling.bq {
            h ^= self.castling[3];
        }

        if let Some(target) = before.en_passant {
            h ^= self.en_passant[file_of(target) as usize];
        }
        if let Some(target) = after.en_passant {
            h ^= self.en_passant[file_of(target) as usize];
        }

        let moved = before.piece_at(mv.from).expect("no piece on origin square");
        h ^= self.piece_key(moved, mv.from);
        match mv.promotion {
            Some(kind) => {
                h ^= self.piece_key(
                    Piece {
                        color: moved.color,
                        kind,
                    },
                    mv.to,
                )
            }
            None => h ^= self.piece_key(moved, mv.to),
        }

        if let Some(captured) = before.piece_at(mv.to) {
            h ^= self.piece_key(captured, mv.to);
        } else if moved.kind == PieceKind::Pawn
            && file_of(mv.from) != file_of(mv.to)
            && before.en_passant == Some(mv.to)
        {
            // En passant removes the double-pushed pawn beside the origin.
            let victim = sq(file_of(mv.to), rank_of(mv.from)).expect("victim square on board");
            h ^= self.piece_key(
                Piece {
                    color: moved.color.other(),
                    kind: PieceKind::Pawn,
                },
                victim,
            );
        }

        // Castling relocates the rook as well.
        if moved.kind == PieceKind::King {
            let rook = match (mv.from, mv.to) {
                (4, 6) => Some((7u8, 5u8)),
                (4, 2) => Some((0u8, 3u8)),
                (60, 62) => Some((63u8, 61u8)),
                (60, 58) => Some((56u8, 59u8)),
                _ => None,
            };
            if let Some((rf, rt)) = rook {
                let piece = Piece {
                    color: moved.color,
                    kind: PieceKind::Rook,
                };
                h ^= self.piece_key(piece, rf);
                h ^= self.piece_key(piece, rt);
            }
        }

        h
    }
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
