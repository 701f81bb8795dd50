use crate::bitboard::Bitboard;
use crate::error::ParseFenError;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }
}

/// Board state: one bitboard per piece kind and color, the en passant
/// target, and the castling rights. The side to move is not stored; every
/// operation that needs it takes it as an argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pieces: [[Bitboard; 6]; 2],
    /// Square passed over by the most recent double pawn push, if any.
    pub en_passant: Option<u8>,
    pub castling: CastlingRights,
}

impl Position {
    /// Standard start layout with full castling rights.
    pub fn startpos() -> Self {
        let mut p = Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            en_passant: None,
            castling: CastlingRights::all(),
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.put(Color::White, kind, f as u8);
            p.put(Color::Black, kind, 56 + f as u8);
        }
        for f in 0..8u8 {
            p.put(Color::White, PieceKind::Pawn, 8 + f);
            p.put(Color::Black, PieceKind::Pawn, 48 + f);
        }
        p
    }

    /// Parse the four-field FEN subset: placement, side to move, castling,
    /// en passant. Halfmove and fullmove counters are accepted and ignored.
    /// Returns the position together with the side to move, since the
    /// position itself does not carry it.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), ParseFenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ParseFenError::MissingFields(parts.len()));
        }

        let mut pos = Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            en_passant: None,
            castling: CastlingRights::none(),
        };

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseFenError::BadRankCount(ranks.len()));
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(ParseFenError::BadPiece(ch)),
                    };
                    let square = sq(file, rank).ok_or(ParseFenError::BadFileWidth)?;
                    pos.put(color, kind, square);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(ParseFenError::BadFileWidth);
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseFenError::BadSideToMove(other.to_string())),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(ParseFenError::BadCastling(c)),
                }
            }
        }

        if parts[3] != "-" {
            let target = coord_to_sq(parts[3])
                .ok_or_else(|| ParseFenError::BadEnPassant(parts[3].to_string()))?;
            pos.en_passant = Some(target);
        }

        Ok((pos, side_to_move))
    }

    #[inline(always)]
    pub fn piece_bb(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.idx()][kind.idx()]
    }

    /// All squares occupied by `color`.
    pub fn occupancy(&self, color: Color) -> Bitboard {
        let side = &self.pieces[color.idx()];
        side[0] | side[1] | side[2] | side[3] | side[4] | side[5]
    }

    /// All occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        for color in [Color::White, Color::Black] {
            for kind in PIECE_KINDS {
                if self.pieces[color.idx()][kind.idx()].contains(sq) {
                    return Some(Piece { color, kind });
                }
            }
        }
        None
    }

    pub fn king_square(&self, color: Color) -> Option<u8> {
        self.piece_bb(color, PieceKind::King).lsb()
    }

    fn put(&mut self, color: Color, kind: PieceKind, sq: u8) {
        self.pieces[color.idx()][kind.idx()].set(sq);
    }

    fn lift(&mut self, color: Color, kind: PieceKind, sq: u8) {
        self.pieces[color.idx()][kind.idx()].clear(sq);
    }

    /// Remove whatever occupies `sq`, returning it.
    fn take(&mut self, sq: u8) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.lift(piece.color, piece.kind, sq);
        Some(piece)
    }

    /// Apply a move, assuming it is legal. Only generator-produced or
    /// pre-validated moves may be passed in; nothing is re-checked here.
    pub fn apply_move(&mut self, mv: Move) {
        let moved = self.piece_at(mv.from).expect("no piece on origin square");
        let side = moved.color;

        // Promotion: the pawn leaves the board and the chosen piece appears.
        if let Some(kind) = mv.promotion {
            self.lift(side, PieceKind::Pawn, mv.from);
            if let Some(captured) = self.take(mv.to) {
                self.revoke_on_capture(captured, mv.to);
            }
            self.put(side, kind, mv.to);
            self.en_passant = None;
            return;
        }

        // Castling: a two-square king move is unambiguous, so the rook
        // relocation follows from the origin/destination pair alone.
        if moved.kind == PieceKind::King {
            let rook = match (mv.from, mv.to) {
                (4, 6) => Some((7u8, 5u8)),    // e1g1, rook h1 -> f1
                (4, 2) => Some((0u8, 3u8)),    // e1c1, rook a1 -> d1
                (60, 62) => Some((63u8, 61u8)), // e8g8, rook h8 -> f8
                (60, 58) => Some((56u8, 59u8)), // e8c8, rook a8 -> d8
                _ => None,
            };
            if let Some((rf, rt)) = rook {
                self.lift(side, PieceKind::King, mv.from);
                self.put(side, PieceKind::King, mv.to);
                self.lift(side, PieceKind::Rook, rf);
                self.put(side, PieceKind::Rook, rt);
                match side {
                    Color::White => {
                        self.castling.wk = false;
                        self.castling.wq = false;
                    }
                    Color::Black => {
                        self.castling.bk = false;
                        self.castling.bq = false;
                    }
                }
                self.en_passant = None;
                return;
            }
        }

        // En passant: a pawn lands diagonally on an empty square that
        // matches the recorded target; the victim sits beside the origin.
        if moved.kind == PieceKind::Pawn
            && file_of(mv.from) != file_of(mv.to)
            && self.piece_at(mv.to).is_none()
            && self.en_passant == Some(mv.to)
        {
            let victim = sq(file_of(mv.to), rank_of(mv.from)).expect("victim square on board");
            self.take(victim);
            self.lift(side, PieceKind::Pawn, mv.from);
            self.put(side, PieceKind::Pawn, mv.to);
            self.en_passant = None;
            return;
        }

        // A double push opens its intermediate square to en passant; any
        // other move clears the target.
        self.en_passant = if moved.kind == PieceKind::Pawn
            && (rank_of(mv.from) - rank_of(mv.to)).abs() == 2
        {
            sq(file_of(mv.from), (rank_of(mv.from) + rank_of(mv.to)) / 2)
        } else {
            None
        };

        // Rights go away when the king moves or a rook leaves its home
        // square.
        match (moved.kind, side) {
            (PieceKind::King, Color::White) => {
                self.castling.wk = false;
                self.castling.wq = false;
            }
            (PieceKind::King, Color::Black) => {
                self.castling.bk = false;
                self.castling.bq = false;
            }
            (PieceKind::Rook, Color::White) => {
                if mv.from == 0 {
                    self.castling.wq = false;
                }
                if mv.from == 7 {
                    self.castling.wk = false;
                }
            }
            (PieceKind::Rook, Color::Black) => {
                if mv.from == 56 {
                    self.castling.bq = false;
                }
                if mv.from == 63 {
                    self.castling.bk = false;
                }
            }
            _ => {}
        }

        if let Some(captured) = self.take(mv.to) {
            self.revoke_on_capture(captured, mv.to);
        }
        self.lift(side, moved.kind, mv.from);
        self.put(side, moved.kind, mv.to);
    }

    /// A rook captured sitting on its home square loses that side's right,
    /// even though it never moved.
    fn revoke_on_capture(&mut self, captured: Piece, sq: u8) {
        if captured.kind != PieceKind::Rook {
            return;
        }
        match (captured.color, sq) {
            (Color::White, 0) => self.castling.wq = false,
            (Color::White, 7) => self.castling.wk = false,
            (Color::Black, 56) => self.castling.bq = false,
            (Color::Black, 63) => self.castling.bk = false,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
