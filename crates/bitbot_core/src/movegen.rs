use crate::attacks::{
    between, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks,
    rook_attacks,
};
use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::types::*;

/// All legal moves for `side` in `pos`.
pub fn legal_moves(pos: &Position, side: Color) -> Vec<Move> {
    MoveGen::new(pos, side).moves()
}

/// Enemy pieces currently giving check to `side`'s king. The population
/// count is the check multiplicity: 0 none, 1 single, 2 double.
pub fn attackers_of(pos: &Position, side: Color) -> Bitboard {
    match pos.king_square(side) {
        Some(king) => checkers(pos, side, king, pos.occupied()),
        None => Bitboard::EMPTY,
    }
}

pub fn in_check(pos: &Position, side: Color) -> bool {
    attackers_of(pos, side).any()
}

/// Checking pieces against `side`'s king on `king`, under an explicit
/// occupancy so hypothetical removals never touch the position itself.
fn checkers(pos: &Position, side: Color, king: u8, occupied: Bitboard) -> Bitboard {
    let enemy = side.other();
    let diag = pos.piece_bb(enemy, PieceKind::Bishop) | pos.piece_bb(enemy, PieceKind::Queen);
    let ortho = pos.piece_bb(enemy, PieceKind::Rook) | pos.piece_bb(enemy, PieceKind::Queen);
    (bishop_attacks(king, occupied) & diag)
        | (rook_attacks(king, occupied) & ortho)
        | (knight_attacks(king) & pos.piece_bb(enemy, PieceKind::Knight))
        | (pawn_attacks(side, king) & pos.piece_bb(enemy, PieceKind::Pawn))
}

/// Whether `by` attacks `target` under the given occupancy. The king is
/// removed from the occupancy when vetting its own destinations, so it
/// cannot hide behind the square it is leaving.
fn square_attacked(pos: &Position, target: u8, by: Color, occupied: Bitboard) -> bool {
    if (pawn_attacks(by.other(), target) & pos.piece_bb(by, PieceKind::Pawn)).any() {
        return true;
    }
    if (knight_attacks(target) & pos.piece_bb(by, PieceKind::Knight)).any() {
        return true;
    }
    if (king_attacks(target) & pos.piece_bb(by, PieceKind::King)).any() {
        return true;
    }
    let diag = pos.piece_bb(by, PieceKind::Bishop) | pos.piece_bb(by, PieceKind::Queen);
    if (bishop_attacks(target, occupied) & diag).any() {
        return true;
    }
    let ortho = pos.piece_bb(by, PieceKind::Rook) | pos.piece_bb(by, PieceKind::Queen);
    (rook_attacks(target, occupied) & ortho).any()
}

/// Per-call legality state: checkers, the capture-or-block mask, and the
/// pinned pieces with their allowed rays. Move generation is a pure
/// function of (position, side); nothing here survives the call.
pub struct MoveGen<'a> {
    pos: &'a Position,
    side: Color,
    own: Bitboard,
    enemy: Bitboard,
    occupied: Bitboard,
    king: u8,
    checkers: Bitboard,
    check_mask: Bitboard,
    pins: Vec<(u8, Bitboard)>,
}

impl<'a> MoveGen<'a> {
    pub fn new(pos: &'a Position, side: Color) -> Self {
        let own = pos.occupancy(side);
        let enemy = pos.occupancy(side.other());
        let occupied = own | enemy;
        let king = pos.king_square(side).expect("side has no king");

        let checkers = checkers(pos, side, king, occupied);
        // Under a single check every non-king move must capture the checker
        // or land between it and the king.
        let check_mask = if checkers.popcount() == 1
            && let Some(attacker) = checkers.lsb()
        {
            capture_or_block(pos, king, attacker)
        } else {
            Bitboard::ALL
        };
        let pins = find_pins(pos, side, king, occupied, own);

        Self {
            pos,
            side,
            own,
            enemy,
            occupied,
            king,
            checkers,
            check_mask,
            pins,
        }
    }

    pub fn checkers(&self) -> Bitboard {
        self.checkers
    }

    pub fn in_check(&self) -> bool {
        self.checkers.any()
    }

    pub fn moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);

        // Double check: nothing but the king can help.
        if self.checkers.popcount() >= 2 {
            self.king_moves(&mut out);
            return out;
        }

        for from in self.own {
            let piece = self.pos.piece_at(from).expect("occupancy bit without a piece");
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(from, &mut out),
                PieceKind::Knight => self.push_masked(from, knight_attacks(from), &mut out),
                PieceKind::Bishop => {
                    self.push_masked(from, bishop_attacks(from, self.occupied), &mut out)
                }
                PieceKind::Rook => {
                    self.push_masked(from, rook_attacks(from, self.occupied), &mut out)
                }
                PieceKind::Queen => {
                    self.push_masked(from, queen_attacks(from, self.occupied), &mut out)
                }
                PieceKind::King => self.king_moves(&mut out),
            }
        }
        out
    }

    fn pin_ray(&self, sq: u8) -> Option<Bitboard> {
        self.pins
            .iter()
            .find(|(pinned, _)| *pinned == sq)
            .map(|&(_, ray)| ray)
    }

    /// Knight and slider destinations, restricted by pin ray and check mask.
    fn push_masked(&self, from: u8, reach: Bitboard, out: &mut Vec<Move>) {
        let mut targets = reach & !self.own & self.check_mask;
        if let Some(ray) = self.pin_ray(from) {
            targets &= ray;
        }
        for to in targets {
            out.push(Move::new(from, to));
        }
    }

    fn pawn_moves(&self, from: u8, out: &mut Vec<Move>) {
        let (dir, home, promo): (i8, i8, i8) = match self.side {
            Color::White => (1, 1, 7),
            Color::Black => (-1, 6, 0),
        };
        let f = file_of(from);
        let r = rank_of(from);

        let mut targets = Bitboard::EMPTY;

        // Pushes: one step onto an empty square, two from the home rank
        // through two empty squares.
        if let Some(one) = sq(f, r + dir)
            && !self.occupied.contains(one)
        {
            targets.set(one);
            if r == home
                && let Some(two) = sq(f, r + 2 * dir)
                && !self.occupied.contains(two)
            {
                targets.set(two);
            }
        }

        // Ordinary captures.
        targets |= pawn_attacks(self.side, from) & self.enemy;

        if let Some(ray) = self.pin_ray(from) {
            targets &= ray;
        }
        targets &= self.check_mask;

        // En passant is vetted by playing the capture out and re-testing
        // check: that covers the horizontal two-pawn pin the ordinary pin
        // ray misses, and doubles as the check-evasion test when the
        // double-pushed pawn is the checker.
        if let Some(target) = self.pos.en_passant
            && pawn_attacks(self.side, from).contains(target)
            && self.en_passant_is_safe(from, target)
        {
            targets.set(target);
        }

        for to in targets {
            if rank_of(to) == promo {
                for kind in PROMOTION_KINDS {
                    out.push(Move::promoting(from, to, kind));
                }
            } else {
                out.push(Move::new(from, to));
            }
        }
    }

    /// Simulate the full en passant capture (both pawns off, capturer
    /// relocated) and test whether the king is attacked afterwards.
    fn en_passant_is_safe(&self, from: u8, target: u8) -> bool {
        let mut after = self.pos.clone();
        after.apply_move(Move::new(from, target));
        !in_check(&after, self.side)
    }

    fn king_moves(&self, out: &mut Vec<Move>) {
        let from = self.king;
        let enemy = self.side.other();
        let without_king = self.occupied ^ Bitboard::from_square(from);

        for to in king_attacks(from) & !self.own {
            if !square_attacked(self.pos, to, enemy, without_king) {
                out.push(Move::new(from, to));
            }
        }

        // No castling out of check.
        if self.checkers.any() {
            return;
        }
        self.castle_moves(out);
    }

    fn castle_moves(&self, out: &mut Vec<Move>) {
        let enemy = self.side.other();
        let occ = self.occupied;
        let rooks = self.pos.piece_bb(self.side, PieceKind::Rook);

        match self.side {
            Color::White if self.king == 4 => {
                // e1g1: f1 and g1 empty, neither attacked, rook still on h1.
                if self.pos.castling.wk
                    && rooks.contains(7)
                    && !occ.contains(5)
                    && !occ.contains(6)
                    && !square_attacked(self.pos, 5, enemy, occ)
                    && !square_attacked(self.pos, 6, enemy, occ)
                {
                    out.push(Move::new(4, 6));
                }
                // e1c1: b1, c1 and d1 empty, c1 and d1 unattacked, rook on a1.
                if self.pos.castling.wq
                    && rooks.contains(0)
                    && !occ.contains(1)
                    && !occ.contains(2)
                    && !occ.contains(3)
                    && !square_attacked(self.pos, 2, enemy, occ)
                    && !square_attacked(self.pos, 3, enemy, occ)
                {
                    out.push(Move::new(4, 2));
                }
            }
            Color::Black if self.king == 60 => {
                if self.pos.castling.bk
                    && rooks.contains(63)
                    && !occ.contains(61)
                    && !occ.contains(62)
                    && !square_attacked(self.pos, 61, enemy, occ)
                    && !square_attacked(self.pos, 62, enemy, occ)
                {
                    out.push(Move::new(60, 62));
                }
                if self.pos.castling.bq
                    && rooks.contains(56)
                    && !occ.contains(57)
                    && !occ.contains(58)
                    && !occ.contains(59)
                    && !square_attacked(self.pos, 58, enemy, occ)
                    && !square_attacked(self.pos, 59, enemy, occ)
                {
                    out.push(Move::new(60, 58));
                }
            }
            _ => {}
        }
    }
}

/// Capture-or-block targets against a single checker: just its square for a
/// knight or pawn, the square plus the open ray to the king for a slider.
fn capture_or_block(pos: &Position, king: u8, attacker: u8) -> Bitboard {
    let target = Bitboard::from_square(attacker);
    match pos.piece_at(attacker).map(|p| p.kind) {
        Some(PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            between(king, attacker) | target
        }
        _ => target,
    }
}

/// Pinned pieces for `side`, each with the ray it may still move on.
///
/// Candidates are the own pieces directly reachable from the king along
/// queen rays. Each is removed from a copied occupancy; a slider attacker
/// revealed by the removal proves the pin, and the allowed ray runs from
/// the king to that attacker, capture included.
fn find_pins(
    pos: &Position,
    side: Color,
    king: u8,
    occupied: Bitboard,
    own: Bitboard,
) -> Vec<(u8, Bitboard)> {
    let mut pins = Vec::new();
    let candidates = queen_attacks(king, occupied) & own;
    if candidates.is_empty() {
        return pins;
    }

    let enemy = side.other();
    let diag = pos.piece_bb(enemy, PieceKind::Bishop) | pos.piece_bb(enemy, PieceKind::Queen);
    let ortho = pos.piece_bb(enemy, PieceKind::Rook) | pos.piece_bb(enemy, PieceKind::Queen);
    let before =
        (bishop_attacks(king, occupied) & diag) | (rook_attacks(king, occupied) & ortho);

    for candidate in candidates {
        let without = occupied ^ Bitboard::from_square(candidate);
        let after = (bishop_attacks(king, without) & diag) | (rook_attacks(king, without) & ortho);
        if let Some(attacker) = (after & !before).lsb() {
            pins.push((
                candidate,
                between(king, attacker) | Bitboard::from_square(attacker),
            ));
        }
    }
    pins
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
