use crate::error::ParseMoveError;
use crate::types::*;

/// Encode a move in coordinate notation: origin square, destination square,
/// plus a promotion letter when present, e.g. "e2e4" or "a7a8q".
pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promotion {
        let ch = match p {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// Decode coordinate notation into a move. Castling and en passant carry no
/// marker in this notation; `Position::apply_move` re-derives them from the
/// squares alone.
pub fn uci_to_move(txt: &str) -> Result<Move, ParseMoveError> {
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(ParseMoveError::BadLength(txt.chars().count()));
    }
    let from = coord_to_sq(&txt[0..2])
        .ok_or_else(|| ParseMoveError::BadSquare(txt[0..2].to_string()))?;
    let to = coord_to_sq(&txt[2..4])
        .ok_or_else(|| ParseMoveError::BadSquare(txt[2..4].to_string()))?;
    let promotion = if txt.len() == 5 {
        let ch = txt.as_bytes()[4] as char;
        match ch {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => return Err(ParseMoveError::BadPromotion(ch)),
        }
    } else {
        None
    };
    Ok(Move {
        from,
        to,
        promotion,
    })
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
