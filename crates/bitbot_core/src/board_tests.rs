use super::*;
use crate::uci::uci_to_move;

fn apply_all(pos: &mut Position, moves: &[&str]) {
    for txt in moves {
        pos.apply_move(uci_to_move(txt).expect("test move parses"));
    }
}

#[test]
fn test_startpos_layout() {
    let pos = Position::startpos();
    assert_eq!(
        pos.piece_at(4),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King
        })
    );
    assert_eq!(
        pos.piece_at(59),
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Queen
        })
    );
    assert_eq!(pos.occupancy(Color::White).popcount(), 16);
    assert_eq!(pos.occupancy(Color::Black).popcount(), 16);
    assert_eq!(pos.castling, CastlingRights::all());
    assert_eq!(pos.en_passant, None);
}

#[test]
fn test_from_fen_startpos() {
    let (pos, side) =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(pos, Position::startpos());
    assert_eq!(side, Color::White);
}

#[test]
fn test_from_fen_counters_optional() {
    // Halfmove/fullmove are accepted but not required.
    let (pos, side) = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K -").unwrap();
    assert_eq!(side, Color::White);
    assert!(pos.castling.wk);
    assert!(!pos.castling.wq);
}

#[test]
fn test_from_fen_rejects_malformed_input() {
    assert_eq!(
        Position::from_fen("8/8/8/8 w"),
        Err(ParseFenError::MissingFields(2))
    );
    assert!(matches!(
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"),
        Err(ParseFenError::BadRankCount(7))
    ));
    assert!(matches!(
        Position::from_fen("rnbqkbnx/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(ParseFenError::BadPiece('x'))
    ));
    assert!(matches!(
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
        Err(ParseFenError::BadSideToMove(_))
    ));
    assert!(matches!(
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1"),
        Err(ParseFenError::BadEnPassant(_))
    ));
}

#[test]
fn test_double_push_sets_and_clears_en_passant() {
    let mut pos = Position::startpos();
    apply_all(&mut pos, &["e2e4"]);
    assert_eq!(pos.en_passant, Some(20)); // e3

    apply_all(&mut pos, &["b8c6"]);
    assert_eq!(pos.en_passant, None);
}

#[test]
fn test_generic_capture() {
    let mut pos = Position::startpos();
    apply_all(&mut pos, &["e2e4", "d7d5", "e4d5"]);
    assert_eq!(
        pos.piece_at(35), // d5
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Pawn
        })
    );
    assert_eq!(pos.piece_bb(Color::Black, PieceKind::Pawn).popcount(), 7);
}

#[test]
fn test_castling_application() {
    let (mut pos, _) = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    apply_all(&mut pos, &["e1g1"]);
    assert_eq!(pos.king_square(Color::White), Some(6)); // g1
    assert!(pos.piece_bb(Color::White, PieceKind::Rook).contains(5)); // f1
    assert!(!pos.piece_bb(Color::White, PieceKind::Rook).contains(7));
    assert!(!pos.castling.wk);
    assert!(!pos.castling.wq);
    assert!(pos.castling.bk);

    apply_all(&mut pos, &["e8c8"]);
    assert_eq!(pos.king_square(Color::Black), Some(58)); // c8
    assert!(pos.piece_bb(Color::Black, PieceKind::Rook).contains(59)); // d8
    assert!(!pos.castling.bk);
    assert!(!pos.castling.bq);
}

#[test]
fn test_king_move_revokes_both_rights() {
    let (mut pos, _) = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    apply_all(&mut pos, &["e1e2"]);
    assert!(!pos.castling.wk);
    assert!(!pos.castling.wq);
    assert!(pos.castling.bk);
    assert!(pos.castling.bq);
}

#[test]
fn test_rook_move_revokes_one_right() {
    let (mut pos, _) = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    apply_all(&mut pos, &["h1h4"]);
    assert!(!pos.castling.wk);
    assert!(pos.castling.wq);
}

#[test]
fn test_rook_captured_in_place_revokes_right() {
    // Bishop takes the untouched a8 rook; black's queen-side right must go.
    let (mut pos, _) = Position::from_fen("r3k3/8/8/8/8/8/8/R3K2B w Qq - 0 1").unwrap();
    apply_all(&mut pos, &["h1a8"]);
    assert!(!pos.castling.bq);
    assert!(pos.castling.wq);
}

#[test]
fn test_en_passant_application() {
    let (mut pos, _) = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    apply_all(&mut pos, &["e5d6"]);
    assert!(pos.piece_bb(Color::White, PieceKind::Pawn).contains(43)); // d6
    assert!(pos.piece_bb(Color::Black, PieceKind::Pawn).is_empty()); // d5 pawn gone
    assert_eq!(pos.en_passant, None);
}

#[test]
fn test_promotion_application() {
    let (mut pos, _) = Position::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    apply_all(&mut pos, &["b7b8q"]);
    assert!(pos.piece_bb(Color::White, PieceKind::Pawn).is_empty());
    assert!(pos.piece_bb(Color::White, PieceKind::Queen).contains(57)); // b8
}

#[test]
fn test_capture_promotion_revokes_captured_rook_right() {
    let (mut pos, _) = Position::from_fen("r3k3/1P6/8/8/8/8/8/4K3 w q - 0 1").unwrap();
    apply_all(&mut pos, &["b7a8q"]);
    assert!(pos.piece_bb(Color::White, PieceKind::Queen).contains(56)); // a8
    assert!(pos.piece_bb(Color::Black, PieceKind::Rook).is_empty());
    assert!(!pos.castling.bq);
}
