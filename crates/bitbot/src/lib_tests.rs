use super::*;

fn quick_limits() -> SearchLimits {
    SearchLimits::depth(2)
}

#[test]
fn test_opening_move_is_legal() {
    let mut bot = Bot::new(quick_limits());
    let gs = GameState::new(Color::White);

    let reply = bot.next_move(&gs).unwrap().expect("white can always open");
    assert!(Position::startpos()
        .piece_at(uci_to_move(&reply).unwrap().from)
        .is_some());
}

#[test]
fn test_replays_history_then_updates_incrementally() {
    let mut bot = Bot::new(quick_limits());

    // First call replays the full history.
    let mut gs = GameState::new(Color::Black);
    gs.moves = vec!["e2e4".to_string()];
    let first = bot.next_move(&gs).unwrap().expect("black has replies");

    // Second call supplies our own move back plus white's answer.
    gs.moves.push(first.clone());
    gs.moves.push("d2d4".to_string());
    let second = bot.next_move(&gs).unwrap().expect("game goes on");
    assert_ne!(second, "");

    // The board the bot searched must accept the reply it just made.
    assert!(gs.moves.iter().all(|m| uci_to_move(m).is_ok()));
}

#[test]
fn test_detects_new_game_when_history_shrinks() {
    let mut bot = Bot::new(quick_limits());

    let mut gs = GameState::new(Color::White);
    gs.moves = vec!["e2e4".to_string(), "e7e5".to_string(), "g1f3".to_string(), "b8c6".to_string()];
    bot.next_move(&gs).unwrap();

    // A fresh game starts over with an empty list.
    let gs = GameState::new(Color::White);
    let reply = bot.next_move(&gs).unwrap().expect("fresh game has moves");
    let mv = uci_to_move(&reply).unwrap();
    let legal = legal_moves(&Position::startpos(), Color::White);
    assert!(legal.contains(&mv));
}

#[test]
fn test_checkmated_session_returns_none() {
    let mut bot = Bot::new(quick_limits());
    let mut gs = GameState::new(Color::Black);
    gs.moves = ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(bot.next_move(&gs).unwrap(), None);
}

#[test]
fn test_malformed_history_move_is_rejected() {
    let mut bot = Bot::new(quick_limits());
    let mut gs = GameState::new(Color::Black);
    gs.moves = vec!["e2x4".to_string()];

    assert!(bot.next_move(&gs).is_err());
}

#[test]
fn test_legal_replies_lists_twenty_openings() {
    let bot = Bot::new(quick_limits());
    assert_eq!(bot.legal_replies(Color::White).len(), 20);
}
