//! Minimal UCI front-end.
//!
//! The engine core keeps no side-to-move, so this loop tracks the turn
//! itself: FEN field two seeds it and every applied move flips it.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use alphabeta_engine::{AlphaBeta, MaterialEval};
use bitbot_core::{move_to_uci, uci_to_move, Color, Position, SearchLimits};

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut engine = AlphaBeta::new(MaterialEval);
    let mut pos = Position::startpos();
    let mut side = Color::White;
    let mut limits = SearchLimits::default();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name bitbot 0.1").ok();
                writeln!(stdout, "id author bitbot").ok();
                writeln!(stdout, "option name Depth type spin default 4 min 1 max 12").ok();
                writeln!(stdout, "option name MoveTime type spin default 0 min 0 max 600000").ok();
                writeln!(stdout, "uciok").ok();
                stdout.flush().ok();
            }
            "isready" => {
                writeln!(stdout, "readyok").ok();
                stdout.flush().ok();
            }
            "setoption" => {
                apply_option(&parts, &mut limits);
            }
            "ucinewgame" => {
                pos = Position::startpos();
                side = Color::White;
            }
            "position" => {
                if let Some((p, s)) = parse_position(&parts[1..]) {
                    pos = p;
                    side = s;
                }
            }
            "go" => {
                let best = engine.find_best_move(&pos, side, limits.depth, limits.move_time);
                match best {
                    Some(mv) => writeln!(stdout, "bestmove {}", move_to_uci(mv)).ok(),
                    None => writeln!(stdout, "bestmove 0000").ok(),
                };
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
}

/// Example: setoption name Depth value 6
fn apply_option(parts: &[&str], limits: &mut SearchLimits) {
    let name = parts
        .iter()
        .position(|&p| p == "name")
        .and_then(|i| parts.get(i + 1));
    let value = parts
        .iter()
        .position(|&p| p == "value")
        .and_then(|i| parts.get(i + 1));
    let (name, value) = match (name, value) {
        (Some(n), Some(v)) => (*n, *v),
        _ => return,
    };

    match name {
        "Depth" => {
            if let Ok(d) = value.parse::<u8>() {
                limits.depth = d.clamp(1, 12);
            }
        }
        "MoveTime" => {
            if let Ok(ms) = value.parse::<u64>() {
                limits.move_time = if ms == 0 {
                    None
                } else {
                    Some(Duration::from_millis(ms))
                };
            }
        }
        _ => {}
    }
}

/// Supports: "startpos [moves ...]" and "fen <6 fields> [moves ...]".
fn parse_position(args: &[&str]) -> Option<(Position, Color)> {
    let (mut pos, mut side, mut i) = match args.first() {
        Some(&"startpos") => (Position::startpos(), Color::White, 1),
        Some(&"fen") => {
            let end = args
                .iter()
                .position(|&a| a == "moves")
                .unwrap_or(args.len());
            let fen = args[1..end].join(" ");
            let (pos, side) = Position::from_fen(&fen).ok()?;
            (pos, side, end)
        }
        _ => return None,
    };

    if args.get(i) == Some(&"moves") {
        i += 1;
        while let Some(txt) = args.get(i) {
            let mv = uci_to_move(txt).ok()?;
            pos.apply_move(mv);
            side = side.other();
            i += 1;
        }
    }
    Some((pos, side))
}
