//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p bitbot_core -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 5 over the built-in positions
//!   cargo flamegraph --example perft_bench -p bitbot_core
//!
//!   # Custom depth and position (Kiwipete - complex middlegame)
//!   cargo flamegraph --example perft_bench -p bitbot_core -- 5 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"

use bitbot_core::{Position, perft};
use std::env;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Promotion tangle",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    if let Some(fen) = args.get(2) {
        run_position(fen, fen, depth);
        return;
    }

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;
    println!("=== Perft Benchmark Suite (depth {depth}) ===");
    for (name, fen) in TEST_POSITIONS {
        let (nodes, elapsed) = run_position(name, fen, depth);
        total_nodes += nodes;
        total_time += elapsed;
    }
    let nps = total_nodes as f64 / total_time.as_secs_f64().max(f64::EPSILON);
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({nps:.0} nps)");
}

fn run_position(name: &str, fen: &str, depth: u8) -> (u64, std::time::Duration) {
    let (pos, side) = Position::from_fen(fen).expect("valid FEN");

    let start = Instant::now();
    let nodes = perft(&pos, side, depth);
    let elapsed = start.elapsed();

    let nps = nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!("{name:.<30} {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    (nodes, elapsed)
}
