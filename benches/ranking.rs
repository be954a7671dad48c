//! Benchmark suite for the ranking pipeline
//!
//! Measures aggregation and ranking over generated round-robin leagues using
//! the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Every team plays every other team home and away, so a league of `n` teams
//! produces `n * (n - 1)` match lines.

use rust_league_ranker::{rank, PointsTable};

fn main() {
    divan::main();
}

/// Generate round-robin results with a deterministic mix of wins and draws
fn round_robin(teams: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(teams * teams.saturating_sub(1));
    for home in 0..teams {
        for away in 0..teams {
            if home == away {
                continue;
            }
            let home_score = (home * 7 + away * 3) % 5;
            let away_score = (home * 2 + away * 5) % 4;
            lines.push(format!(
                "Team {} {}, Team {} {}",
                home, home_score, away, away_score
            ));
        }
    }
    lines
}

/// Parse and aggregate match lines into a points table
#[divan::bench(args = [10, 100, 500])]
fn aggregate(bencher: divan::Bencher, teams: usize) {
    let lines = round_robin(teams);
    bencher.bench(|| PointsTable::from_lines(&lines).expect("Aggregation failed"));
}

/// Rank a prebuilt points table
#[divan::bench(args = [10, 100, 500])]
fn rank_table(bencher: divan::Bencher, teams: usize) {
    let table = PointsTable::from_lines(round_robin(teams)).expect("Aggregation failed");
    bencher.bench(|| rank(&table));
}
