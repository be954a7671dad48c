//! Rust League Ranker Library
//! # Overview
//!
//! This library calculates the ranking table for a sports league from a file
//! of match results such as `Lions 3, Snakes 3`.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (MatchResult, RankEntry, RankingError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Ranking logic:
//!   - [`core::parser`] - Match result line parsing
//!   - [`core::points_table`] - Points aggregation per team
//!   - [`core::ranker`] - Ordered ranking with shared ranks for ties
//! - [`io`] - Streaming input reader and output formats
//! - [`pipeline`] - Path validation and orchestration of a run
//! - [`logging`] - tracing subscriber setup
//!
//! # Scoring Rules
//!
//! - **Win**: 3 points
//! - **Draw**: 1 point to each team
//! - **Loss**: 0 points, but the team still appears in the table
//!
//! # Ranking Rules
//!
//! Teams are ordered by points, highest first. Teams level on points are
//! ordered by name in raw code point order and share a rank; the next team
//! down takes its position in the table (1, 1, 3, ...).

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use self::core::{parse_line, rank, PointsTable};
pub use pipeline::{calculate, rank_file, RankConfig};
pub use types::{
    MatchOutcome, MatchResult, MatchSide, Points, RankEntry, RankingError, Score, TeamName,
};
