//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `match_result`: Parsed match lines, scores and outcomes
//! - `rank_entry`: Rows of the final ranking table
//! - `error`: Error types for the league ranker

pub mod error;
pub mod match_result;
pub mod rank_entry;

pub use error::{RankingError, Result};
pub use match_result::{
    MatchOutcome, MatchResult, MatchSide, Points, Score, TeamName, DRAW_POINTS, LOSS_POINTS,
    WIN_POINTS,
};
pub use rank_entry::RankEntry;
