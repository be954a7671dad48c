//! Match-related types for the Rust League Ranker
//!
//! This module defines the structured form of a single match result line and
//! the outcome derived from comparing its two scores.

use std::cmp::Ordering;

/// Team name, used verbatim as the points table key
///
/// Compared by raw byte order (which matches code point order for UTF-8),
/// never by locale or case-folded order.
pub type TeamName = String;

/// Goals scored by one side in a match
pub type Score = u32;

/// League points accumulated by a team
pub type Points = u32;

/// Points awarded for a win
pub const WIN_POINTS: Points = 3;

/// Points awarded to each side of a draw
pub const DRAW_POINTS: Points = 1;

/// Points awarded for a loss
pub const LOSS_POINTS: Points = 0;

/// One side of a match: a team and the score it posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSide {
    /// Team name, with internal single spaces preserved
    pub team: TeamName,

    /// Goals scored
    pub score: Score,
}

impl MatchSide {
    /// Create a new match side
    pub fn new(team: impl Into<TeamName>, score: Score) -> Self {
        MatchSide {
            team: team.into(),
            score,
        }
    }
}

/// A parsed match result line
///
/// Ephemeral: built by the line parser and consumed immediately by the
/// points table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The side written first on the line
    pub first: MatchSide,

    /// The side written second on the line
    pub second: MatchSide,
}

/// Result of a match from the point of view of the first side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// First side scored more
    FirstWins,

    /// Second side scored more
    SecondWins,

    /// Equal scores
    Draw,
}

impl MatchResult {
    /// Create a new match result from its two sides
    pub fn new(first: MatchSide, second: MatchSide) -> Self {
        MatchResult { first, second }
    }

    /// Decide the outcome by numeric score comparison
    pub fn outcome(&self) -> MatchOutcome {
        match self.first.score.cmp(&self.second.score) {
            Ordering::Greater => MatchOutcome::FirstWins,
            Ordering::Less => MatchOutcome::SecondWins,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}
