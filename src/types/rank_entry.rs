//! Ranking table row for the Rust League Ranker
//!
//! This module defines the RankEntry structure produced by the ranker and
//! its human-readable rendering.

use super::match_result::{Points, TeamName};
use serde::Serialize;
use std::fmt;

/// One row of the final ranking table
///
/// Immutable once produced. The order of a `Vec<RankEntry>` returned by the
/// ranker is the externally visible contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    /// Position in the table (1-based, shared between tied teams)
    pub rank: usize,

    /// The team this row describes
    pub team: TeamName,

    /// Points accumulated over all matches
    pub points: Points,
}

impl RankEntry {
    /// Create a new rank entry
    pub fn new(rank: usize, team: impl Into<TeamName>, points: Points) -> Self {
        RankEntry {
            rank,
            team: team.into(),
            points,
        }
    }

    /// Unit suffix for the points value
    ///
    /// Exactly one point is singular; every other value, zero included, is
    /// plural.
    pub fn points_unit(&self) -> &'static str {
        if self.points == 1 {
            "pt"
        } else {
            "pts"
        }
    }
}

/// Renders as `<rank>. <team>, <points> pt[s]`
impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}, {} {}",
            self.rank,
            self.team,
            self.points,
            self.points_unit()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plural(RankEntry::new(1, "Alpha", 3), "1. Alpha, 3 pts")]
    #[case::singular(RankEntry::new(1, "Alpha", 1), "1. Alpha, 1 pt")]
    #[case::zero_is_plural(RankEntry::new(2, "Zeta", 0), "2. Zeta, 0 pts")]
    #[case::team_with_spaces(RankEntry::new(3, "FC Awesome", 1), "3. FC Awesome, 1 pt")]
    #[case::double_digit_rank(RankEntry::new(12, "Lions", 21), "12. Lions, 21 pts")]
    fn test_display(#[case] entry: RankEntry, #[case] expected: &str) {
        assert_eq!(entry.to_string(), expected);
    }
}
