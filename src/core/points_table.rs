//! Points aggregation module
//!
//! This module provides the `PointsTable` struct which accumulates league
//! points per team as match results are recorded.
//!
//! The PointsTable is responsible for:
//! - Adding a team on its first appearance, whatever the result
//! - Awarding 3 points for a win, 1 for a draw, 0 for a loss
//! - Exposing the final tallies to the ranker
//!
//! Accumulation is commutative: recording the same matches in any order
//! yields the same table.

use crate::core::parser::parse_line;
use crate::types::{
    MatchOutcome, MatchResult, Points, RankingError, TeamName, DRAW_POINTS, LOSS_POINTS,
    WIN_POINTS,
};
use std::collections::HashMap;

/// Maps every team that has played to its accumulated points
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsTable {
    points: HashMap<TeamName, Points>,
}

impl PointsTable {
    /// Create an empty PointsTable
    pub fn new() -> Self {
        PointsTable {
            points: HashMap::new(),
        }
    }

    /// Build a table from raw match result lines
    ///
    /// Stops at the first malformed line and reports its 1-based line number.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_league_ranker::core::PointsTable;
    ///
    /// let table = PointsTable::from_lines(["Alpha 1, Zeta 0"]).unwrap();
    /// assert_eq!(table.get("Alpha"), Some(3));
    /// assert_eq!(table.get("Zeta"), Some(0));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, RankingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = PointsTable::new();
        for (index, line) in lines.into_iter().enumerate() {
            let result = parse_line(line.as_ref()).map_err(|e| e.at_line(index + 1))?;
            table.record(&result);
        }
        Ok(table)
    }

    /// Record one match result
    ///
    /// The winner gains 3 points, both sides of a draw gain 1. The loser is
    /// inserted with 0 points if it has not been seen before, and keeps its
    /// existing total otherwise.
    pub fn record(&mut self, result: &MatchResult) {
        let (first, second) = (&result.first.team, &result.second.team);

        match result.outcome() {
            MatchOutcome::FirstWins => {
                self.award(first, WIN_POINTS);
                self.award(second, LOSS_POINTS);
            }
            MatchOutcome::SecondWins => {
                self.award(second, WIN_POINTS);
                self.award(first, LOSS_POINTS);
            }
            MatchOutcome::Draw => {
                self.award(first, DRAW_POINTS);
                self.award(second, DRAW_POINTS);
            }
        }
    }

    /// Add points to a team, inserting it at zero first if absent
    fn award(&mut self, team: &str, points: Points) {
        match self.points.get_mut(team) {
            Some(total) => *total += points,
            None => {
                self.points.insert(team.to_string(), points);
            }
        }
    }

    /// Points for a single team, if it has played
    pub fn get(&self, team: &str) -> Option<Points> {
        self.points.get(team).copied()
    }

    /// Number of distinct teams
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no match has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(team, points)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Points)> {
        self.points
            .iter()
            .map(|(team, points)| (team.as_str(), *points))
    }
}

/// Build a table from precomputed `(team, points)` tallies
///
/// Repeated teams have their points summed.
impl<S: AsRef<str>> FromIterator<(S, Points)> for PointsTable {
    fn from_iter<I: IntoIterator<Item = (S, Points)>>(iter: I) -> Self {
        let mut table = PointsTable::new();
        for (team, points) in iter {
            table.award(team.as_ref(), points);
        }
        table
    }
}
