//! Ranking module
//!
//! Turns a [`PointsTable`] into an ordered ranking table.
//!
//! Ordering is a two-key sort: points descending, then team name ascending by
//! raw byte order (`"Alpha" < "Zeta" < "alpha"`, `"#a" < "$a"`). Teams with
//! equal points share a rank, and the next lower points value takes its
//! 1-based position in the table, so three teams tied at rank 1 are followed
//! by rank 4.

use crate::core::points_table::PointsTable;
use crate::types::RankEntry;
use std::cmp::Reverse;

/// Produce the ranking table for a points table
///
/// A pure function of its input: map iteration order never leaks into the
/// result.
///
/// # Examples
///
/// ```
/// use rust_league_ranker::core::{rank, PointsTable};
///
/// let table = PointsTable::from_lines(["Alpha 0, Zeta 0"]).unwrap();
/// let lines: Vec<String> = rank(&table).iter().map(ToString::to_string).collect();
/// assert_eq!(lines, ["1. Alpha, 1 pt", "1. Zeta, 1 pt"]);
/// ```
pub fn rank(table: &PointsTable) -> Vec<RankEntry> {
    let mut standings: Vec<_> = table.iter().collect();
    standings.sort_unstable_by(|(a_team, a_points), (b_team, b_points)| {
        (Reverse(a_points), a_team).cmp(&(Reverse(b_points), b_team))
    });

    let mut entries: Vec<RankEntry> = Vec::with_capacity(standings.len());
    for (position, (team, points)) in standings.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(previous) if previous.points == points => previous.rank,
            _ => position + 1,
        };
        entries.push(RankEntry::new(rank, team, points));
    }

    entries
}
