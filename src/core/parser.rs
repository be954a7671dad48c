//! Match result line parser
//!
//! Turns one line of the form `<Team1> <Score1>, <Team2> <Score2>` into a
//! [`MatchResult`]. Team names may contain spaces; the score is always the
//! last space-separated token of its half.
//!
//! Lines are validated: anything that does not have exactly one `", "`
//! separator, a non-empty team name and an all-digit score on each side is
//! rejected with [`RankingError::MalformedLine`]. The parser only sees a single
//! line, so it reports line 0; callers attach the real line number with
//! [`RankingError::at_line`].

use crate::types::{MatchResult, MatchSide, RankingError, Result, Score};

/// Separator between the two sides of a match
pub const SIDE_SEPARATOR: &str = ", ";

/// Parse a single match result line
///
/// # Examples
///
/// ```
/// use rust_league_ranker::core::parser::parse_line;
///
/// let result = parse_line("Tarantulas 1, FC Awesome 0").unwrap();
/// assert_eq!(result.first.team, "Tarantulas");
/// assert_eq!(result.second.team, "FC Awesome");
/// assert_eq!(result.second.score, 0);
/// ```
pub fn parse_line(line: &str) -> Result<MatchResult> {
    let mut halves = line.split(SIDE_SEPARATOR);

    let (first, second) = match (halves.next(), halves.next(), halves.next()) {
        (Some(first), Some(second), None) => (first, second),
        (_, None, _) => {
            return Err(RankingError::malformed_line(
                0,
                line,
                "missing ', ' separator between teams",
            ))
        }
        _ => {
            return Err(RankingError::malformed_line(
                0,
                line,
                "more than two teams on one line",
            ))
        }
    };

    Ok(MatchResult::new(
        parse_side(line, first)?,
        parse_side(line, second)?,
    ))
}

/// Parse one half of a line into a team name and score
fn parse_side(line: &str, half: &str) -> Result<MatchSide> {
    let (team, score) = half.rsplit_once(' ').ok_or_else(|| {
        RankingError::malformed_line(0, line, &format!("'{}' has no score", half))
    })?;

    if team.is_empty() {
        return Err(RankingError::malformed_line(
            0,
            line,
            &format!("'{}' has no team name", half),
        ));
    }

    Ok(MatchSide::new(team, parse_score(line, score)?))
}

/// Parse a score token with integer semantics
///
/// Only plain ASCII digits are accepted (no sign, no whitespace).
fn parse_score(line: &str, token: &str) -> Result<Score> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RankingError::malformed_line(
            0,
            line,
            &format!("score '{}' is not a non-negative integer", token),
        ));
    }

    token.parse::<Score>().map_err(|e| {
        RankingError::malformed_line(0, line, &format!("score '{}' is invalid: {}", token, e))
    })
}
