//! Output format handling for ranking tables
//!
//! This module centralizes all output format concerns:
//! - Plain text lines, `<rank>. <team>, <points> pt[s]`
//! - CSV with a `rank,team,points` header
//!
//! All functions write to any `Write` (no file handling) for easy testing.

use crate::types::{RankEntry, Result};
use std::io::Write;

/// Write a ranking table as plain text, one newline-terminated line per team
pub fn write_ranking_text(entries: &[RankEntry], output: &mut dyn Write) -> Result<()> {
    for entry in entries {
        writeln!(output, "{}", entry)?;
    }

    output.flush()?;
    Ok(())
}

/// Write a ranking table as CSV
///
/// Columns are `rank,team,points`. Team names containing commas or quotes
/// are quoted by the CSV writer.
pub fn write_ranking_csv(entries: &[RankEntry], output: &mut dyn Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);

    if entries.is_empty() {
        // serialize() only emits the header alongside the first record
        writer.write_record(["rank", "team", "points"])?;
    }

    for entry in entries {
        writer.serialize(entry)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Vec<RankEntry> {
        vec![
            RankEntry::new(1, "Tarantulas", 6),
            RankEntry::new(2, "Lions", 5),
            RankEntry::new(3, "FC Awesome", 1),
            RankEntry::new(3, "Snakes", 1),
            RankEntry::new(5, "Grouches", 0),
        ]
    }

    #[rstest]
    #[case::sample_brief(
        sample(),
        "1. Tarantulas, 6 pts\n2. Lions, 5 pts\n3. FC Awesome, 1 pt\n3. Snakes, 1 pt\n5. Grouches, 0 pts\n"
    )]
    #[case::single_entry(vec![RankEntry::new(1, "Alpha", 1)], "1. Alpha, 1 pt\n")]
    #[case::empty(vec![], "")]
    fn test_write_ranking_text(#[case] entries: Vec<RankEntry>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_ranking_text(&entries, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[rstest]
    #[case::sample_brief(
        sample(),
        "rank,team,points\n1,Tarantulas,6\n2,Lions,5\n3,FC Awesome,1\n3,Snakes,1\n5,Grouches,0\n"
    )]
    #[case::team_with_comma(
        vec![RankEntry::new(1, "Lions, Tigers", 3)],
        "rank,team,points\n1,\"Lions, Tigers\",3\n"
    )]
    #[case::empty(vec![], "rank,team,points\n")]
    fn test_write_ranking_csv(#[case] entries: Vec<RankEntry>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_ranking_csv(&entries, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}
