//! Ranking pipeline
//!
//! Sequences one run of the ranker: validate the input path, stream and parse
//! the results file into a points table, rank it, then write the table next to
//! the input file. Every step is synchronous and each run is independent.
//!
//! Nothing is written unless the whole input was read and parsed. The output
//! file is created only once the ranking is complete.

use crate::cli::OutputFormat;
use crate::core::{parse_line, rank, PointsTable};
use crate::io::LineReader;
use crate::types::{RankEntry, RankingError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod paths;
pub mod writer;

pub use paths::InputLocation;
pub use writer::{create_writer, CsvRankingWriter, RankingWriter, TextRankingWriter};

/// Configuration for one ranking run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    /// Full path of the match results file
    pub input_path: PathBuf,

    /// File name of the ranking, created in the input file's directory
    pub output_name: String,

    /// How the ranking is rendered
    pub format: OutputFormat,
}

/// Read, aggregate and rank a results file
///
/// # Errors
///
/// - `FileNotFound` / `Io` if the file cannot be opened or read
/// - `MalformedLine` for the first line that is not a valid match result
/// - `EmptyResults` if the file has no lines
pub fn rank_file(input_path: &Path) -> Result<Vec<RankEntry>> {
    let mut reader = LineReader::new(input_path)?;
    let mut table = PointsTable::new();

    for (index, line) in reader.by_ref().enumerate() {
        let line = line?;
        let line_num = index + 1;
        let result = parse_line(&line).map_err(|e| e.at_line(line_num))?;
        debug!(
            line = line_num,
            first = %result.first.team,
            second = %result.second.team,
            "recorded match"
        );
        table.record(&result);
    }

    let matches = reader.lines_read();
    if matches == 0 {
        return Err(RankingError::empty_results(
            &input_path.display().to_string(),
        ));
    }

    info!(matches, teams = table.len(), "aggregated match results");
    Ok(rank(&table))
}

/// Run the whole pipeline for a configuration
///
/// Returns the path of the ranking file that was written.
///
/// # Errors
///
/// - `InputPath` if the input is not a full file path (checked before reading)
/// - Any error from [`rank_file`]
/// - `Io` / `Csv` if the ranking file cannot be created or written
pub fn calculate(config: &RankConfig) -> Result<PathBuf> {
    let location = InputLocation::parse(&config.input_path)?;
    info!(input = %config.input_path.display(), "calculating rankings");

    let entries = rank_file(&config.input_path)?;

    let output_path = location.sibling(&config.output_name);
    let file = File::create(&output_path).map_err(|e| RankingError::Io {
        message: format!("Failed to create '{}': {}", output_path.display(), e),
    })?;
    let mut output = BufWriter::new(file);
    create_writer(config.format).write(&entries, &mut output)?;

    info!(
        output = %output_path.display(),
        teams = entries.len(),
        format = ?config.format,
        "wrote ranking table"
    );
    Ok(output_path)
}
