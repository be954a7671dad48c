//! Ranking writers
//!
//! Each output format is a `RankingWriter` implementation, selected at runtime
//! from the configured [`OutputFormat`] by [`create_writer`].

use crate::cli::OutputFormat;
use crate::io::ranking_format::{write_ranking_csv, write_ranking_text};
use crate::types::{RankEntry, Result};
use std::io::Write;

/// Writes a finished ranking table to an output
pub trait RankingWriter: Send + Sync {
    /// Render all entries, in order, to `output` and flush it
    fn write(&self, entries: &[RankEntry], output: &mut dyn Write) -> Result<()>;
}

/// `<rank>. <team>, <points> pt[s]` lines
#[derive(Debug, Clone, Copy)]
pub struct TextRankingWriter;

impl RankingWriter for TextRankingWriter {
    fn write(&self, entries: &[RankEntry], output: &mut dyn Write) -> Result<()> {
        write_ranking_text(entries, output)
    }
}

/// `rank,team,points` CSV rows
#[derive(Debug, Clone, Copy)]
pub struct CsvRankingWriter;

impl RankingWriter for CsvRankingWriter {
    fn write(&self, entries: &[RankEntry], output: &mut dyn Write) -> Result<()> {
        write_ranking_csv(entries, output)
    }
}

/// Create the writer for an output format
pub fn create_writer(format: OutputFormat) -> Box<dyn RankingWriter> {
    match format {
        OutputFormat::Text => Box::new(TextRankingWriter),
        OutputFormat::Csv => Box::new(CsvRankingWriter),
    }
}
