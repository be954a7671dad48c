//! I/O module
//!
//! Handles reading match results and writing ranking tables.
//!
//! # Components
//!
//! - `line_reader` - Streaming reader over the lines of a results file
//! - `ranking_format` - Text and CSV rendering of a ranking table

pub mod line_reader;
pub mod ranking_format;

pub use line_reader::LineReader;
pub use ranking_format::{write_ranking_csv, write_ranking_text};
