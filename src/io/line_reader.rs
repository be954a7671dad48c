//! Streaming line reader with iterator interface
//!
//! Provides a streaming iterator over the lines of a match results file.
//!
//! # Design
//!
//! The LineReader wraps a buffered file handle and yields one line at a time,
//! with the trailing `\n` (and a preceding `\r`, if any) removed. Line
//! contents are otherwise untouched: team names are keys and must survive
//! verbatim.
//!
//! ```no_run
//! use rust_league_ranker::io::line_reader::LineReader;
//! use std::path::Path;
//!
//! let reader = LineReader::new(Path::new("/data/results.txt")).unwrap();
//! for line in reader {
//!     match line {
//!         Ok(text) => println!("{}", text),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing file is reported as `FileNotFound` from `new()`
//! - Other open failures are reported as `Io` from `new()`
//! - Read failures are yielded as `Err` items and end the iteration

use crate::types::{RankingError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Line reader over a results file
#[derive(Debug)]
pub struct LineReader {
    reader: BufReader<File>,
    line_num: usize,
    failed: bool,
}

impl LineReader {
    /// Open a results file for streaming
    ///
    /// The file handle is closed when the reader is dropped.
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RankingError::file_not_found(&path.display().to_string()),
            _ => RankingError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self {
            reader: BufReader::with_capacity(8 * 1024, file),
            line_num: 0,
            failed: false,
        })
    }

    /// Number of lines yielded so far
    pub fn lines_read(&self) -> usize {
        self.line_num
    }
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_num += 1;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(RankingError::Io {
                    message: format!("Failed to read line {}: {}", self.line_num + 1, e),
                }))
            }
        }
    }
}
