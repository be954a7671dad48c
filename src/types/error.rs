//! Error types for the Rust League Ranker
//!
//! This module defines all error types that can occur while turning a results
//! file into a ranking table. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Usage Errors**: The input path is not a full file path
//! - **Input Errors**: Empty results file, malformed match result lines
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Output Errors**: CSV serialisation failures
//!
//! None of these are retried. Every variant is fatal for the run it occurs in.

use thiserror::Error;

/// Main error type for the league ranker
///
/// Each variant includes relevant context to help diagnose and resolve the
/// issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// The supplied input path is structurally unusable
    ///
    /// Raised when the path has no directory component or no file-name
    /// component. Checked before any file is opened.
    #[error("Invalid input path '{path}': {reason}")]
    InputPath {
        /// The path as supplied by the caller
        path: String,
        /// What is missing from the path
        reason: String,
    },

    /// The results file contained no lines at all
    #[error("Empty results file given: {path}")]
    EmptyResults {
        /// Path of the empty file
        path: String,
    },

    /// A match result line does not follow `<Team> <Score>, <Team> <Score>`
    #[error("Malformed match result at line {line} ('{content}'): {reason}")]
    MalformedLine {
        /// 1-based line number in the input
        line: usize,
        /// The offending line, verbatim
        content: String,
        /// Description of what is wrong
        reason: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialisation of the ranking failed
    #[error("CSV error: {message}")]
    Csv {
        /// Description of the CSV error
        message: String,
    },
}

/// Convenience result alias used across the crate
pub type Result<T> = std::result::Result<T, RankingError>;

// Conversion from io::Error to RankingError
impl From<std::io::Error> for RankingError {
    fn from(error: std::io::Error) -> Self {
        RankingError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for RankingError {
    fn from(error: csv::Error) -> Self {
        RankingError::Csv {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl RankingError {
    /// Create an InputPath error
    pub fn input_path(path: &str, reason: &str) -> Self {
        RankingError::InputPath {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an EmptyResults error
    pub fn empty_results(path: &str) -> Self {
        RankingError::EmptyResults {
            path: path.to_string(),
        }
    }

    /// Create a MalformedLine error
    pub fn malformed_line(line: usize, content: &str, reason: &str) -> Self {
        RankingError::MalformedLine {
            line,
            content: content.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        RankingError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Attach a line number to an error raised by the line parser
    ///
    /// The parser reports line 0 because it only sees one line at a time;
    /// the reader knows the real position.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            RankingError::MalformedLine {
                content, reason, ..
            } => RankingError::MalformedLine {
                line,
                content,
                reason,
            },
            other => other,
        }
    }
}
