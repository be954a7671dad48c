//! Input path validation
//!
//! The input must be a full file path: it needs both a directory component
//! (the ranking file is written there) and a file-name component. Both are
//! checked before anything is read.

use crate::types::{RankingError, Result};
use std::ffi::OsString;
use std::path::{is_separator, Path, PathBuf};

/// Directory and file name of a validated input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLocation {
    /// Directory holding the input file, where output is also written
    pub directory: PathBuf,

    /// File name of the input file
    pub file_name: OsString,
}

impl InputLocation {
    /// Split and validate an input path
    ///
    /// # Errors
    ///
    /// Returns `InputPath` if:
    /// - The path ends with a separator (a directory, not a file)
    /// - The path has no directory component (e.g. a bare `results.txt`)
    /// - The path has no file-name component (e.g. `/data/..`)
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_league_ranker::pipeline::InputLocation;
    /// use std::path::Path;
    ///
    /// let location = InputLocation::parse(Path::new("/data/results.txt")).unwrap();
    /// assert_eq!(location.directory, Path::new("/data"));
    /// assert!(InputLocation::parse(Path::new("results.txt")).is_err());
    /// ```
    pub fn parse(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();

        if path.as_os_str().to_string_lossy().ends_with(is_separator) {
            return Err(RankingError::input_path(
                &shown,
                "no file name, only a directory (trailing separator?)",
            ));
        }

        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| {
                RankingError::input_path(&shown, "no directory component, a full path is required")
            })?;

        let file_name = path
            .file_name()
            .ok_or_else(|| RankingError::input_path(&shown, "no file name component"))?;

        Ok(InputLocation {
            directory: directory.to_path_buf(),
            file_name: file_name.to_os_string(),
        })
    }

    /// Path of a file with the given name in the input's directory
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::absolute("/data/results.txt", "/data", "results.txt")]
    #[case::root_directory("/results.txt", "/", "results.txt")]
    #[case::relative("data/results.txt", "data", "results.txt")]
    #[case::current_directory("./results.txt", ".", "results.txt")]
    #[case::nested("/a/b/c/results", "/a/b/c", "results")]
    fn test_parse_valid(#[case] input: &str, #[case] directory: &str, #[case] file_name: &str) {
        let location = InputLocation::parse(Path::new(input)).unwrap();
        assert_eq!(location.directory, PathBuf::from(directory));
        assert_eq!(location.file_name, OsString::from(file_name));
    }

    #[rstest]
    #[case::bare_file_name("results.txt", "no directory component")]
    #[case::empty("", "no directory component")]
    #[case::trailing_separator("/data/", "trailing separator")]
    #[case::root_only("/", "trailing separator")]
    #[case::parent_reference("/data/..", "no file name component")]
    fn test_parse_invalid(#[case] input: &str, #[case] expected_reason: &str) {
        match InputLocation::parse(Path::new(input)).unwrap_err() {
            RankingError::InputPath { path, reason } => {
                assert_eq!(path, input);
                assert!(
                    reason.contains(expected_reason),
                    "reason '{}' does not mention '{}'",
                    reason,
                    expected_reason
                );
            }
            other => panic!("Expected InputPath, got {:?}", other),
        }
    }

    #[test]
    fn test_sibling_shares_directory() {
        let location = InputLocation::parse(Path::new("/data/results.txt")).unwrap();
        assert_eq!(
            location.sibling("rank_results.txt"),
            PathBuf::from("/data/rank_results.txt")
        );
    }
}
