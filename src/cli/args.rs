use crate::pipeline::RankConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default name of the ranking file written next to the input
pub const DEFAULT_OUTPUT_NAME: &str = "rank_results.txt";

/// Calculate a league ranking table from match results
#[derive(Parser, Debug)]
#[command(name = "league-ranker")]
#[command(
    about = "Calculate the ranking table for a league given team match results in a file",
    long_about = None
)]
pub struct CliArgs {
    /// Full path of the file containing match results
    #[arg(
        short = 'f',
        long = "filename",
        value_name = "PATH",
        help = "Full file location path"
    )]
    pub filename: PathBuf,

    /// Name of the ranking file, written in the input file's directory
    #[arg(
        short = 'o',
        long = "output-name",
        value_name = "NAME",
        default_value = DEFAULT_OUTPUT_NAME,
        help = "Name of the ranking file written next to the input file"
    )]
    pub output_name: String,

    /// Output format for the ranking table
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for ranking lines or 'csv' for rank,team,points rows"
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,
}

/// Available output formats for the ranking table
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
}

impl CliArgs {
    /// Create a RankConfig from CLI arguments
    pub fn to_config(&self) -> RankConfig {
        RankConfig {
            input_path: self.filename.clone(),
            output_name: self.output_name.clone(),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::short_flag(&["program", "-f", "/data/results.txt"], "/data/results.txt")]
    #[case::long_flag(&["program", "--filename", "/data/results.txt"], "/data/results.txt")]
    #[case::relative(&["program", "-f", "data/results.txt"], "data/results.txt")]
    fn test_filename_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.filename, PathBuf::from(expected));
    }

    #[rstest]
    #[case::default_format(&["program", "-f", "/d/r.txt"], OutputFormat::Text)]
    #[case::explicit_text(&["program", "-f", "/d/r.txt", "--format", "text"], OutputFormat::Text)]
    #[case::explicit_csv(&["program", "-f", "/d/r.txt", "--format", "csv"], OutputFormat::Csv)]
    fn test_format_parsing(#[case] args: &[&str], #[case] expected: OutputFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.format, expected);
    }

    #[rstest]
    #[case::default_name(&["program", "-f", "/d/r.txt"], DEFAULT_OUTPUT_NAME)]
    #[case::short_flag(&["program", "-f", "/d/r.txt", "-o", "table.txt"], "table.txt")]
    #[case::long_flag(&["program", "-f", "/d/r.txt", "--output-name", "table.csv"], "table.csv")]
    fn test_output_name_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.output_name, expected);
    }

    #[test]
    fn test_to_config() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "-f",
            "/data/results.txt",
            "-o",
            "out.csv",
            "--format",
            "csv",
            "-v",
        ])
        .unwrap();
        let config = parsed.to_config();

        assert!(parsed.verbose);
        assert_eq!(config.input_path, PathBuf::from("/data/results.txt"));
        assert_eq!(config.output_name, "out.csv");
        assert_eq!(config.format, OutputFormat::Csv);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_filename(&["program"])]
    #[case::positional_instead_of_flag(&["program", "/data/results.txt"])]
    #[case::invalid_format(&["program", "-f", "/d/r.txt", "--format", "json"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
