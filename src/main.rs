//! Rust League Ranker CLI
//!
//! Command-line interface for calculating a league ranking table from a file
//! of match results.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --filename /data/results.txt
//! cargo run -- -f /data/results.txt --output-name table.txt
//! cargo run -- -f /data/results.txt --format csv -o table.csv
//! ```
//!
//! The ranking is written to `rank_results.txt` (or the chosen name) in the
//! same directory as the input file.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input path not a full path, empty or malformed results file,
//!   file not readable, output not writable)

use rust_league_ranker::{cli, logging, pipeline};
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init_cli_logger(args.verbose);

    let config = args.to_config();
    match pipeline::calculate(&config) {
        Ok(output_path) => {
            println!("Calculation Process Complete");
            println!("Ranking written to {}", output_path.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "ranking failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
