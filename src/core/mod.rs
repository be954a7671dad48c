//! Core business logic module
//!
//! This module contains the ranking pipeline components:
//! - `parser` - Match result line parsing
//! - `points_table` - Win/draw/loss points aggregation per team
//! - `ranker` - Ordered ranking table with shared ranks for ties

pub mod parser;
pub mod points_table;
pub mod ranker;

pub use parser::parse_line;
pub use points_table::PointsTable;
pub use ranker::rank;
