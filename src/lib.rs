#![warn(clippy::all)]

/// snark-bench-csv: SNARK benchmark log to CSV conversion
///
/// Reads the text output of the compressed and recursive SNARK benchmark
/// runs (criterion reports plus `<name>/ProofSize: <n> B` lines) and writes
/// plot-ready CSV tables.
///
/// # Pipelines
///
/// - **compressed**: one row per benchmark, criterion's center value with its
///   confidence interval.
/// - **recursive**: one row per constraint count, median and 5th/95th
///   percentile over the step runs. Proving time is taken per step.
///
/// # Architecture
///
/// - [`parser`]: line scanner and the [`parser::Accumulator`] seam
/// - [`name`]: benchmark identifier decoding
/// - [`units`]: time and size normalization
/// - [`stats`]: median and percentile computation
/// - [`report`]: CSV export
/// - [`compressed`], [`recursive`]: the two pipelines

// Log parsing
pub mod error;
pub mod name;
pub mod parser;
pub mod units;

// Aggregation and export
pub mod report;
pub mod stats;

// Pipelines
pub mod compressed;
pub mod config;
pub mod recursive;

pub mod cli;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use report::{CsvLayout, Measurement};
