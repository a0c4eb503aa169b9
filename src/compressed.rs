/// Compressed SNARK pipeline
///
/// Each criterion result is copied through directly: the center value with
/// criterion's confidence interval for timings, a point value for proof
/// sizes. Rows keep the order in which the log reported them.

use std::fs::File;
use std::io::{BufRead, BufReader};

use indexmap::IndexMap;
use tracing::info;

use crate::config::{PipelineConfig, OUTPUT_FILES};
use crate::error::{Error, Result};
use crate::name::CompressedName;
use crate::parser::{scan, Accumulator, TimingReport};
use crate::report::{write_csv, CsvLayout, Measurement};
use crate::units::normalize_time;

/// Measurements per operation, in log order
#[derive(Debug, Default)]
pub struct CompressedResults {
    pub by_operation: IndexMap<String, Vec<Measurement>>,
}

impl CompressedResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, operation: &str) -> Result<&[Measurement]> {
        self.by_operation
            .get(operation)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingOperation {
                operation: operation.to_string(),
            })
    }

    fn push(&mut self, operation: String, measurement: Measurement) {
        self.by_operation.entry(operation).or_default().push(measurement);
    }
}

impl Accumulator for CompressedResults {
    fn record_proof_size(&mut self, benchmark: &str, size_kib: f64) -> Result<()> {
        let name: CompressedName = benchmark.parse()?;
        self.push(name.operation, Measurement::point(name.num_constraints, size_kib));
        Ok(())
    }

    fn record_timing(&mut self, benchmark: &str, timing: TimingReport) -> Result<()> {
        let name: CompressedName = benchmark.parse()?;
        let op = name.operation.as_str();
        let measurement = Measurement::new(
            name.num_constraints,
            normalize_time(timing.center, &timing.unit, op)?,
            normalize_time(timing.low, &timing.unit, op)?,
            normalize_time(timing.high, &timing.unit, op)?,
        );
        self.push(name.operation, measurement);
        Ok(())
    }
}

/// Parse a compressed SNARK log from `reader`.
pub fn parse<R: BufRead>(reader: R) -> Result<CompressedResults> {
    let mut results = CompressedResults::new();
    scan(reader, &mut results)?;
    Ok(results)
}

/// Parse `config.input` and write one table per operation into `config.output_dir`.
pub fn run(config: &PipelineConfig) -> Result<()> {
    info!(input = %config.input.display(), "parsing compressed SNARK log");
    let results = parse(BufReader::new(File::open(&config.input)?))?;

    // Every table must exist before the first file is touched.
    let tables = OUTPUT_FILES
        .iter()
        .map(|&(op, file)| -> Result<_> { Ok((results.rows(op)?, file)) })
        .collect::<Result<Vec<_>>>()?;

    if config.create_output_dir {
        std::fs::create_dir_all(&config.output_dir)?;
    }
    for (rows, file) in tables {
        write_csv(rows, CsvLayout::ConfidenceInterval, &config.output_path(file))?;
    }
    Ok(())
}
