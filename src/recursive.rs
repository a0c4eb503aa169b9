/// Recursive SNARK pipeline
///
/// The harness runs every constraint count for a range of step counts and
/// reports one center value per run. Runs are grouped by constraint count and
/// summarized as a median with a 5th/95th percentile band over steps. Proving
/// time is cumulative in the step count, so its samples are the increments
/// between consecutive steps rather than the raw totals.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::config::{PipelineConfig, OUTPUT_FILES};
use crate::error::{Error, Result};
use crate::name::RecursiveName;
use crate::parser::{scan, Accumulator, TimingReport};
use crate::report::{write_csv, CsvLayout, Measurement};
use crate::stats::PercentileBand;
use crate::units::{normalize_time, PROVE};

/// First step count collected for each group
pub const FIRST_STEP: u32 = 10;
/// Collection stops before this step count
pub const STEP_LIMIT: u32 = 30;
/// Differences are only taken for steps above this count
pub const MIN_DIFFERENCED_STEP: u32 = 3;

/// Raw value per step count
pub type StepValues = BTreeMap<u32, f64>;

/// operation -> constraint count (first-seen order) -> step count -> value
#[derive(Debug, Default)]
pub struct RecursiveResults {
    pub by_operation: IndexMap<String, IndexMap<u64, StepValues>>,
}

impl RecursiveResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later reports for the same run replace earlier ones.
    fn insert(&mut self, name: RecursiveName, value: f64) {
        self.by_operation
            .entry(name.operation)
            .or_default()
            .entry(name.num_constraints)
            .or_default()
            .insert(name.num_steps, value);
    }

    /// One percentile row per constraint count, for every operation.
    pub fn summarize(&self) -> IndexMap<String, Vec<Measurement>> {
        self.by_operation
            .iter()
            .map(|(op, groups)| {
                let rows = groups
                    .iter()
                    .filter_map(|(&num_constraints, steps)| {
                        summarize_group(op, num_constraints, steps)
                    })
                    .collect();
                (op.clone(), rows)
            })
            .collect()
    }
}

impl Accumulator for RecursiveResults {
    fn record_proof_size(&mut self, benchmark: &str, size_kib: f64) -> Result<()> {
        let name: RecursiveName = benchmark.parse()?;
        self.insert(name, size_kib);
        Ok(())
    }

    fn record_timing(&mut self, benchmark: &str, timing: TimingReport) -> Result<()> {
        let name: RecursiveName = benchmark.parse()?;
        let value = normalize_time(timing.center, &timing.unit, &name.operation)?;
        self.insert(name, value);
        Ok(())
    }
}

/// Samples for one group: steps from [`FIRST_STEP`] up to the first gap.
///
/// Proving operations contribute `v[s] - v[s - 1]` for each step whose
/// predecessor was measured; everything else contributes raw values.
pub fn step_samples(operation: &str, steps: &StepValues) -> Vec<f64> {
    let differenced = operation.contains(PROVE);

    (FIRST_STEP..STEP_LIMIT)
        .map_while(|step| steps.get(&step).map(|&value| (step, value)))
        .filter_map(|(step, value)| {
            if !differenced {
                return Some(value);
            }
            if step <= MIN_DIFFERENCED_STEP {
                return None;
            }
            steps.get(&(step - 1)).map(|&previous| value - previous)
        })
        .collect()
}

fn summarize_group(
    operation: &str,
    num_constraints: u64,
    steps: &StepValues,
) -> Option<Measurement> {
    let samples = step_samples(operation, steps);
    match PercentileBand::from_samples(&samples) {
        Some(band) => {
            debug!(operation, num_constraints, samples = samples.len(), ?band, "summarized group");
            Some(Measurement::new(num_constraints, band.median, band.p5, band.p95))
        }
        None => {
            warn!(
                operation,
                num_constraints,
                first_step = FIRST_STEP,
                "no samples for group, skipping"
            );
            None
        }
    }
}

/// Parse a recursive SNARK log from `reader`.
pub fn parse<R: BufRead>(reader: R) -> Result<RecursiveResults> {
    let mut results = RecursiveResults::new();
    scan(reader, &mut results)?;
    Ok(results)
}

/// Parse `config.input`, summarize per step and write one table per operation.
pub fn run(config: &PipelineConfig) -> Result<()> {
    info!(input = %config.input.display(), "parsing recursive SNARK log");
    let results = parse(BufReader::new(File::open(&config.input)?))?;
    let summary = results.summarize();

    // Every table must exist before the first file is touched.
    let tables = OUTPUT_FILES
        .iter()
        .map(|&(op, file)| -> Result<_> {
            let rows = summary.get(op).ok_or_else(|| Error::MissingOperation {
                operation: op.to_string(),
            })?;
            Ok((rows, file))
        })
        .collect::<Result<Vec<_>>>()?;

    if config.create_output_dir {
        std::fs::create_dir_all(&config.output_dir)?;
    }
    for (rows, file) in tables {
        write_csv(rows, CsvLayout::Percentiles, &config.output_path(file))?;
    }
    Ok(())
}
