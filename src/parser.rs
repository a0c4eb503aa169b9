// src/parser.rs - Line scanner for criterion benchmark logs
use std::io::BufRead;

use tracing::debug;

use crate::error::{Error, Result};
use crate::units::bytes_to_kib;

const PROOF_SIZE_MARKER: &str = "ProofSize";
const ANNOUNCE_TOKEN: &str = "Benchmarking";
const TIME_TOKEN: &str = "time:";

/// Confidence band of one criterion `time:` line, in the reported unit
#[derive(Clone, Debug, PartialEq)]
pub struct TimingReport {
    pub low: f64,
    pub center: f64,
    pub high: f64,
    pub unit: String,
}

/// Receives every measurement recognized in a log
///
/// Each pipeline decodes the benchmark name in its own format and keeps its
/// own results table.
pub trait Accumulator {
    /// Proof size in KiB reported for `benchmark`
    fn record_proof_size(&mut self, benchmark: &str, size_kib: f64) -> Result<()>;

    /// Timing reported for the most recently announced benchmark
    fn record_timing(&mut self, benchmark: &str, timing: TimingReport) -> Result<()>;
}

/// Scan state carried from line to line
#[derive(Debug, Default)]
pub struct ParserState {
    current_benchmark: Option<String>,
    line_no: usize,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently announced benchmark, if any
    pub fn current_benchmark(&self) -> Option<&str> {
        self.current_benchmark.as_deref()
    }

    /// Process a single log line, forwarding any measurement to `sink`.
    pub fn feed<A: Accumulator>(&mut self, line: &str, sink: &mut A) -> Result<()> {
        self.line_no += 1;

        if line.contains(PROOF_SIZE_MARKER) {
            let (benchmark, size_kib) = parse_proof_size(self.line_no, line)?;
            debug!(line = self.line_no, benchmark, size_kib, "proof size");
            return sink.record_proof_size(benchmark, size_kib);
        }

        let entries: Vec<&str> = line.split_whitespace().collect();

        if let Some(idx) = entries.iter().position(|&e| e == ANNOUNCE_TOKEN) {
            let announced = entries
                .get(idx + 1)
                .ok_or_else(|| Error::format(self.line_no, "missing benchmark name", line))?;
            // Drop the trailing ':' after the name.
            let mut chars = announced.chars();
            chars.next_back();
            self.current_benchmark = Some(chars.as_str().to_string());
        }

        if let Some(idx) = entries.iter().position(|&e| e == TIME_TOKEN) {
            let timing = parse_timing(self.line_no, line, &entries[idx + 1..])?;
            let benchmark = self
                .current_benchmark
                .as_deref()
                .filter(|name| !name.is_empty())
                .ok_or(Error::MissingBenchmark { line: self.line_no })?;
            debug!(line = self.line_no, benchmark, ?timing, "timing");
            sink.record_timing(benchmark, timing)?;
        }

        Ok(())
    }
}

/// Read every line of `reader` through a fresh [`ParserState`].
pub fn scan<R: BufRead, A: Accumulator>(reader: R, sink: &mut A) -> Result<()> {
    let mut state = ParserState::new();
    for line in reader.lines() {
        state.feed(&line?, sink)?;
    }
    debug!(lines = state.line_no, "scan complete");
    Ok(())
}

/// `<benchmark>/ProofSize: <bytes> B`
fn parse_proof_size(line_no: usize, line: &str) -> Result<(&str, f64)> {
    let entries: Vec<&str> = line.split(':').collect();
    if entries.len() != 2 {
        return Err(Error::format(
            line_no,
            format!("expected one ':' in proof size line, found {}", entries.len() - 1),
            line,
        ));
    }

    let raw = entries[1].trim().split(' ').next().unwrap_or_default();
    let bytes: f64 = raw.parse().map_err(|_| {
        Error::format(line_no, format!("proof size {:?} is not a number", raw), line)
    })?;

    Ok((entries[0], bytes_to_kib(bytes)))
}

/// Tokens after `time:` are `[low unit center unit high unit]`.
fn parse_timing(line_no: usize, line: &str, fields: &[&str]) -> Result<TimingReport> {
    if fields.len() < 6 {
        return Err(Error::format(
            line_no,
            format!("expected 6 fields after '{}', found {}", TIME_TOKEN, fields.len()),
            line,
        ));
    }

    let number = |raw: &str| -> Result<f64> {
        raw.parse()
            .map_err(|_| Error::format(line_no, format!("{:?} is not a number", raw), line))
    };

    let low = fields[0].strip_prefix('[').unwrap_or(fields[0]);
    let unit = fields[1];
    let center = fields[2];
    let high = fields[4];
    let last_unit = fields[5].strip_suffix(']').unwrap_or(fields[5]);

    for found in [fields[3], last_unit] {
        if found != unit {
            return Err(Error::UnitMismatch {
                line: line_no,
                expected: unit.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(TimingReport {
        low: number(low)?,
        center: number(center)?,
        high: number(high)?,
        unit: unit.to_string(),
    })
}
