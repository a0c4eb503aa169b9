/// Benchmark identifier decoding
///
/// The harness names every benchmark `<config>/<operation>`, where `<config>`
/// is a hyphen-separated list whose trailing segments carry the parameters:
///
/// - compressed: `CompressedSNARK-NumCons-<constraints>`
/// - recursive:  `RecursiveSNARK-NumCons-<constraints>-NumSteps-<steps>`

use std::str::FromStr;

use crate::error::{Error, Result};

/// Decoded `…-<constraints>/<operation>` identifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressedName {
    pub num_constraints: u64,
    pub operation: String,
}

/// Decoded `…-<constraints>-<label>-<steps>/<operation>` identifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecursiveName {
    pub num_constraints: u64,
    pub num_steps: u32,
    pub operation: String,
}

/// Split an identifier into its config segments and operation name.
fn split_identifier(name: &str) -> Result<(Vec<&str>, &str)> {
    let params: Vec<&str> = name.split('/').collect();
    if params.len() != 2 {
        return Err(Error::identifier(
            name,
            format!("expected exactly one '/', found {} parts", params.len()),
        ));
    }
    Ok((params[0].split('-').collect(), params[1]))
}

/// Segment `back` positions from the end (0 = last).
fn segment_from_end<'a>(name: &str, segments: &[&'a str], back: usize) -> Result<&'a str> {
    segments
        .len()
        .checked_sub(back + 1)
        .map(|idx| segments[idx])
        .ok_or_else(|| {
            Error::identifier(
                name,
                format!("expected at least {} '-' segments, found {}", back + 1, segments.len()),
            )
        })
}

fn parse_count<T: FromStr>(name: &str, field: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::identifier(name, format!("{} {:?} is not an integer", field, raw)))
}

impl FromStr for CompressedName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let (segments, operation) = split_identifier(name)?;
        let num_constraints = segment_from_end(name, &segments, 0)?;

        Ok(Self {
            num_constraints: parse_count(name, "constraint count", num_constraints)?,
            operation: operation.to_string(),
        })
    }
}

impl FromStr for RecursiveName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let (segments, operation) = split_identifier(name)?;
        let num_steps = segment_from_end(name, &segments, 0)?;
        let num_constraints = segment_from_end(name, &segments, 2)?;

        Ok(Self {
            num_constraints: parse_count(name, "constraint count", num_constraints)?,
            num_steps: parse_count(name, "step count", num_steps)?,
            operation: operation.to_string(),
        })
    }
}
