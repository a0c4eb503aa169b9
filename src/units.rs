/// Unit normalization for reported measurements
///
/// Proving times are reported in seconds, every other timing in
/// milliseconds, and proof sizes in KiB.

use crate::error::{Error, Result};

/// Operation whose timings are normalized to seconds
pub const PROVE: &str = "Prove";
pub const VERIFY: &str = "Verify";
pub const PROOF_SIZE: &str = "ProofSize";

const BYTES_PER_KIB: f64 = 1024.0;

/// Time unit tokens accepted from criterion output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Millis,
    Seconds,
}

impl TimeUnit {
    pub fn parse(token: &str, operation: &str) -> Result<Self> {
        match token {
            "ms" => Ok(Self::Millis),
            "s" => Ok(Self::Seconds),
            other => Err(Error::UnknownUnit {
                unit: other.to_string(),
                operation: operation.to_string(),
            }),
        }
    }
}

/// Convert `value` reported in `unit` to seconds for `Prove`, milliseconds otherwise.
pub fn normalize_time(value: f64, unit: &str, operation: &str) -> Result<f64> {
    let unit = TimeUnit::parse(unit, operation)?;
    Ok(match (operation == PROVE, unit) {
        (true, TimeUnit::Millis) => value / 1000.0,
        (false, TimeUnit::Seconds) => value * 1000.0,
        _ => value,
    })
}

pub fn bytes_to_kib(bytes: f64) -> f64 {
    bytes / BYTES_PER_KIB
}
