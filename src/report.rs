/// CSV export of summarized measurements
///
/// Both pipelines emit four columns: constraint count followed by a center
/// value and a lower/upper bound. Only the header wording differs. Rows are
/// written from the last measurement back to the first.

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// One summarized row: a point estimate and its band for a constraint count
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub num_constraints: u64,
    pub value: f64,
    pub low: f64,
    pub high: f64,
}

impl Measurement {
    pub fn new(num_constraints: u64, value: f64, low: f64, high: f64) -> Self {
        Self { num_constraints, value, low, high }
    }

    /// Single observation without a confidence band
    pub fn point(num_constraints: u64, value: f64) -> Self {
        Self::new(num_constraints, value, value, value)
    }
}

#[derive(Serialize)]
struct CenterRow {
    #[serde(rename = "Num Constraints")]
    num_constraints: u64,
    #[serde(rename = "Center value")]
    center: f64,
    #[serde(rename = "Confidence interval min")]
    min: f64,
    #[serde(rename = "Confidence interval max")]
    max: f64,
}

#[derive(Serialize)]
struct PercentileRow {
    #[serde(rename = "Num Constraints")]
    num_constraints: u64,
    #[serde(rename = "Median")]
    median: f64,
    #[serde(rename = "5th Percentile")]
    p5: f64,
    #[serde(rename = "95th Percentile")]
    p95: f64,
}

/// Column naming of the output file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsvLayout {
    /// Criterion center value with its confidence interval
    ConfidenceInterval,
    /// Median with the 5th/95th percentile band
    Percentiles,
}

/// Write `rows` to `path` in reverse order, replacing any existing file.
pub fn write_csv(rows: &[Measurement], layout: CsvLayout, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    if rows.is_empty() {
        // serde only emits the header alongside the first record
        writer.write_record(header(layout))?;
    }

    for m in rows.iter().rev() {
        match layout {
            CsvLayout::ConfidenceInterval => writer.serialize(CenterRow {
                num_constraints: m.num_constraints,
                center: m.value,
                min: m.low,
                max: m.high,
            })?,
            CsvLayout::Percentiles => writer.serialize(PercentileRow {
                num_constraints: m.num_constraints,
                median: m.value,
                p5: m.low,
                p95: m.high,
            })?,
        }
    }

    writer.flush()?;
    info!(path = %path.display(), rows = rows.len(), "wrote csv");
    Ok(())
}

fn header(layout: CsvLayout) -> [&'static str; 4] {
    match layout {
        CsvLayout::ConfidenceInterval => [
            "Num Constraints",
            "Center value",
            "Confidence interval min",
            "Confidence interval max",
        ],
        CsvLayout::Percentiles => [
            "Num Constraints",
            "Median",
            "5th Percentile",
            "95th Percentile",
        ],
    }
}
