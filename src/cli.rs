// src/cli.rs - Shared entry point for the conversion binaries
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::PipelineConfig;
use crate::error::Result;

/// Which log flavor a binary converts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pipeline {
    Compressed,
    Recursive,
}

impl Pipeline {
    pub fn config(self) -> PipelineConfig {
        match self {
            Pipeline::Compressed => PipelineConfig::compressed(),
            Pipeline::Recursive => PipelineConfig::recursive(),
        }
    }

    pub fn run(self, config: &PipelineConfig) -> Result<()> {
        match self {
            Pipeline::Compressed => crate::compressed::run(config),
            Pipeline::Recursive => crate::recursive::run(config),
        }
    }
}

/// Install a `RUST_LOG`-driven subscriber, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run `pipeline` on its fixed paths; any error terminates the process with status 1.
pub fn main(pipeline: Pipeline) {
    init_logging();

    let config = pipeline.config();
    let started = Utc::now();

    if let Err(e) = pipeline.run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }

    let elapsed = Utc::now().signed_duration_since(started);
    info!(
        output = %config.output_dir.display(),
        elapsed_ms = elapsed.num_milliseconds(),
        "conversion complete"
    );
}
