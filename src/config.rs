// src/config.rs - Fixed input/output locations for each pipeline
use std::path::{Path, PathBuf};

use crate::units::{PROOF_SIZE, PROVE, VERIFY};

/// Output file names, paired with the operation each one summarizes
pub const OUTPUT_FILES: [(&str, &str); 3] = [
    (PROVE, "prove.csv"),
    (PROOF_SIZE, "proof-size.csv"),
    (VERIFY, "verify.csv"),
];

/// Where a pipeline reads its log and writes its tables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Create `output_dir` when missing instead of failing on the first write
    pub create_output_dir: bool,
}

impl PipelineConfig {
    /// `compressed-snark.txt` -> `compressed-snark/`
    pub fn compressed() -> Self {
        Self {
            input: PathBuf::from("compressed-snark.txt"),
            output_dir: PathBuf::from("compressed-snark"),
            create_output_dir: false,
        }
    }

    /// `recursive-snark.txt` -> `recursive-snark/`
    pub fn recursive() -> Self {
        Self {
            input: PathBuf::from("recursive-snark.txt"),
            output_dir: PathBuf::from("recursive-snark"),
            create_output_dir: true,
        }
    }

    /// Resolve both paths relative to `root` instead of the working directory.
    pub fn with_root(mut self, root: &Path) -> Self {
        self.input = root.join(&self.input);
        self.output_dir = root.join(&self.output_dir);
        self
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
