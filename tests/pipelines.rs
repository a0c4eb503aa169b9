// End-to-end runs of both pipelines against criterion-style logs
use std::fs;
use std::path::Path;

use anyhow::Result;
use snark_bench_csv::cli::Pipeline;
use snark_bench_csv::{Error, PipelineConfig};

fn compressed_entry(log: &mut String, num_cons: u64, prove: &str, verify: &str, size: u64) {
    let name = format!("CompressedSNARK-NumCons-{}", num_cons);
    log.push_str(&format!("Benchmarking {}/Prove\n", name));
    log.push_str(&format!("Benchmarking {}/Prove: Warming up for 3.0000 s\n", name));
    log.push_str(&format!("Benchmarking {}/Prove: Collecting 10 samples in estimated 63.212 s (110 iterations)\n", name));
    log.push_str(&format!("Benchmarking {}/Prove: Analyzing\n", name));
    log.push_str(&format!("{}/Prove\n                        time:   [{}]\n", name, prove));
    log.push_str(&format!("{}/ProofSize: {} B\n", name, size));
    log.push_str(&format!("Benchmarking {}/Verify: Analyzing\n", name));
    log.push_str(&format!("{}/Verify\n                        time:   [{}]\n", name, verify));
    log.push_str("Found 1 outliers among 10 measurements (10.00%)\n  1 (10.00%) high mild\n\n");
}

fn recursive_entry(log: &mut String, num_cons: u64, steps: u32, prove_ms: f64, verify_ms: f64, size: u64) {
    let name = format!("RecursiveSNARK-NumCons-{}-NumSteps-{}", num_cons, steps);
    log.push_str(&format!("Benchmarking {}/Prove: Analyzing\n", name));
    log.push_str(&format!(
        "{}/Prove\n                        time:   [{} ms {} ms {} ms]\n",
        name,
        prove_ms - 1.0,
        prove_ms,
        prove_ms + 1.0
    ));
    log.push_str(&format!("{}/ProofSize: {} B\n", name, size));
    log.push_str(&format!("Benchmarking {}/Verify: Analyzing\n", name));
    log.push_str(&format!(
        "{}/Verify\n                        time:   [{} ms {} ms {} ms]\n",
        name,
        verify_ms - 1.0,
        verify_ms,
        verify_ms + 1.0
    ));
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_compressed_pipeline_writes_reversed_tables() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = Pipeline::Compressed.config().with_root(dir.path());

    let mut log = String::from("Gnuplot not found, using plotters backend\n");
    compressed_entry(&mut log, 1024, "1.0 ms 1.2 ms 1.4 ms", "10 ms 11 ms 12 ms", 4096);
    compressed_entry(&mut log, 2048, "2.0 s 2.5 s 3.0 s", "0.5 s 0.75 s 1.0 s", 8192);
    fs::write(&config.input, log)?;
    fs::create_dir(&config.output_dir)?;

    Pipeline::Compressed.run(&config)?;

    assert_eq!(
        read_lines(&config.output_path("prove.csv")),
        vec![
            "Num Constraints,Center value,Confidence interval min,Confidence interval max",
            "2048,2.5,2.0,3.0",
            "1024,0.0012,0.001,0.0014",
        ]
    );
    assert_eq!(
        read_lines(&config.output_path("verify.csv")),
        vec![
            "Num Constraints,Center value,Confidence interval min,Confidence interval max",
            "2048,750.0,500.0,1000.0",
            "1024,11.0,10.0,12.0",
        ]
    );
    assert_eq!(
        read_lines(&config.output_path("proof-size.csv")),
        vec![
            "Num Constraints,Center value,Confidence interval min,Confidence interval max",
            "2048,8.0,8.0,8.0",
            "1024,4.0,4.0,4.0",
        ]
    );
    Ok(())
}

#[test]
fn test_compressed_pipeline_requires_output_dir() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = PipelineConfig::compressed().with_root(dir.path());

    let mut log = String::new();
    compressed_entry(&mut log, 1024, "1.0 ms 1.2 ms 1.4 ms", "10 ms 11 ms 12 ms", 4096);
    fs::write(&config.input, log)?;

    let err = Pipeline::Compressed.run(&config).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "unexpected error: {}", err);
    assert!(!config.output_dir.exists());
    Ok(())
}

#[test]
fn test_recursive_pipeline_summarizes_steps() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = Pipeline::Recursive.config().with_root(dir.path());

    // Proving time grows by 100 ms per step; verification stays flat.
    let mut log = String::new();
    for &num_cons in &[0u64, 12184] {
        let base = if num_cons == 0 { 1000.0 } else { 5000.0 };
        for steps in 10..16 {
            let offset = (steps - 10) as f64;
            recursive_entry(&mut log, num_cons, steps, base + 100.0 * offset, 40.0 + offset, 10240);
        }
    }
    fs::write(&config.input, log)?;

    Pipeline::Recursive.run(&config)?;

    let prove = read_lines(&config.output_path("prove.csv"));
    assert_eq!(prove[0], "Num Constraints,Median,5th Percentile,95th Percentile");
    assert_eq!(prove.len(), 3);
    assert!(prove[1].starts_with("12184,"));
    assert!(prove[2].starts_with("0,"));
    for row in &prove[1..] {
        let fields: Vec<f64> = row.split(',').skip(1).map(|f| f.parse().unwrap()).collect();
        for value in fields {
            assert!((value - 0.1).abs() < 1e-9, "row {}", row);
        }
    }

    let verify = read_lines(&config.output_path("verify.csv"));
    assert_eq!(verify[1], "12184,42.5,40.25,44.75");
    assert_eq!(verify[2], "0,42.5,40.25,44.75");

    let size = read_lines(&config.output_path("proof-size.csv"));
    assert_eq!(size[1..], ["12184,10.0,10.0,10.0", "0,10.0,10.0,10.0"]);
    Ok(())
}

#[test]
fn test_malformed_proof_size_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = PipelineConfig::recursive().with_root(dir.path());

    let mut log = String::new();
    recursive_entry(&mut log, 0, 10, 1000.0, 40.0, 10240);
    log.push_str("RecursiveSNARK-NumCons-0-NumSteps-11/ProofSize: 10240 B: truncated\n");
    recursive_entry(&mut log, 0, 12, 1200.0, 40.0, 10240);
    fs::write(&config.input, log)?;

    let err = Pipeline::Recursive.run(&config).unwrap_err();
    assert!(matches!(err, Error::Format { .. }), "unexpected error: {}", err);
    assert!(!config.output_dir.exists());
    Ok(())
}

#[test]
fn test_missing_operation_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = PipelineConfig::compressed().with_root(dir.path());
    fs::create_dir(&config.output_dir)?;
    fs::write(&config.input, "CompressedSNARK-NumCons-1024/ProofSize: 4096 B\n")?;

    let err = Pipeline::Compressed.run(&config).unwrap_err();
    assert!(matches!(err, Error::MissingOperation { .. }));
    assert_eq!(fs::read_dir(&config.output_dir)?.count(), 0);
    Ok(())
}
