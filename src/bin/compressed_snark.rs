/// Convert `compressed-snark.txt` into `compressed-snark/{prove,proof-size,verify}.csv`.
///
/// The output directory must already exist.
use snark_bench_csv::cli::{self, Pipeline};

fn main() {
    cli::main(Pipeline::Compressed);
}
