/// Convert `recursive-snark.txt` into `recursive-snark/{prove,proof-size,verify}.csv`,
/// summarizing each constraint count over its step runs.
use snark_bench_csv::cli::{self, Pipeline};

fn main() {
    cli::main(Pipeline::Recursive);
}
