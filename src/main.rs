use clap::Parser;
use qsort_demo::{Strategy, Workload, WorkloadError};

/// Sorts and reverses an even-number sequence over and over.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Sequence length
    #[arg(long, default_value_t = 1000)]
    len: usize,

    /// Sort-then-reverse rounds
    #[arg(long, default_value_t = 10_000)]
    rounds: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Recursive)]
    strategy: Strategy,
}

fn main() -> Result<(), WorkloadError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    let workload = Workload {
        len: args.len,
        rounds: args.rounds,
        strategy: args.strategy,
    };

    let v = workload.run()?;
    if let Some(first) = v.first() {
        println!("a[0] = {first}");
    }
    Ok(())
}
