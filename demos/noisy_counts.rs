//! A small noisy release, printed to the console.
//!
//! Generates 100 uniform rows over two fields with 3 and 6 values, tabulates
//! them, adds Laplace(0, 1) noise, and prints both tables with their subtotals.
//!
//! Try other shapes:
//!
//! ```text
//! cargo run --example noisy_counts -- 2 3 4
//! RUST_LOG=tally=debug cargo run --example noisy_counts
//! ```

use tally::ReleaseConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args: Vec<usize> = std::env::args()
        .skip(1)
        .map(|a| a.parse())
        .collect::<Result<_, _>>()?;
    let field_sizes = if args.is_empty() { vec![3, 6] } else { args };

    let release = ReleaseConfig::new(&field_sizes)
        .with_rows(100)
        .with_scale(1.0)
        .with_seed(7)
        .run()?;

    println!("true counts\n{}", release.true_counts);
    println!();
    println!(
        "perturbed counts\n{:.1}",
        release.perturbed_counts.mapv(|x| (x * 10.0).round() / 10.0)
    );
    println!();
    println!("totals of true counts");
    for (axis, s) in release.true_subtotals.iter().enumerate() {
        println!("  axis {axis}: {s}");
    }
    println!();
    println!("totals of perturbed counts");
    for (axis, s) in release.perturbed_subtotals.iter().enumerate() {
        println!("  axis {axis}: {s:.1}");
    }

    Ok(())
}
