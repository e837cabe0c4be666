//! Example: per-digit cluster statistics for a constant.
//!
//! Computes `rows * cols` digits, extracts the clusters of every digit and
//! prints one line per digit: kept cells, cluster count, largest cluster and
//! edge count.
//!
//! Run from the workspace root:
//!   cargo run -p numart --example cluster_stats -- --help
//!   cargo run -p numart --example cluster_stats -- phi --rows 40 --cols 80

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use numart::{Constant, digit_grid, extract_all_digits};

#[derive(Parser, Debug)]
#[command(about = "Print digit-cluster statistics for pi, phi or e")]
struct Args {
    /// pi, phi or e
    #[arg(default_value = "pi")]
    constant: Constant,

    #[arg(long, default_value_t = 50)]
    rows: usize,

    #[arg(long, default_value_t = 100)]
    cols: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let t0 = Instant::now();
    let grid = digit_grid(args.constant, args.rows, args.cols)
        .with_context(|| format!("computing {} digits", args.constant))?;
    let t_digits = t0.elapsed();

    let t1 = Instant::now();
    let clusters = extract_all_digits(&grid);
    let t_clusters = t1.elapsed();

    println!(
        "{} {}x{}  digits {:.1} ms  clusters {:.1} ms",
        args.constant,
        grid.rows(),
        grid.cols(),
        t_digits.as_secs_f64() * 1e3,
        t_clusters.as_secs_f64() * 1e3
    );
    println!("digit  cells  clusters  largest  edges");
    for d in &clusters {
        let largest = d.components.iter().map(Vec::len).max().unwrap_or(0);
        let edges: usize = d.edges().iter().map(Vec::len).sum();
        println!(
            "{:>5}  {:>5}  {:>8}  {:>7}  {:>5}",
            d.digit.value(),
            d.num_cells(),
            d.count,
            largest,
            edges
        );
    }

    Ok(())
}
