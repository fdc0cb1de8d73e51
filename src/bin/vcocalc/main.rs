//! vcocalc - PLL parameter calculator
//!
//! Finds REFDIV, FBDIV and post dividers for a requested system clock
//! and prints them, with CMake compile definitions when REFDIV isn't 1.

mod args;

use std::error::Error;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use args::Args;
use pll_calc::{ frequency::*, report::* };

/// Logs go to stderr, `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "pll_calc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let constraints = args.constraints()?;
    if let Some(r) = constraints.locked_refdiv {
        println!("Locking REFDIV to {}", r);
    }

    let result = solve(&constraints);
    println!(
        "{}",
        Report {
            target_hz: constraints.target_hz,
            result: &result,
            executable: &args.executable,
        }
    );

    Ok(())
}
