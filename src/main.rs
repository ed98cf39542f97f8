use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use almanac::input::read_lines;
use almanac::{solve, Almanac, Part, TableNames};

use crate::cli::Args;

mod cli;

fn setup_tracing() -> Result<()> {
    let env_filter = EnvFilter::builder().parse_lossy(
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt).try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing()?;

    let lines = read_lines(&args.input)
        .with_context(|| format!("cannot read almanac from {}", args.input.display()))?;
    let names = if args.infer_tables {TableNames::infer(&lines)} else {TableNames::standard()};
    let almanac = Almanac::parse(&lines, &names)
        .with_context(|| format!("cannot parse almanac {}", args.input.display()))?;

    let time = std::time::Instant::now();
    for part in args.parts() {
        let number = if part == Part::One {1} else {2};
        let location = solve(part, &almanac, args.strategy())
            .with_context(|| format!("part {} failed", number))?;
        println!("Part {}: minimum location is {}", number, location);
    }
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
