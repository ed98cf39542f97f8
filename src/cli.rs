use std::path::PathBuf;

use clap::Parser;

use almanac::{Part, Strategy};

#[derive(Parser, Debug)]
#[command(version, about = "Lowest seed location reachable through an almanac")]
pub struct Args {
    /// Puzzle part to solve (both when omitted)
    #[clap(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Almanac to read
    #[clap(short, long, value_name = "FILE", default_value = "day5.in")]
    pub input: PathBuf,

    /// How part 2 searches the seed ranges
    #[clap(long, value_enum, default_value_t = StrategyArg::Split)]
    pub strategy: StrategyArg,

    /// Candidate locations tried by the scan strategy before giving up
    #[clap(long, value_name = "N", default_value_t = 100_000_000)]
    pub scan_limit: u64,

    /// Read table names from the `<name> map:` headers instead of the standard seven
    #[clap(long)]
    pub infer_tables: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    Split,
    Scan,
}

impl Args {
    pub fn parts(&self) -> Vec<Part> {
        match self.part {
            Some(1) => vec![Part::One],
            Some(_) => vec![Part::Two],
            None => vec![Part::One, Part::Two],
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyArg::Split => Strategy::Split,
            StrategyArg::Scan => Strategy::Scan {limit: self.scan_limit},
        }
    }
}
