//! Seed-to-location almanac: a chain of interval remapping tables, and the
//! searches for the lowest location a set of seeds can reach.

pub mod almanac;
pub mod error;
pub mod input;
pub mod rule;
pub mod search;
pub mod seeds;
pub mod table;

#[cfg(test)]
mod test_util;

pub use almanac::{Almanac, TableNames};
pub use error::{AlmanacError, Result};
pub use search::Strategy;
pub use seeds::SeedRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Every seed value is a seed.
    One,
    /// Seed values pair up as `(start, length)` ranges.
    Two,
}

pub fn solve(part: Part, almanac: &Almanac, strategy: Strategy) -> Result<u64> {
    match part {
        Part::One => almanac.min_location(),
        Part::Two => search::min_range_location(almanac, strategy),
    }
}
