use itertools::Itertools;

use crate::error::{AlmanacError, Result};
use crate::input::tokens;

/// A non-empty inclusive interval of seed-side values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeedRange {
    start: u64,
    end: u64,
}

impl SeedRange {
    /// `[start, start + length - 1]`, or `None` for a zero length. Ends past
    /// `u64::MAX` are clamped, which drops no representable seed.
    pub fn new(start: u64, length: u64) -> Option<Self> {
        (length > 0).then(|| Self {start, end: start.saturating_add(length - 1)})
    }

    pub(crate) fn from_bounds(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "empty range {}..={}", start, end);
        Self {start, end}
    }

    pub fn start(&self) -> u64 {self.start}

    pub fn end(&self) -> u64 {self.end}

    pub fn contains(&self, value: u64) -> bool {
        (self.start ..= self.end).contains(&value)
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> {
        self.start ..= self.end
    }
}

/// Parses the `seeds: N1 N2 ...` header line.
pub fn parse_seed_line(line: &str) -> Result<Vec<u64>> {
    let malformed = || AlmanacError::MalformedSeeds {line: line.to_owned()};
    let numbers = line.trim().strip_prefix("seeds:").ok_or_else(malformed)?;
    tokens(numbers).map(|n| n.parse::<u64>().map_err(|_| malformed())).collect()
}

/// Reads seed values as `(start, length)` pairs. Zero-length pairs hold no
/// seed and are skipped.
pub fn pair_ranges(seeds: &[u64]) -> Result<Vec<SeedRange>> {
    if seeds.len() % 2 != 0 {
        return Err(AlmanacError::OddSeedCount {count: seeds.len()});
    }
    Ok(seeds.iter().tuples().filter_map(|(&start, &length)| SeedRange::new(start, length)).collect())
}
