use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{AlmanacError, Result};
use crate::seeds::{pair_ranges, parse_seed_line, SeedRange};
use crate::table::MappingTable;

/// The ordered table names an almanac is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames(Vec<String>);

impl TableNames {
    pub const STANDARD: [&'static str; 7] = [
        "seed-to-soil",
        "soil-to-fertilizer",
        "fertilizer-to-water",
        "water-to-light",
        "light-to-temperature",
        "temperature-to-humidity",
        "humidity-to-location",
    ];

    pub fn standard() -> Self {
        Self::STANDARD.into_iter().collect()
    }

    /// Every `<name> map:` header in `lines`, in order of appearance.
    pub fn infer<S: AsRef<str>>(lines: &[S]) -> Self {
        lines.iter()
             .filter_map(|line| line.as_ref().trim().strip_suffix(" map:"))
             .map(str::trim_end)
             .unique()
             .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {self.0.len()}

    pub fn is_empty(&self) -> bool {self.0.is_empty()}
}

impl<S: Into<String>> FromIterator<S> for TableNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Seeds plus the chain of tables that carries a seed to its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<u64>,
    tables: Vec<MappingTable>,
}

impl Almanac {
    pub fn new(seeds: Vec<u64>, tables: Vec<MappingTable>) -> Self {
        Self {seeds, tables}
    }

    /// Builds an almanac from its text lines: the seeds line first, then one
    /// table per entry of `names`, applied in that order.
    pub fn parse<S: AsRef<str>>(lines: &[S], names: &TableNames) -> Result<Self> {
        let seeds = parse_seed_line(lines.first().ok_or(AlmanacError::MissingSeeds)?.as_ref())?;
        let tables = names.iter()
                          .map(|name| MappingTable::build(lines, name))
                          .collect::<Result<Vec<_>>>()?;
        debug!(seeds = seeds.len(), tables = tables.len(), "parsed almanac");
        Ok(Self::new(seeds, tables))
    }

    pub fn parse_str(input: &str, names: &TableNames) -> Result<Self> {
        Self::parse(&input.lines().collect::<Vec<_>>(), names)
    }

    pub fn seeds(&self) -> &[u64] {&self.seeds}

    pub fn tables(&self) -> &[MappingTable] {&self.tables}

    /// The seeds line read as `(start, length)` pairs.
    pub fn seed_ranges(&self) -> Result<Vec<SeedRange>> {
        pair_ranges(&self.seeds)
    }

    pub fn locate(&self, seed: u64) -> u64 {
        self.tables.iter().fold(seed, |value, table| table.forward(value))
    }

    /// The seed-side value a location came from, walking the tables backwards.
    pub fn trace_back(&self, location: u64) -> u64 {
        self.tables.iter().rev().fold(location, |value, table| table.reverse(value))
    }

    pub fn location_lookup(&self) -> FxHashMap<u64, u64> {
        self.seeds.iter().map(|&seed| (seed, self.locate(seed))).collect()
    }

    /// Lowest location among the literal seeds.
    pub fn min_location(&self) -> Result<u64> {
        self.location_lookup().into_values().min().ok_or(AlmanacError::NoSeeds)
    }

    /// Every range of locations reachable from `range`.
    pub fn locate_range(&self, range: SeedRange) -> Vec<SeedRange> {
        self.tables.iter().fold(vec![range], |ranges, table|
            ranges.into_iter().flat_map(|range| table.split_range(range)).collect()
        )
    }
}
