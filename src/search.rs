use tracing::{debug, info};

use crate::almanac::Almanac;
use crate::error::{AlmanacError, Result};
use crate::seeds::SeedRange;

const PROGRESS_EVERY: u64 = 1_000_000;

/// How to find the lowest location reachable from a set of seed ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Push whole ranges through every table. Always terminates.
    Split,
    /// Walk candidate locations upwards from 0, tracing each back to a seed.
    /// Gives up after `limit` candidates.
    Scan { limit: u64 },
}

pub fn min_location_by_splitting(almanac: &Almanac, ranges: &[SeedRange]) -> Option<u64> {
    ranges.iter()
          .flat_map(|&range| almanac.locate_range(range))
          .map(|range| range.start())
          .min()
}

pub fn min_location_by_scanning(almanac: &Almanac, ranges: &[SeedRange], limit: u64) -> Result<u64> {
    if ranges.is_empty() {return Err(AlmanacError::NoSeeds)};
    for location in 0 .. limit {
        if location % PROGRESS_EVERY == 0 && location != 0 {
            debug!(location, "still scanning");
        }
        let seed = almanac.trace_back(location);
        if ranges.iter().any(|range| range.contains(seed)) {
            return Ok(location);
        }
    }
    Err(AlmanacError::ExhaustedSearch {limit})
}

/// Lowest location reachable from any seed when the seeds line is read as
/// `(start, length)` pairs.
pub fn min_range_location(almanac: &Almanac, strategy: Strategy) -> Result<u64> {
    let ranges = almanac.seed_ranges()?;
    info!(ranges = ranges.len(), ?strategy, "searching for lowest location");
    match strategy {
        Strategy::Split => min_location_by_splitting(almanac, &ranges).ok_or(AlmanacError::NoSeeds),
        Strategy::Scan {limit} => min_location_by_scanning(almanac, &ranges, limit),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::almanac::TableNames;
    use crate::rule::TranslationRule;
    use crate::table::MappingTable;
    use crate::test_util::EXAMPLE;

    fn example() -> Almanac {
        Almanac::parse_str(EXAMPLE, &TableNames::standard()).unwrap()
    }

    fn random_almanac(rng: &mut StdRng) -> Almanac {
        let tables = (0 .. rng.gen_range(1 ..= 5)).map(|ix| {
            let rules = (0 .. rng.gen_range(0 ..= 6)).filter_map(|_| {
                TranslationRule::from_triple(
                    rng.gen_range(0 .. 3000), rng.gen_range(0 .. 3000), rng.gen_range(0 .. 600)
                ).unwrap()
            }).collect();
            MappingTable::new(format!("t{}", ix), rules)
        }).collect();
        Almanac::new(vec![], tables)
    }

    // bijective on 0 .. 3000 and identity elsewhere, so tracing back is exact
    fn random_shuffled_almanac(rng: &mut StdRng) -> Almanac {
        let tables = (0 .. rng.gen_range(1 ..= 5)).map(|ix| {
            let mut cuts = (0 .. rng.gen_range(0 ..= 6)).map(|_| rng.gen_range(1 .. 3000)).collect::<Vec<u64>>();
            cuts.extend([0, 3000]);
            cuts.sort_unstable();
            cuts.dedup();
            let mut chunks = cuts.windows(2).map(|w| (w[0], w[1] - w[0])).collect::<Vec<_>>();
            chunks.shuffle(rng);
            let mut destination = 0;
            let rules = chunks.iter().map(|&(source, len)| {
                let rule = TranslationRule::from_triple(destination, source, len).unwrap().unwrap();
                destination += len;
                rule
            }).collect();
            MappingTable::new(format!("t{}", ix), rules)
        }).collect();
        Almanac::new(vec![], tables)
    }

    fn brute_force(almanac: &Almanac, ranges: &[SeedRange]) -> Option<u64> {
        ranges.iter().flat_map(|range| range.iter()).map(|seed| almanac.locate(seed)).min()
    }

    #[test]
    fn example_minimum_by_splitting() {
        assert_eq!(min_range_location(&example(), Strategy::Split), Ok(46));
    }

    #[test]
    fn example_minimum_by_scanning() {
        assert_eq!(min_range_location(&example(), Strategy::Scan {limit: 1000}), Ok(46));
    }

    #[test]
    fn scan_gives_up_at_limit() {
        assert_eq!(
            min_range_location(&example(), Strategy::Scan {limit: 46}),
            Err(AlmanacError::ExhaustedSearch {limit: 46})
        );
    }

    #[test]
    fn no_ranges_no_minimum() {
        let almanac = Almanac::new(vec![7, 0], vec![]);
        assert_eq!(min_range_location(&almanac, Strategy::Split), Err(AlmanacError::NoSeeds));
        assert_eq!(min_range_location(&almanac, Strategy::Scan {limit: 10}), Err(AlmanacError::NoSeeds));
    }

    #[test]
    fn odd_seed_count_is_an_error() {
        let almanac = Almanac::new(vec![79, 14, 55], vec![]);
        assert_eq!(
            min_range_location(&almanac, Strategy::Split),
            Err(AlmanacError::OddSeedCount {count: 3})
        );
    }

    #[test]
    fn splitting_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0 .. 200 {
            let almanac = random_almanac(&mut rng);
            let ranges = (0 .. rng.gen_range(1 ..= 3)).filter_map(|_|
                SeedRange::new(rng.gen_range(0 .. 3000), rng.gen_range(0 ..= 1000))
            ).collect::<Vec<_>>();
            assert_eq!(
                min_location_by_splitting(&almanac, &ranges),
                brute_force(&almanac, &ranges),
                "{:?} from {:?}", almanac, ranges
            );
        }
    }

    #[test]
    fn split_pieces_hold_exactly_the_located_seeds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0 .. 50 {
            let almanac = random_almanac(&mut rng);
            let Some(range) = SeedRange::new(rng.gen_range(0 .. 3000), rng.gen_range(1 ..= 300)) else {continue};
            let pieces = almanac.locate_range(range);
            let mut from_pieces = pieces.iter().flat_map(|piece| piece.iter()).collect::<Vec<_>>();
            let mut from_seeds = range.iter().map(|seed| almanac.locate(seed)).collect::<Vec<_>>();
            from_pieces.sort_unstable();
            from_seeds.sort_unstable();
            assert_eq!(from_pieces, from_seeds);
        }
    }

    #[test]
    fn scanning_matches_splitting() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0 .. 100 {
            let almanac = random_shuffled_almanac(&mut rng);
            let ranges = (0 .. 2).filter_map(|_|
                SeedRange::new(rng.gen_range(0 .. 3000), rng.gen_range(1 ..= 200))
            ).collect::<Vec<_>>();
            let expected = min_location_by_splitting(&almanac, &ranges).unwrap();
            assert_eq!(min_location_by_scanning(&almanac, &ranges, expected + 1), Ok(expected));
        }
    }
}
