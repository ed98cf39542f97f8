#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AlmanacError {
    #[error("unable to find \"{table} map:\" in almanac")]
    NotFound { table: String },

    /// A rule line inside a table block. `line_no` is 1-based.
    #[error("cannot parse rule in {table} map at line {line_no} ({reason}): {line:?}")]
    MalformedRule {
        table: String,
        line_no: usize,
        line: String,
        reason: &'static str,
    },

    #[error("no candidate location below {limit} maps back into a seed range")]
    ExhaustedSearch { limit: u64 },

    #[error("almanac is empty, expected a seeds line")]
    MissingSeeds,

    #[error("expected \"seeds:\" followed by numbers, found: {line:?}")]
    MalformedSeeds { line: String },

    #[error("seed ranges need start/length pairs, found {count} numbers")]
    OddSeedCount { count: usize },

    #[error("no seeds to locate")]
    NoSeeds,
}

pub type Result<T, E = AlmanacError> = std::result::Result<T, E>;
