use tracing::debug;

use crate::error::{AlmanacError, Result};
use crate::input::tokens;
use crate::rule::TranslationRule;
use crate::seeds::SeedRange;

/// One named stage of the almanac pipeline. Values no rule covers pass
/// through unchanged; on overlap the earliest rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    name: String,
    rules: Vec<TranslationRule>,
}

impl MappingTable {
    pub fn new(name: impl Into<String>, rules: Vec<TranslationRule>) -> Self {
        Self {name: name.into(), rules}
    }

    /// Finds the `<name> map:` header in `lines` and reads the rule lines
    /// below it, up to the next blank line or the end of input.
    pub fn build<S: AsRef<str>>(lines: &[S], name: &str) -> Result<Self> {
        let header = format!("{} map:", name);
        let header_at = lines.iter().position(|line| line.as_ref().trim() == header)
            .ok_or_else(|| AlmanacError::NotFound {table: name.to_owned()})?;

        let mut rules = Vec::new();
        for (line_ix, line) in lines.iter().enumerate().skip(header_at + 1) {
            let line = line.as_ref();
            if line.trim().is_empty() {break};
            let malformed = |reason| AlmanacError::MalformedRule {
                table: name.to_owned(), line_no: line_ix + 1, line: line.to_owned(), reason
            };
            let [dest, src, len] = tokens(line).collect::<Vec<_>>()[..] else {
                return Err(malformed("expected three numbers"));
            };
            let [dest, src, len] = [dest, src, len].map(|n| n.parse::<u64>());
            let (Ok(dest), Ok(src), Ok(len)) = (dest, src, len) else {
                return Err(malformed("not an unsigned integer"));
            };
            match TranslationRule::from_triple(dest, src, len).map_err(malformed)? {
                Some(rule) => rules.push(rule),
                None => debug!(table = name, line_no = line_ix + 1, "skipping zero-length rule"),
            }
        }
        debug!(table = name, rules = rules.len(), "built mapping table");
        Ok(Self::new(name, rules))
    }

    pub fn name(&self) -> &str {&self.name}

    pub fn rules(&self) -> &[TranslationRule] {&self.rules}

    pub fn forward(&self, value: u64) -> u64 {
        self.rules.iter().find_map(|rule| rule.forward(value)).unwrap_or(value)
    }

    pub fn reverse(&self, value: u64) -> u64 {
        self.rules.iter().find_map(|rule| rule.reverse(value)).unwrap_or(value)
    }

    /// Translates every value of `range` at once, as the set of ranges it
    /// lands on. Pieces claimed by an earlier rule are not seen by later
    /// ones, matching `forward`.
    pub fn split_range(&self, range: SeedRange) -> Vec<SeedRange> {
        let mut translated = Vec::new();
        let mut pending = vec![range];
        let mut untouched = Vec::new();
        for rule in &self.rules {
            for piece in pending.drain(..) {
                let lo = piece.start().max(rule.source_start);
                let hi = piece.end().min(rule.source_end);
                if lo > hi {
                    untouched.push(piece);
                    continue;
                }
                if piece.start() < lo {untouched.push(SeedRange::from_bounds(piece.start(), lo - 1))};
                if hi < piece.end() {untouched.push(SeedRange::from_bounds(hi + 1, piece.end()))};
                translated.push(SeedRange::from_bounds(rule.shift(lo), rule.shift(hi)));
            }
            std::mem::swap(&mut pending, &mut untouched);
            if pending.is_empty() {break};
        }
        translated.append(&mut pending);
        translated
    }
}
