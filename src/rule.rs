/// One affine piece of a mapping table: every value in
/// `source_start ..= source_end` lands at the same offset from
/// `destination_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRule {
    pub source_start: u64,
    pub source_end: u64,
    pub destination_start: u64,
}

impl TranslationRule {
    /// Builds a rule from an almanac `dest src len` triple.
    ///
    /// A zero length covers nothing and yields `Ok(None)`. Either end falling
    /// outside `u64` is an error, so translating through a built rule never
    /// overflows.
    pub fn from_triple(destination: u64, source: u64, len: u64) -> Result<Option<Self>, &'static str> {
        if len == 0 {return Ok(None)};
        let source_end = source.checked_add(len - 1).ok_or("source range overflows")?;
        destination.checked_add(len - 1).ok_or("destination range overflows")?;
        Ok(Some(Self {source_start: source, source_end, destination_start: destination}))
    }

    pub fn destination_end(&self) -> u64 {
        self.destination_start + (self.source_end - self.source_start)
    }

    pub fn covers_source(&self, value: u64) -> bool {
        (self.source_start ..= self.source_end).contains(&value)
    }

    pub fn covers_destination(&self, value: u64) -> bool {
        (self.destination_start ..= self.destination_end()).contains(&value)
    }

    pub fn forward(&self, value: u64) -> Option<u64> {
        self.covers_source(value).then(|| self.shift(value))
    }

    pub fn reverse(&self, value: u64) -> Option<u64> {
        self.covers_destination(value).then(|| self.source_start + (value - self.destination_start))
    }

    // caller guarantees `value` is inside the source range
    pub(crate) fn shift(&self, value: u64) -> u64 {
        self.destination_start + (value - self.source_start)
    }
}
