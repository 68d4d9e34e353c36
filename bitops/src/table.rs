use once_cell::sync::Lazy;
use std::ops::Index;

pub const COUNT_TABLE_SIZE: usize = 256;

static SHARED_TABLE: Lazy<CountTable> = Lazy::new(CountTable::build);

/// Per-byte population counts for every 8-bit pattern.
///
/// Immutable after construction, so a single shared instance can serve
/// concurrent readers once [`CountTable::shared`] has returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CountTable {
    counts: [u8; COUNT_TABLE_SIZE],
}

impl CountTable {
    /// Fills the table with the recurrence `counts[i] = (i & 1) + counts[i >> 1]`:
    /// the count of `i` is the count of `i` with its lowest bit stripped,
    /// plus that lowest bit.
    #[must_use]
    pub fn build() -> Self {
        let mut counts = [0u8; COUNT_TABLE_SIZE];
        for index in 1..COUNT_TABLE_SIZE {
            counts[index] = (index as u8 & 1) + counts[index >> 1];
        }
        Self { counts }
    }

    /// Process-wide table, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED_TABLE
    }

    #[inline]
    #[must_use]
    pub fn lookup(&self, byte: u8) -> u32 {
        u32::from(self.counts[byte as usize])
    }

    /// Hamming weight of `value` as the sum of its four per-byte counts.
    ///
    /// The decomposition goes through `to_le_bytes`, which covers each byte
    /// exactly once with a defined order on every host.
    #[inline]
    #[must_use]
    pub fn count(&self, value: u32) -> u32 {
        value.to_le_bytes().into_iter().map(|byte| self.lookup(byte)).sum()
    }
}

impl Index<u8> for CountTable {
    type Output = u8;

    fn index(&self, byte: u8) -> &u8 {
        &self.counts[byte as usize]
    }
}

impl Default for CountTable {
    fn default() -> Self {
        Self::build()
    }
}
