//! Byte frequency counting.

use crate::config::MAX_SYMBOLS;

/// Occurrence count of every byte value in an input.
///
/// Symbols with a zero count take no part in tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; MAX_SYMBOLS],
}

impl FrequencyTable {
    /// Create a table with every count at zero.
    pub fn new() -> Self {
        Self {
            counts: [0; MAX_SYMBOLS],
        }
    }

    /// Tally the bytes of `input`.
    pub fn count(input: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in input {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Add `count` occurrences of `symbol`, saturating at `u64::MAX`.
    pub fn add_count(&mut self, symbol: u8, count: u64) {
        let slot = &mut self.counts[symbol as usize];
        *slot = slot.saturating_add(count);
    }

    /// Count for `symbol`.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts; equals the length of the counted input.
    ///
    /// Saturates at `u64::MAX` for tables filled through [`Self::add_count`].
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Present symbols and their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }

    /// Shannon entropy of the distribution in bits per symbol.
    ///
    /// This is the lower bound on the average code length of any prefix
    /// code for the counted input. Returns 0.0 for an empty table.
    pub fn entropy_bits(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        self.iter()
            .map(|(_, c)| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
