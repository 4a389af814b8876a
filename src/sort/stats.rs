//! Comparison and array-access counters for an in-progress sort
//!
//! Every algorithm charges its work through [`SortStats`] so the totals are
//! comparable across algorithms:
//!
//! - a comparison between two elements costs one comparison plus the
//!   elements it freshly reads (cached values are not recharged)
//! - a swap costs [`SWAP_ACCESSES`] accesses (two reads, two writes)
//! - a swap of an index with itself is never performed, so it is never charged

/// Accesses charged for exchanging two distinct elements
pub const SWAP_ACCESSES: u64 = 4;

/// Monotonic counters for one sort run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub array_accesses: u64,
}

impl SortStats {
    pub fn new() -> Self {
        SortStats::default()
    }

    /// Charge one element comparison that read `reads` elements from the array
    pub fn record_comparison(&mut self, reads: u64) {
        self.comparisons += 1;
        self.array_accesses += reads;
    }

    /// Charge plain reads or writes
    pub fn record_accesses(&mut self, count: u64) {
        self.array_accesses += count;
    }

    /// Charge an exchange of two distinct elements
    pub fn record_swap(&mut self) {
        self.array_accesses += SWAP_ACCESSES;
    }

    pub fn reset(&mut self) {
        *self = SortStats::default();
    }
}

/// Format a count with comma thousands separators, e.g. `12,345`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
