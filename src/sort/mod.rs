//! Step-producing sort algorithms
//!
//! Every algorithm is an explicit state machine implementing [`StepSort`]:
//! each call to [`StepSort::next_step`] performs one atomic unit of work on
//! the array, charges it to [`SortStats`], and describes it with a
//! [`Highlight`]. `None` means the array is sorted ascending.
//!
//! # Modules
//!
//! - [`stats`]: comparison and access counters
//! - [`highlight`]: per-step index roles for rendering
//! - [`quick`], [`heap`], [`bubble`], [`insertion`], [`selection`]: the algorithms
//! - [`session`]: array + counters + active algorithm
//! - [`permutation`]: input generation and validation
//! - [`errors`]: precondition errors

pub mod bubble;
pub mod errors;
pub mod heap;
pub mod highlight;
pub mod insertion;
pub mod permutation;
pub mod quick;
pub mod selection;
pub mod session;
pub mod stats;

pub use errors::{SortError, SortResult};
pub use highlight::{Highlight, Role};
pub use permutation::{generate_permutation, validate_permutation};
pub use session::{Session, SessionState};
pub use stats::SortStats;

use std::fmt;
use std::str::FromStr;

/// A sort that advances one step per call
///
/// Implementations are built for a fixed slice length and always receive the
/// same slice. They are not restartable: once `None` is returned, a fresh
/// sorter is needed to sort again.
pub trait StepSort {
    fn next_step(&mut self, values: &mut [u32], stats: &mut SortStats) -> Option<Highlight>;
}

/// The available algorithms, in switch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Quick,
    Heap,
    Bubble,
    Insertion,
    Selection,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
        }
    }

    /// Next algorithm, wrapping around after the last
    pub fn next(self) -> Self {
        match self {
            Algorithm::Quick => Algorithm::Heap,
            Algorithm::Heap => Algorithm::Bubble,
            Algorithm::Bubble => Algorithm::Insertion,
            Algorithm::Insertion => Algorithm::Selection,
            Algorithm::Selection => Algorithm::Quick,
        }
    }

    /// Fresh step sequence for a slice of `len` elements
    pub fn sorter(self, len: usize) -> Box<dyn StepSort> {
        match self {
            Algorithm::Quick => Box::new(quick::QuickSort::new(len)),
            Algorithm::Heap => Box::new(heap::HeapSort::new(len)),
            Algorithm::Bubble => Box::new(bubble::BubbleSort::new(len)),
            Algorithm::Insertion => Box::new(insertion::InsertionSort::new(len)),
            Algorithm::Selection => Box::new(selection::SelectionSort::new(len)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected quick, heap, bubble, insertion or selection)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let short = lowered
            .strip_suffix("sort")
            .map(|rest| rest.trim_end_matches(['-', '_', ' ']))
            .unwrap_or(&lowered);

        match short {
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
