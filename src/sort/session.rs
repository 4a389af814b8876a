//! A single sort run: the array, its counters, and the active step sequence

use super::errors::SortResult;
use super::highlight::Highlight;
use super::permutation::validate_permutation;
use super::stats::SortStats;
use super::{Algorithm, StepSort};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// No steps remain; the array is sorted ascending
    Exhausted,
}

/// The live pairing of array, counters, and an algorithm's step sequence
///
/// A session sorts exactly once. Resetting or switching algorithms means
/// building a new session; dropping this one abandons its remaining steps.
pub struct Session {
    algorithm: Algorithm,
    values: Vec<u32>,
    stats: SortStats,
    sorter: Box<dyn StepSort>,
    state: SessionState,
    steps: u64,
}

impl Session {
    /// Start sorting `values`, which may be any multiset
    pub fn new(algorithm: Algorithm, values: Vec<u32>) -> Self {
        let sorter = algorithm.sorter(values.len());
        Session {
            algorithm,
            values,
            stats: SortStats::new(),
            sorter,
            state: SessionState::Running,
            steps: 0,
        }
    }

    /// Start sorting a permutation of `1..=len`, rejecting anything else
    pub fn from_permutation(algorithm: Algorithm, values: Vec<u32>) -> SortResult<Self> {
        validate_permutation(&values)?;
        Ok(Session::new(algorithm, values))
    }

    /// Advance one step; `None` once the array is sorted
    pub fn next_step(&mut self) -> Option<Highlight> {
        if self.state == SessionState::Exhausted {
            return None;
        }

        match self.sorter.next_step(&mut self.values, &mut self.stats) {
            Some(highlight) => {
                debug_assert!(
                    highlight.indices().all(|index| index < self.values.len()),
                    "highlight {:?} out of bounds for {} items",
                    highlight,
                    self.values.len()
                );
                self.steps += 1;
                Some(highlight)
            }
            None => {
                self.state = SessionState::Exhausted;
                log::debug!(
                    "{} finished after {} steps ({} comparisons, {} accesses)",
                    self.algorithm,
                    self.steps,
                    self.stats.comparisons,
                    self.stats.array_accesses
                );
                None
            }
        }
    }

    /// Drain every remaining step, returning how many were taken
    pub fn run_to_end(&mut self) -> u64 {
        let before = self.steps;
        while self.next_step().is_some() {}
        self.steps - before
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == SessionState::Exhausted
    }

    /// Steps produced so far
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("algorithm", &self.algorithm)
            .field("values", &self.values)
            .field("stats", &self.stats)
            .field("state", &self.state)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
