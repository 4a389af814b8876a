//! Iterative quicksort with a Lomuto partition
//!
//! Recursion is replaced by an explicit stack of `(low, high)` ranges. The
//! pivot is the last element of the active range and elements equal to it go
//! to the left partition.

use super::highlight::Highlight;
use super::stats::SortStats;
use super::StepSort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartitionPhase {
    Start,
    Compare,
    Swap,
    PlacePivot,
    Finish,
}

enum PartitionStep {
    Continue(Highlight),
    Placed { pivot: usize, highlight: Highlight },
}

/// One in-progress partition of `values[low..=high]`
#[derive(Debug, Clone)]
struct Partition {
    low: usize,
    high: usize,
    pivot_value: u32,
    /// Next index to scan
    j: usize,
    /// Next free slot of the left partition
    store: usize,
    phase: PartitionPhase,
}

impl Partition {
    fn new(low: usize, high: usize) -> Self {
        Partition {
            low,
            high,
            pivot_value: 0,
            j: low,
            store: low,
            phase: PartitionPhase::Start,
        }
    }

    /// Last index of the left partition, if it is non-empty
    fn left_end(&self) -> Option<usize> {
        (self.store > self.low).then(|| self.store - 1)
    }

    fn step(&mut self, values: &mut [u32], stats: &mut SortStats) -> PartitionStep {
        loop {
            match self.phase {
                PartitionPhase::Start => {
                    self.pivot_value = values[self.high];
                    stats.record_accesses(1);
                    self.phase = PartitionPhase::Compare;
                    return PartitionStep::Continue(Highlight::pivot(self.high));
                }
                PartitionPhase::Compare => {
                    if self.j >= self.high {
                        self.phase = PartitionPhase::PlacePivot;
                        continue;
                    }

                    stats.record_comparison(1);
                    let highlight = Highlight::pivot(self.high)
                        .with_j(self.j)
                        .with_optional_i(self.left_end());

                    if values[self.j] <= self.pivot_value {
                        if self.store != self.j {
                            self.phase = PartitionPhase::Swap;
                        } else {
                            self.store += 1;
                            self.j += 1;
                        }
                    } else {
                        self.j += 1;
                    }
                    return PartitionStep::Continue(highlight);
                }
                PartitionPhase::Swap => {
                    values.swap(self.store, self.j);
                    stats.record_swap();
                    let highlight = Highlight::pivot(self.high)
                        .with_swap(self.store, self.j)
                        .with_i(self.store)
                        .with_j(self.j);
                    self.store += 1;
                    self.j += 1;
                    self.phase = PartitionPhase::Compare;
                    return PartitionStep::Continue(highlight);
                }
                PartitionPhase::PlacePivot => {
                    self.phase = PartitionPhase::Finish;
                    if self.store != self.high {
                        values.swap(self.store, self.high);
                        stats.record_swap();
                        return PartitionStep::Continue(
                            Highlight::swap(self.store, self.high).with_pivot(self.high),
                        );
                    }
                }
                PartitionPhase::Finish => {
                    return PartitionStep::Placed {
                        pivot: self.store,
                        highlight: Highlight::pivot(self.store),
                    };
                }
            }
        }
    }
}

/// Quicksort driven one step at a time
#[derive(Debug, Clone)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        let mut ranges = Vec::new();
        if len >= 2 {
            ranges.push((0, len - 1));
        }
        QuickSort {
            ranges,
            partition: None,
        }
    }
}

impl StepSort for QuickSort {
    fn next_step(&mut self, values: &mut [u32], stats: &mut SortStats) -> Option<Highlight> {
        loop {
            if let Some(partition) = self.partition.as_mut() {
                match partition.step(values, stats) {
                    PartitionStep::Continue(highlight) => return Some(highlight),
                    PartitionStep::Placed { pivot, highlight } => {
                        let (low, high) = (partition.low, partition.high);
                        self.partition = None;

                        // Right first so the left range is partitioned next
                        if pivot + 1 < high {
                            self.ranges.push((pivot + 1, high));
                        }
                        if low + 1 < pivot {
                            self.ranges.push((low, pivot - 1));
                        }
                        return Some(highlight);
                    }
                }
            }

            let (low, high) = self.ranges.pop()?;
            if low < high {
                self.partition = Some(Partition::new(low, high));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(values: &mut [u32]) -> (Vec<Highlight>, SortStats) {
        let mut sorter = QuickSort::new(values.len());
        let mut stats = SortStats::new();
        let mut steps = Vec::new();
        while let Some(h) = sorter.next_step(values, &mut stats) {
            steps.push(h);
        }
        (steps, stats)
    }

    #[test]
    fn test_first_step_announces_pivot() {
        let mut values = vec![3, 1, 2];
        let mut sorter = QuickSort::new(values.len());
        let mut stats = SortStats::new();
        let first = sorter.next_step(&mut values, &mut stats).unwrap();
        assert_eq!(first, Highlight::pivot(2));
        assert_eq!(stats.array_accesses, 1);
        assert_eq!(stats.comparisons, 0);
    }

    #[test]
    fn test_final_partition_step_marks_pivot_slot() {
        let mut values = vec![2, 1];
        let (steps, _) = drain(&mut values);
        assert_eq!(values, vec![1, 2]);
        // pivot, compare, pivot swap, placed
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2], Highlight::swap(0, 1).with_pivot(1));
        assert_eq!(steps[3], Highlight::pivot(0));
    }

    #[test]
    fn test_left_end_absent_until_left_partition_grows() {
        let mut values = vec![5, 1, 3];
        let mut sorter = QuickSort::new(values.len());
        let mut stats = SortStats::new();
        sorter.next_step(&mut values, &mut stats);
        let compare = sorter.next_step(&mut values, &mut stats).unwrap();
        assert_eq!(compare.i, None);
        assert_eq!(compare.j, Some(0));
    }
}
