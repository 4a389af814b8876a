//! Insertion sort that shifts larger predecessors right before placing the key

use super::highlight::Highlight;
use super::stats::SortStats;
use super::StepSort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pick,
    Scan,
    Shift,
    Place,
}

#[derive(Debug, Clone)]
pub struct InsertionSort {
    len: usize,
    /// Index of the key being inserted
    i: usize,
    /// Slot the key would occupy if placed now
    hole: usize,
    key: u32,
    phase: Phase,
}

impl InsertionSort {
    pub fn new(len: usize) -> Self {
        InsertionSort {
            len,
            i: 1,
            hole: 1,
            key: 0,
            phase: Phase::Pick,
        }
    }
}

impl StepSort for InsertionSort {
    fn next_step(&mut self, values: &mut [u32], stats: &mut SortStats) -> Option<Highlight> {
        loop {
            match self.phase {
                Phase::Pick => {
                    if self.i >= self.len {
                        return None;
                    }
                    self.key = values[self.i];
                    stats.record_accesses(1);
                    self.hole = self.i;
                    self.phase = Phase::Scan;
                    return Some(Highlight::scan(self.i));
                }
                Phase::Scan => {
                    if self.hole == 0 {
                        self.phase = Phase::Place;
                        continue;
                    }
                    let j = self.hole - 1;
                    stats.record_comparison(1);
                    self.phase = if values[j] > self.key {
                        Phase::Shift
                    } else {
                        Phase::Place
                    };
                    return Some(Highlight::compare(self.i, j));
                }
                Phase::Shift => {
                    let j = self.hole - 1;
                    values[self.hole] = values[j];
                    stats.record_accesses(2);
                    self.hole = j;
                    self.phase = Phase::Scan;
                    return Some(Highlight::swap(j, j + 1));
                }
                Phase::Place => {
                    values[self.hole] = self.key;
                    stats.record_accesses(1);
                    let highlight = Highlight::scan(self.hole);
                    self.i += 1;
                    self.phase = Phase::Pick;
                    return Some(highlight);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_input_costs() {
        let mut values = vec![1, 2, 3, 4];
        let mut sorter = InsertionSort::new(values.len());
        let mut stats = SortStats::new();
        let mut steps = 0;
        while sorter.next_step(&mut values, &mut stats).is_some() {
            steps += 1;
        }

        // pick, compare, place for each key
        assert_eq!(steps, 9);
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.array_accesses, 9);
    }

    #[test]
    fn test_key_moves_to_front() {
        let mut values = vec![2, 3, 1];
        let mut sorter = InsertionSort::new(values.len());
        let mut stats = SortStats::new();
        let mut last = None;
        while let Some(h) = sorter.next_step(&mut values, &mut stats) {
            last = Some(h);
        }
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(last, Some(Highlight::scan(0)));
    }
}
