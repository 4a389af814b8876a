//! Selection sort: find the minimum of the unsorted suffix, swap it into place

use super::highlight::Highlight;
use super::stats::SortStats;
use super::StepSort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scan,
    NewMinimum,
    Finish,
}

#[derive(Debug, Clone)]
pub struct SelectionSort {
    len: usize,
    i: usize,
    j: usize,
    min: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new(len: usize) -> Self {
        SelectionSort {
            len,
            i: 0,
            j: 1,
            min: 0,
            phase: Phase::Scan,
        }
    }

    fn advance(&mut self) {
        self.i += 1;
        self.j = self.i + 1;
        self.min = self.i;
        self.phase = Phase::Scan;
    }
}

impl StepSort for SelectionSort {
    fn next_step(&mut self, values: &mut [u32], stats: &mut SortStats) -> Option<Highlight> {
        loop {
            if self.i >= self.len {
                return None;
            }

            match self.phase {
                Phase::Scan => {
                    if self.j >= self.len {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    stats.record_comparison(2);
                    let highlight = Highlight::compare(self.min, self.j);
                    if values[self.j] < values[self.min] {
                        self.min = self.j;
                        self.phase = Phase::NewMinimum;
                    } else {
                        self.j += 1;
                    }
                    return Some(highlight);
                }
                Phase::NewMinimum => {
                    self.j += 1;
                    self.phase = Phase::Scan;
                    return Some(Highlight::scan(self.min));
                }
                Phase::Finish => {
                    let (i, min) = (self.i, self.min);
                    self.advance();
                    if min != i {
                        values.swap(i, min);
                        stats.record_swap();
                        return Some(Highlight::swap(i, min));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_input_never_swaps() {
        let mut values = vec![1, 2, 3, 4];
        let mut sorter = SelectionSort::new(values.len());
        let mut stats = SortStats::new();
        let mut steps = 0;
        while let Some(h) = sorter.next_step(&mut values, &mut stats) {
            assert!(h.swap_a.is_none());
            steps += 1;
        }

        assert_eq!(steps, 6);
        assert_eq!(stats.comparisons, 6);
        assert_eq!(stats.array_accesses, 12);
    }

    #[test]
    fn test_new_minimum_is_announced() {
        let mut values = vec![2, 1];
        let mut sorter = SelectionSort::new(values.len());
        let mut stats = SortStats::new();
        assert_eq!(
            sorter.next_step(&mut values, &mut stats),
            Some(Highlight::compare(0, 1))
        );
        assert_eq!(
            sorter.next_step(&mut values, &mut stats),
            Some(Highlight::scan(1))
        );
        assert_eq!(
            sorter.next_step(&mut values, &mut stats),
            Some(Highlight::swap(0, 1))
        );
        assert_eq!(values, vec![1, 2]);
        assert_eq!(sorter.next_step(&mut values, &mut stats), None);
    }
}
