//! Bubble sort with early exit on a pass without swaps

use super::highlight::Highlight;
use super::stats::SortStats;
use super::StepSort;

#[derive(Debug, Clone)]
pub struct BubbleSort {
    len: usize,
    pass: usize,
    j: usize,
    swapped: bool,
    /// Set when the last comparison found `values[j] > values[j + 1]`
    swap_pending: bool,
    done: bool,
}

impl BubbleSort {
    pub fn new(len: usize) -> Self {
        BubbleSort {
            len,
            pass: 0,
            j: 0,
            swapped: false,
            swap_pending: false,
            done: false,
        }
    }
}

impl StepSort for BubbleSort {
    fn next_step(&mut self, values: &mut [u32], stats: &mut SortStats) -> Option<Highlight> {
        if self.done {
            return None;
        }

        if self.swap_pending {
            self.swap_pending = false;
            values.swap(self.j, self.j + 1);
            stats.record_swap();
            self.swapped = true;
            let highlight = Highlight::swap(self.j, self.j + 1);
            self.j += 1;
            return Some(highlight);
        }

        loop {
            if self.pass >= self.len {
                self.done = true;
                return None;
            }

            if self.j + 1 < self.len - self.pass {
                stats.record_comparison(2);
                if values[self.j] > values[self.j + 1] {
                    self.swap_pending = true;
                    return Some(Highlight::compare(self.j, self.j + 1));
                }
                let highlight = Highlight::compare(self.j, self.j + 1);
                self.j += 1;
                return Some(highlight);
            }

            if !self.swapped {
                self.done = true;
                return None;
            }
            self.pass += 1;
            self.j = 0;
            self.swapped = false;
        }
    }
}
