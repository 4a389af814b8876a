//! Heapsort: build a max-heap, then repeatedly move the root behind the heap

use super::highlight::Highlight;
use super::stats::SortStats;
use super::StepSort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiftPhase {
    Left,
    Right,
    Settle,
}

/// Sift-down of `root` within `values[..end]`
#[derive(Debug, Clone)]
struct SiftDown {
    root: usize,
    end: usize,
    largest: usize,
    phase: SiftPhase,
}

impl SiftDown {
    fn new(root: usize, end: usize) -> Self {
        SiftDown {
            root,
            end,
            largest: root,
            phase: SiftPhase::Left,
        }
    }

    /// Next step of the sift, or `None` once the root is in place
    fn step(&mut self, values: &mut [u32], stats: &mut SortStats) -> Option<Highlight> {
        loop {
            match self.phase {
                SiftPhase::Left => {
                    let left = 2 * self.root + 1;
                    self.largest = self.root;
                    self.phase = SiftPhase::Right;
                    if left < self.end {
                        stats.record_comparison(2);
                        if values[left] > values[self.largest] {
                            self.largest = left;
                        }
                        return Some(Highlight::compare(self.root, left));
                    }
                }
                SiftPhase::Right => {
                    let right = 2 * self.root + 2;
                    self.phase = SiftPhase::Settle;
                    if right < self.end {
                        stats.record_comparison(2);
                        let highlight = Highlight::compare(self.largest, right);
                        if values[right] > values[self.largest] {
                            self.largest = right;
                        }
                        return Some(highlight);
                    }
                }
                SiftPhase::Settle => {
                    if self.largest == self.root {
                        return None;
                    }
                    values.swap(self.root, self.largest);
                    stats.record_swap();
                    let highlight = Highlight::swap(self.root, self.largest);
                    self.root = self.largest;
                    self.phase = SiftPhase::Left;
                    return Some(highlight);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Roots `remaining - 1 ..= 0` still need sifting
    Build { remaining: usize },
    /// `values[..=end]` is a heap; `values[end + 1..]` is sorted
    Extract { end: usize },
    Done,
}

/// Heapsort driven one step at a time
#[derive(Debug, Clone)]
pub struct HeapSort {
    len: usize,
    stage: Stage,
    sift: Option<SiftDown>,
}

impl HeapSort {
    pub fn new(len: usize) -> Self {
        HeapSort {
            len,
            stage: Stage::Build { remaining: len / 2 },
            sift: None,
        }
    }
}

impl StepSort for HeapSort {
    fn next_step(&mut self, values: &mut [u32], stats: &mut SortStats) -> Option<Highlight> {
        loop {
            if let Some(sift) = self.sift.as_mut() {
                if let Some(highlight) = sift.step(values, stats) {
                    return Some(highlight);
                }
                self.sift = None;
            }

            match self.stage {
                Stage::Build { remaining } => {
                    if remaining > 0 {
                        self.sift = Some(SiftDown::new(remaining - 1, self.len));
                        self.stage = Stage::Build {
                            remaining: remaining - 1,
                        };
                    } else {
                        self.stage = Stage::Extract {
                            end: self.len.saturating_sub(1),
                        };
                    }
                }
                Stage::Extract { end } => {
                    if end == 0 {
                        self.stage = Stage::Done;
                        continue;
                    }
                    values.swap(0, end);
                    stats.record_swap();
                    self.sift = Some(SiftDown::new(0, end));
                    self.stage = Stage::Extract { end: end - 1 };
                    return Some(Highlight::swap(0, end));
                }
                Stage::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_phase_produces_max_heap() {
        let mut values = vec![1, 2, 3, 4, 5, 6, 7];
        let mut sorter = HeapSort::new(values.len());
        let mut stats = SortStats::new();

        // Step until the first root extraction swap shows up
        while let Some(h) = sorter.next_step(&mut values, &mut stats) {
            if h.swap_a == Some(0) && h.swap_b == Some(values.len() - 1) {
                break;
            }
        }
        assert_eq!(values[values.len() - 1], 7);
    }

    #[test]
    fn test_sift_reports_real_highlights() {
        let mut values = vec![1, 3, 2];
        let mut sorter = HeapSort::new(values.len());
        let mut stats = SortStats::new();

        assert_eq!(
            sorter.next_step(&mut values, &mut stats),
            Some(Highlight::compare(0, 1))
        );
        assert_eq!(
            sorter.next_step(&mut values, &mut stats),
            Some(Highlight::compare(1, 2))
        );
        assert_eq!(
            sorter.next_step(&mut values, &mut stats),
            Some(Highlight::swap(0, 1))
        );
        assert_eq!(values, vec![3, 1, 2]);
    }
}
