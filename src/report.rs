//! Headless comparison of every algorithm on the same input

use crate::sort::stats::group_thousands;
use crate::sort::{Algorithm, Session, SortStats};

/// Totals for one algorithm run to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub steps: u64,
    pub stats: SortStats,
    pub sorted: bool,
}

/// Sort a copy of `values` with each algorithm in switch order
pub fn run_report(values: &[u32]) -> Vec<AlgorithmReport> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut session = Session::new(algorithm, values.to_vec());
            let steps = session.run_to_end();
            AlgorithmReport {
                algorithm,
                steps,
                stats: *session.stats(),
                sorted: session.values().windows(2).all(|w| w[0] <= w[1]),
            }
        })
        .collect()
}

/// Render reports as an aligned text table
pub fn format_report(item_count: usize, reports: &[AlgorithmReport]) -> String {
    let mut out = format!("Sorting {} items\n\n", item_count);
    out.push_str(&format!(
        "{:<16} {:>12} {:>14} {:>16}  {}\n",
        "Algorithm", "Steps", "Comparisons", "Array accesses", "Sorted"
    ));

    for report in reports {
        out.push_str(&format!(
            "{:<16} {:>12} {:>14} {:>16}  {}\n",
            report.algorithm.name(),
            group_thousands(report.steps),
            group_thousands(report.stats.comparisons),
            group_thousands(report.stats.array_accesses),
            if report.sorted { "yes" } else { "NO" }
        ));
    }
    out
}
