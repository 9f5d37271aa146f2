//! Human-readable completion report printed to stdout after a run.

use crate::{FetchResult, Outcome};
use std::path::Path;
use std::time::Duration;

/// Tallies over a run's results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub new_downloads: usize,
    pub cached: usize,
    pub failed: usize,
}

impl Summary {
    pub fn tally(results: &[FetchResult]) -> Self {
        let mut summary = Summary {
            total: results.len(),
            new_downloads: 0,
            cached: 0,
            failed: 0,
        };
        for result in results {
            match result.outcome {
                Outcome::Downloaded => summary.new_downloads += 1,
                Outcome::Cached => summary.cached += 1,
                Outcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Cached and freshly downloaded combined
    pub fn successful(&self) -> usize {
        self.new_downloads + self.cached
    }
}

/// Print the completion block: elapsed time, totals, the new/cached split,
/// and one line per failed event for manual follow-up.
pub fn print_summary(results: &[FetchResult], elapsed: Duration, output_dir: &Path) {
    let summary = Summary::tally(results);

    println!("\n{}", "=".repeat(60));
    println!("Download Complete!");
    println!("{}", "=".repeat(60));
    println!("Total time: {:.1} seconds", elapsed.as_secs_f64());
    println!("Total events: {}", summary.total);
    println!("Successful: {}", summary.successful());
    println!("  - New downloads: {}", summary.new_downloads);
    println!("  - Already cached: {}", summary.cached);
    println!("Failed: {}", summary.failed);

    if summary.failed > 0 {
        println!("\nFailed downloads:");
        for result in results {
            if let Outcome::Failed { brand, error } = &result.outcome {
                println!("  - {} (ID: {}): {}", brand, result.id, error);
            }
        }
    }

    println!("\nScreenshots saved to: {}", output_dir.display());
}
