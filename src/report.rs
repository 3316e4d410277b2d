//! Console summary for clear runs.

use crate::cleaner::{ClearOptions, ClearReport};
use colored::Colorize;
use humansize::{format_size, BINARY};

/// Print the end-of-run summary. Per-entry failures have already been logged
/// where they happened; they are not totalled here.
pub fn print_summary(report: &ClearReport, options: ClearOptions) {
    if options.delete {
        if options.calculate_sizes {
            println!(
                "Reclaimed: {}",
                format_size(report.reclaimed_bytes, BINARY).bold()
            );
        }
        println!("{}", "Working directory cleared.".green());
    } else {
        if options.calculate_sizes {
            println!(
                "Would reclaim: {}",
                format_size(report.reclaimed_bytes, BINARY).bold()
            );
        }
        println!(
            "Dry run: {} entries would be removed. Re-run with --delete to remove them.",
            report.entries.len()
        );
    }
}
