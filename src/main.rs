use anyhow::Result;
use clap::Parser;
use clearout::{clear_workspace, config, report, ClearOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Empty a working directory while keeping one protected subdirectory in place",
    long_about = None
)]
struct Args {
    /// Directory to clear (defaults to the configured root)
    root: Option<PathBuf>,

    /// Subdirectory to keep in place; its contents are still cleared
    #[arg(long, short)]
    keep: Option<String>,

    /// Delete the listed entries instead of previewing them
    #[arg(long, short)]
    delete: bool,

    /// Show each entry as it is processed
    #[arg(long, short)]
    verbose: bool,

    /// Calculate and report the size of removed entries
    #[arg(long, short)]
    sizes: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = config::load_defaults()?;
    let root = args.root.unwrap_or(defaults.root);
    let keep = args.keep.unwrap_or(defaults.keep);

    let options = ClearOptions {
        delete: args.delete,
        verbose: args.verbose,
        calculate_sizes: args.sizes,
    };

    // Spinner for deletion passes; preview and verbose modes print their own
    // per-entry lines instead
    let progress = (options.delete && !options.verbose).then(|| {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        bar.set_message(format!("Clearing {}...", root.display()));
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar
    });

    let result = clear_workspace(&root, &keep, options);

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    report::print_summary(&result?, options);

    Ok(())
}
