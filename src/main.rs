//! CLI entry point for an interactive channel-permutation puzzle session

use chromacube::io::cli::{Cli, SessionRunner};
use clap::Parser;

fn main() -> chromacube::Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let summary = SessionRunner::new(cli).run()?;

    // Allow print for the closing session report
    #[allow(clippy::print_stderr)]
    if !quiet {
        eprintln!(
            "Session finished: {} cycle(s), {} reset(s)",
            summary.cycles, summary.resets
        );
    }
    Ok(())
}
