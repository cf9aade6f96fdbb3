//! Command-line interface for running an interactive puzzle session

use crate::channel::permutation::ChannelTables;
use crate::io::configuration::{DEFAULT_OUTPUT_DIR, DEFAULT_PREVIEW_SIZE};
use crate::io::console::Console;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::PreviewViewer;
use crate::session::machine::{PuzzleStateMachine, SessionSummary};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chromacube")]
#[command(
    author,
    version,
    about = "Compose rotated channel-permutation puzzles behind a payment gate"
)]
/// Command-line arguments for a puzzle session
pub struct Cli {
    /// Random seed for reproducible tables (drawn from the OS when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory receiving PNG previews
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Edge length of exported previews in pixels
    #[arg(short = 'p', long, default_value_t = DEFAULT_PREVIEW_SIZE)]
    pub preview_size: u32,

    /// Suppress preview path reports
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if preview paths should be reported
    pub const fn should_report_previews(&self) -> bool {
        !self.quiet
    }

    /// Random source for table generation
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Wires the terminal, preview export and state machine together
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Viewer exporting into the configured directory and reporting to `writer`
    pub fn preview_viewer<W: Write>(&self, writer: W) -> PreviewViewer<W> {
        PreviewViewer::new(
            self.cli.output.clone(),
            self.cli.preview_size,
            writer,
            self.cli.should_report_previews(),
        )
    }

    /// Generate tables and run one session on stdin/stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, table generation fails,
    /// the terminal closes early or a preview cannot be written
    pub fn run(&self) -> Result<SessionSummary> {
        if self.cli.preview_size == 0 {
            return Err(invalid_parameter(
                "preview-size",
                &self.cli.preview_size,
                &"must be at least one pixel",
            ));
        }

        let mut rng = self.cli.rng();
        let tables = ChannelTables::generate(&mut rng)?;
        let mut machine = PuzzleStateMachine::new(tables);

        let stdin = std::io::stdin();
        let mut console = Console::new(stdin.lock(), std::io::stdout());
        let mut viewer = self.preview_viewer(std::io::stdout());

        machine.run(&mut console, &mut viewer)
    }
}
