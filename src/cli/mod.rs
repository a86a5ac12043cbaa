use clap::{Parser, Subcommand};

mod report;

pub use report::ReportArgs;

/// Terminal product revenue tracker
#[derive(Parser)]
#[command(name = "revtrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print the revenue table once and exit
    Report(ReportArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None | Some(Commands::Tui) => crate::tui::run(),
            Some(Commands::Report(args)) => args.run(),
        }
    }
}
