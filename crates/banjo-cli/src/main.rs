// crates/banjo-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod task;

#[derive(Parser)]
#[command(name = "banjo-cli")]
#[command(about = "Change-gear calculator for lathe thread cutting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lathe configuration tools (init/show the JSON config file)
    Config(cmd::config::ConfigArgs),

    /// Enumerate all valid gear combinations for a configuration
    Combos(cmd::combos::CombosArgs),

    /// Evaluate a single A,B,C,D combination against a leadscrew
    Pitch(cmd::pitch::PitchArgs),

    /// Pick the best combination for one target pitch
    Best(cmd::best::BestArgs),

    /// Jointly solve a batch request (one best setup per target)
    Batch(cmd::batch::BatchArgs),

    /// Regenerate a favorites file against the current configuration
    Regen(cmd::regen::RegenArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Config(args) => cmd::config::run(args),
        Commands::Combos(args) => cmd::combos::run(args),
        Commands::Pitch(args) => cmd::pitch::run(args),
        Commands::Best(args) => cmd::best::run(args),
        Commands::Batch(args) => cmd::batch::run(args),
        Commands::Regen(args) => cmd::regen::run(args),
    }
}
