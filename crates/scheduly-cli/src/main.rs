use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "scheduly-cli", version, about = "Scheduly CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evening planning
    Evening {
        #[command(subcommand)]
        action: commands::evening::EveningAction,
    },
    /// Morning routine
    Morning {
        #[command(subcommand)]
        action: commands::morning::MorningAction,
    },
    /// Today's schedule
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Evening { action } => commands::evening::run(action),
        Commands::Morning { action } => commands::morning::run(action),
        Commands::Day { action } => commands::day::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
