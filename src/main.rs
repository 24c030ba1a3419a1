use clap::Parser;
use easter_races::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => cli::run::run(args),
    }
}
