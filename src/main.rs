use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;
mod logger;
#[cfg(test)]
mod test_helpers;

#[derive(Parser)]
#[command(name = "genny", about = "A static site generator", version)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: GennyCommand,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file (defaults to the nearest genny.toml)
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file (defaults to the nearest genny.toml)
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Only report what would be deleted
    #[arg(short = 'n', long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum GennyCommand {
    /// Build the site
    Build(BuildArgs),

    /// Delete the generated site
    Clean(CleanArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    match args.command {
        GennyCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        GennyCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}
