mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::PackageReadme {
            dir,
            force,
            dry_run,
            template_dir,
            commands_json,
        } => commands::package_readme::run(dir, force, dry_run, template_dir, commands_json),
    }
}
