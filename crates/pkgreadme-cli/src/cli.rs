use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pkgreadme",
    about = "Generate a README for a package from its manifest and reusable templates",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a README.md from the package's composer.json
    PackageReadme {
        /// Directory path to an existing package to generate a readme for
        dir: PathBuf,

        /// Overwrite the readme if it already exists
        #[arg(long)]
        force: bool,

        /// Print the generated readme instead of writing it
        #[arg(long)]
        dry_run: bool,

        /// Directory of templates overriding the built-in ones
        #[arg(long, value_name = "DIR")]
        template_dir: Option<PathBuf>,

        /// Read the command tree from a saved JSON dump instead of the host CLI
        #[arg(long, value_name = "FILE")]
        commands_json: Option<PathBuf>,
    },
}
