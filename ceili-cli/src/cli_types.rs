//! CLI type definitions: command enum and global flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ceili_frontend::OutputFormat;

#[derive(Parser)]
#[command(name = "ceili-gen")]
#[command(
    about = "Generate the ceili dance data module for the web front-end",
    long_about = None
)]
pub(crate) struct Cli {
    /// Directory of YAML dance files to use instead of the built-in catalogue
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Commands {
    /// Normalize the catalogue and write the data module
    Generate {
        /// Output file (default: src/data/ceiliDances.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Module format: ts or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List dances grouped by era
    List,

    /// Show aggregate catalogue statistics
    Stats,

    /// Report duplicate ids, unknown prerequisites and prerequisite cycles
    Check {
        /// Exit with an error if any issue is found
        #[arg(long)]
        strict: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate {
            output: None,
            format: None,
        }
    }
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
