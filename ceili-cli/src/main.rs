//! ceili-gen CLI
//!
//! Normalizes the ceili dance catalogue and writes the data module the
//! web front-end imports.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let catalog_dir = settings.resolve_catalog_dir(cli.catalog);
    let sources = commands::load_catalogue(catalog_dir.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Generate { output, format } => {
            let format = settings.resolve_format(format);
            let output = settings.resolve_output_path(output, format);
            commands::generate::run_generate(&sources, &output, format)
        }
        Commands::List => {
            commands::list::run_list(&sources);
            Ok(())
        }
        Commands::Stats => {
            commands::stats::run_stats(&sources);
            Ok(())
        }
        Commands::Check { strict } => commands::check::run_check(&sources, strict),
    }
}

/// Install the logger. Info lines print bare so they read as normal
/// program output; `RUST_LOG` overrides the level chosen by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }

    builder.parse_default_env();
    builder.init();
}

/// Log an empty info line.
pub(crate) fn log_blank() {
    log::info!("");
}
