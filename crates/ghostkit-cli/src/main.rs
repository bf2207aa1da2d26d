//! ghostkit CLI — ghost SDK generator for Algorand ARC-56 contracts.
//!
//! `ghostkit build a.arc56.json [b.arc56.json ...]` writes `<Name>SDK.ts` next
//! to each spec. Each file is built independently; a failing file is reported
//! and the batch continues.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};

use ghostkit_core::config::{ClientSourceKind, CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "ghostkit",
    about = "Ghost SDK generator for Algorand ARC-56 contracts",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to ghostkit.config.json (optional; defaults apply when absent)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a ghost SDK for each ARC-56 spec
    Build {
        /// ARC-56 spec files (`*.arc56.json`)
        specs: Vec<PathBuf>,

        /// Directory with index.ts.template and method.ts.template
        #[arg(long)]
        templates_dir: Option<PathBuf>,

        /// Where the typed client comes from
        #[arg(long, value_enum)]
        client: Option<ClientChoice>,

        /// Pre-generated typed client file to inline
        #[arg(long)]
        client_file: Option<PathBuf>,
    },

    /// Show usage
    Help {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        _rest: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ClientChoice {
    Auto,
    Artifact,
    Algokit,
}

impl ClientChoice {
    pub fn kind(&self) -> ClientSourceKind {
        match self {
            Self::Auto => ClientSourceKind::Auto,
            Self::Artifact => ClientSourceKind::Artifact,
            Self::Algokit => ClientSourceKind::Algokit,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp => {
                    output::print_usage();
                    ExitCode::SUCCESS
                }
                ErrorKind::DisplayVersion => {
                    e.print()?;
                    ExitCode::SUCCESS
                }
                _ => {
                    e.print()?;
                    output::print_usage();
                    ExitCode::FAILURE
                }
            });
        }
    };

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Build {
            specs,
            templates_dir,
            client,
            client_file,
        }) if !specs.is_empty() => {
            let overrides = commands::build::Overrides {
                templates_dir,
                client,
                client_file,
            };
            commands::build::run(&cli.config, &specs, overrides).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Help { .. }) => {
            output::print_usage();
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            output::print_usage();
            Ok(ExitCode::FAILURE)
        }
    }
}
