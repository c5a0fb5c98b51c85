//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use buildmail::output::OutputMode;

/// buildmail - Decide who hears about a build and what the subject says
#[derive(Parser, Debug)]
#[command(
    name = "buildmail",
    version,
    about = "Recipient routing and subject lines for build notifications",
    long_about = "Compute the recipients and subject line of a build notification.\n\n\
                  Rules declare which groups are notified under which condition,\n\
                  how contributor identities become addresses, and which subject\n\
                  template applies to which build outcome."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute recipients and subject for a build result
    Notify {
        /// Notification rules file (TOML)
        #[arg(short, long, env = "BUILDMAIL_RULES")]
        rules: PathBuf,

        /// Build result file (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        build: PathBuf,
    },

    /// Validate a rules file and show the effective configuration
    Validate {
        /// Notification rules file (TOML)
        #[arg(short, long, env = "BUILDMAIL_RULES")]
        rules: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Notify { rules, build }) => commands::notify(&rules, &build, output_mode),
        Some(Command::Validate { rules }) => commands::validate(&rules, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": buildmail::VERSION
                    })
                );
            } else {
                println!("buildmail v{}", buildmail::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": buildmail::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("buildmail v{}", buildmail::VERSION);
                println!("\nRun 'buildmail --help' for usage");
                println!("Run 'buildmail validate --rules <file>' to check a rules file");
            }
            Ok(())
        },
    }
}
