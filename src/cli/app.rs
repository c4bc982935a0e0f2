//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use swiftguard::config::ServiceConfig;
use swiftguard::core::models::MessageKind;
use swiftguard::output::OutputMode;

/// swiftguard - MT103 validation and compliance gate
#[derive(Parser, Debug)]
#[command(
    name = "swiftguard",
    version,
    about = "MT103 validation and compliance gate",
    long_about = "Parse SWIFT MT103 payment instructions, validate them against a field schema,\n\
                  and screen them for duplicate references and sanctioned jurisdictions."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./swiftguard.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a message from a file, or stdin when omitted or "-"
    Validate {
        /// Message file
        input: Option<String>,

        /// Submission time (RFC 3339) used for business-hours rules
        #[arg(long)]
        at: Option<String>,
    },

    /// Serve POST/GET /swift over HTTP
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate a sample message: valid, invalid or sanctioned
    Generate {
        /// Message kind
        #[arg(default_value = "valid")]
        kind: MessageKind,
    },

    /// Print the effective field schema
    Schema,

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

    let config = ServiceConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Validate { input, at }) => {
            commands::validate(&config, input.as_deref(), at.as_deref(), output_mode)
        },
        Some(Command::Serve { host, port }) => commands::serve(&config, host.as_deref(), port),
        Some(Command::Generate { kind }) => commands::generate(&config, kind, output_mode),
        Some(Command::Schema) => commands::schema(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": swiftguard::VERSION
                    })
                );
            } else {
                println!("swiftguard v{}", swiftguard::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": swiftguard::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("swiftguard v{}", swiftguard::VERSION);
                println!("\nRun 'swiftguard --help' for usage");
                println!("Run 'swiftguard generate valid | swiftguard validate' to try it");
            }
            Ok(())
        },
    }
}
