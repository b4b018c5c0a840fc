//! Command-line front end for the portfolio API.
//!
//! # Responsibility
//! - Map subcommands onto `portfolio_api` view functions.
//! - Print every response as pretty JSON on stdout.
//!
//! # Exit codes
//! - 0: response printed
//! - 1: requested project slug not found
//! - 2: output could not be serialized

use clap::{Parser, Subcommand};
use log::info;
use portfolio_api::api::{self, ProjectDetailResponse};
use portfolio_core::{ClipboardError, ClipboardSink};
use serde::Serialize;
use std::process::ExitCode;

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const NOT_FOUND: u8 = 1;
    pub const OUTPUT_ERROR: u8 = 2;
}

/// Portfolio catalog and profile content.
#[derive(Debug, Parser)]
#[command(name = "portfolio", version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "PORTFOLIO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files; logging stays off when omitted.
    #[arg(long, global = true, env = "PORTFOLIO_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List projects after tag filter, search and sort.
    Projects {
        /// Case-insensitive search text.
        #[arg(long, short, default_value = "")]
        query: String,
        /// Stack tag to keep, or `All`.
        #[arg(long, short, default_value = "All")]
        tag: String,
        /// impact, newest or alphabetical.
        #[arg(long, short, default_value = "impact")]
        sort: String,
    },
    /// Show one project by slug.
    Project { slug: String },
    /// Show skill groups, optionally filtered.
    Skills {
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Show one experience section.
    Experience {
        /// professional or volunteering.
        #[arg(long, default_value = "professional")]
        section: String,
    },
    /// Show the home page snapshot.
    Home,
    /// Show contact channels.
    Contact {
        /// Echo the e-mail address to stderr as the copy target.
        #[arg(long)]
        copy: bool,
    },
    /// Print ping and core version.
    Ping,
}

/// Terminal stand-in for a clipboard: writes the copied text to stderr.
struct StderrClipboard;

impl ClipboardSink for StderrClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        eprintln!("{text}");
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref(), cli.log_dir.as_deref());
    ExitCode::from(run(cli.command))
}

fn run(command: Command) -> u8 {
    match command {
        Command::Projects { query, tag, sort } => print_json(&api::project_list(query, tag, sort)),
        Command::Project { slug } => {
            let response = api::project_detail(slug);
            let code = print_json(&response);
            match response {
                ProjectDetailResponse::NotFound { .. } => exit_codes::NOT_FOUND,
                ProjectDetailResponse::Found { .. } => code,
            }
        }
        Command::Skills { query } => print_json(&api::skills_view(query)),
        Command::Experience { section } => print_json(&api::experience_view(section)),
        Command::Home => print_json(&api::home_view()),
        Command::Contact { copy } => {
            if copy {
                print_json(&api::contact_copy_email(&mut StderrClipboard))
            } else {
                print_json(&api::contact_view())
            }
        }
        Command::Ping => {
            println!("portfolio_core ping={}", api::ping());
            println!("portfolio_core version={}", api::core_version());
            exit_codes::SUCCESS
        }
    }
}

fn setup_logging(level: Option<&str>, log_dir: Option<&str>) {
    let Some(log_dir) = log_dir else {
        return;
    };
    let level = level.unwrap_or_else(|| portfolio_core::default_log_level());
    let error = api::init_logging(level.to_string(), log_dir.to_string());
    if error.is_empty() {
        info!("event=cli_start module=cli status=ok");
    } else {
        eprintln!("logging disabled: {error}");
    }
}

fn print_json<T: Serialize>(value: &T) -> u8 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            exit_codes::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to encode response: {err}");
            exit_codes::OUTPUT_ERROR
        }
    }
}
