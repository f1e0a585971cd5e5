//! CLI argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How the guide is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Full-screen terminal browser
    Interactive,
    /// Plain text on stdout
    Text,
    /// JSON on stdout
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "activity-guide",
    version,
    about = "Civil construction activity guide, organized by construction phase",
    after_help = "Examples:\n  \
        activity-guide                                   # Browse the built-in guide\n  \
        activity-guide --phase \"Roofing Phase\" --print   # Print one phase\n  \
        activity-guide --data site.json --json           # Export a custom dataset"
)]
pub struct Args {
    #[arg(long, value_name = "PATH", help = "Activity data file (JSON); defaults to the built-in guide")]
    pub data: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Config file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "NAME", help = "Start with a single phase selected")]
    pub phase: Option<String>,

    #[arg(long, help = "Reject data with duplicate phase or category names")]
    pub strict: bool,

    #[arg(long, conflicts_with = "json", help = "Print the guide as plain text and exit")]
    pub print: bool,

    #[arg(long, help = "Print the visible phases as JSON and exit")]
    pub json: bool,

    #[arg(long, value_name = "PATH", help = "Append log output to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v debug, -vv trace)")]
    pub verbose: u8,
}

impl Args {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.print {
            OutputMode::Text
        } else {
            OutputMode::Interactive
        }
    }
}
