//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::llm::DEFAULT_SELECTOR;

/// quicknote - Summarize a keyword with a local language model
#[derive(Parser, Debug)]
#[command(name = "quicknote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP summary endpoint
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Summarize a keyword once and print the result
    Summarize {
        /// Topic to summarize
        keyword: String,

        /// Model selector
        #[arg(short, long, default_value = DEFAULT_SELECTOR)]
        model: String,
    },

    /// Insert a summary of a note's title into the note
    Note {
        /// Markdown note; its file name is the keyword
        file: PathBuf,

        /// Model selector
        #[arg(short, long, default_value = DEFAULT_SELECTOR)]
        model: String,
    },

    /// Check that the local inference backend is reachable
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
