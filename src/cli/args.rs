use crate::core::Operation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calc_text")]
#[command(about = "Integer calculator and string processing utilities")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a sample run of every operation
    Demo {
        /// JSON file overriding the sample inputs
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply an integer operation to two operands
    Calc {
        /// Operation to apply
        operation: Operation,

        /// Left operand
        #[arg(allow_hyphen_values = true)]
        a: i64,

        /// Right operand
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },

    /// Convert text to uppercase
    Upper {
        text: String,
    },

    /// Reverse text by code point
    Reverse {
        text: String,
    },

    /// Trim, drop blank items and uppercase the rest
    ProcessList {
        #[arg(allow_hyphen_values = true)]
        items: Vec<String>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
