use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vibescope_export::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "vibescope")]
#[command(author, version, about = "Sentiment analysis dashboard and batch analyzer")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the dashboard API server
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Classifier config path (YAML); built-in lexicon when omitted
        #[arg(long)]
        classifier_config: Option<PathBuf>,

        /// Maximum classify calls in flight per batch
        #[arg(long, default_value = "8")]
        max_concurrency: usize,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze texts from a file without starting the server
    Analyze {
        /// Input file with one text per line ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Export format (csv or json); prints a summary when omitted
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Directory for exported files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Classifier config path (YAML); built-in lexicon when omitted
        #[arg(long)]
        classifier_config: Option<PathBuf>,

        /// Maximum classify calls in flight
        #[arg(long, default_value = "8")]
        max_concurrency: usize,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
