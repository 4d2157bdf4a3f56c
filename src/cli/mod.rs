//! CLI interface for Jingle

use clap::{Parser, Subcommand};
use jingle::Sound;
use std::path::PathBuf;

/// Procedural quiz sound effects as WAV data URIs
#[derive(Parser)]
#[command(name = "jingle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one sound to a WAV file
    Render {
        /// Sound to render (correct, incorrect, click, background_music)
        sound: Sound,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the data URI for a sound
    Uri {
        /// Sound to encode
        sound: Sound,

        /// Print a JSON object instead of the bare URI
        #[arg(long)]
        json: bool,
    },

    /// Export the configured sounds to a directory
    Export {
        /// Configuration file path
        #[arg(short, long, default_value = "jingle.yaml")]
        config: PathBuf,
    },

    /// Describe a WAV file or a file holding a data URI
    Inspect {
        /// File to inspect
        input: PathBuf,
    },

    /// List the available sounds
    List,

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "jingle.yaml")]
        config: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}
