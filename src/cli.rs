use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Splashpack - bundle a web game into one HTML file with a loading screen
#[derive(Parser, Debug)]
#[command(name = "splashpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Config file (defaults to <DIR>/splashpack.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle a game directory into one self-contained HTML file
    Bundle {
        /// Game directory
        dir: PathBuf,

        /// Entry HTML file name (defaults to index.html)
        #[arg(short, long)]
        entry: Option<String>,

        /// Use a saved overlay JSON file instead of generating one
        #[arg(long)]
        overlay: Option<PathBuf>,

        /// Output file (defaults to output.file_name from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bundle but don't write the output
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a loading-screen overlay and save it as JSON
    Generate {
        /// Game directory
        dir: PathBuf,

        /// Entry HTML file name (defaults to index.html)
        #[arg(short, long)]
        entry: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "overlay.json")]
        output: PathBuf,
    },

    /// Render an overlay JSON file as a standalone preview page
    Preview {
        /// Overlay JSON file
        overlay: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "overlay-preview.html")]
        output: PathBuf,
    },

    /// List the files of a game directory as they would be registered
    Files {
        /// Game directory
        dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}
