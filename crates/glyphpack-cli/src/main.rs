//! Glyphpack CLI - export character atlases as font ROM data
//!
//! Reads a 16x16 grid of 8x8 glyphs from a bitmap and prints it as a C-style
//! array literal or a hex dump, ready to redirect into a firmware build.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use glyphpack_cli::commands::export::{self, ExportFormat};
use glyphpack_cli::config::ExportConfig;

/// Glyphpack - Character Atlas to Font ROM Converter
#[derive(Parser)]
#[command(name = "glyphpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print 2-bit packed rows as a brace literal (8 values per glyph)
    Array {
        /// Atlas image (default: assets/characters.png)
        file: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print bit-plane rows as a brace literal (16 bytes per glyph)
    Planes {
        /// Atlas image (default: assets/characters.png)
        file: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print 2-bit packed rows as hex byte pairs, one line per glyph
    Hex {
        /// Atlas image (default: assets/characters.png)
        file: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (format, file, output) = match cli.command {
        Commands::Array { file, output } => (ExportFormat::Array, file, output),
        Commands::Planes { file, output } => (ExportFormat::Planes, file, output),
        Commands::Hex { file, output } => (ExportFormat::Hex, file, output),
    };
    let config = ExportConfig::from_args(file.as_deref(), output.as_deref());

    match export::run(format, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
