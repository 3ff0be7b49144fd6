mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dnacode_codec::Conversion;

/// Dnacode: a text / binary / DNA converter
///
/// Converts data among human-readable text, 8-bit binary strings and a
/// four-symbol DNA alphabet (A/T/G/C), one nitrogen base per 2-bit group.
#[derive(Parser, Debug)]
#[command(name = "dnacode")]
#[command(author, version, about = "Converts between text, binary and DNA sequences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a payload with the selected mode.
    ///
    /// Reads the payload from the command line, a file, or stdin, and writes
    /// the converted result to stdout or a file. Conversion failures are
    /// reported in the output as "Error: <message>"; the process still
    /// exits successfully.
    Convert {
        /// Conversion mode (see `dnacode modes`)
        #[arg(short, long)]
        mode: Conversion,

        /// Payload to convert (stdin is read if neither DATA nor --input is given)
        data: Option<String>,

        /// Read the payload from a file
        #[arg(short, long, conflicts_with = "data")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (text, json)
        ///
        /// The json format echoes the mode and the original payload
        /// alongside the result.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List available conversion modes.
    Modes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            mode,
            data,
            input,
            output,
            format,
        } => {
            commands::convert::convert_data(mode, data, input.as_ref(), output.as_ref(), &format)?;
        }
        Commands::Modes => {
            commands::modes::list_modes();
        }
    }

    Ok(())
}
