//! OxiHuff CLI - Huffman coding for a single line of text
//!
//! Builds a Huffman code for the input's byte distribution, encodes the
//! input and verifies the result by decoding it again.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_decode, cmd_encode, cmd_table, cmd_tree};
use oxihuff_codec::{CodecConfig, DEFAULT_MAX_INPUT_LEN, HuffmanCodec};
use utils::read_input;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Huffman codec for a single line of text")]
#[command(long_about = "
OxiHuff builds a Huffman prefix code for one line of input, encodes the
line into a bitstream and decodes it back to verify the round trip.
When TEXT is omitted one line is read from standard input.

Examples:
  oxihuff encode \"abracadabra\"
  echo hello | oxihuff encode
  oxihuff table \"aaaabbbcc\" --json
  oxihuff tree \"mississippi\"
  oxihuff decode 0111010 \"aaaabbbcc\"
")]
struct Cli {
    /// Maximum accepted input length in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    max_len: usize,

    /// Show verbose output (pipeline diagnostics on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a line and show the full report
    #[command(alias = "e")]
    Encode {
        /// Text to encode (read from stdin if omitted)
        text: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show the frequency and code table
    #[command(alias = "t")]
    Table {
        /// Text to build the code for (read from stdin if omitted)
        text: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show the Huffman tree structure
    Tree {
        /// Text to build the tree for (read from stdin if omitted)
        text: Option<String>,
    },

    /// Decode a bit string with the code built from a text
    #[command(alias = "d")]
    Decode {
        /// Bits to decode, e.g. 0110
        bits: String,

        /// Text to build the code from (read from stdin if omitted)
        text: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let codec = HuffmanCodec::new(CodecConfig::new(cli.max_len));

    match cli.command {
        Commands::Encode { text, json } => {
            let input = read_input(text.as_deref())?;
            cmd_encode(&codec, &input, json)
        }
        Commands::Table { text, json } => {
            let input = read_input(text.as_deref())?;
            cmd_table(&codec, &input, json)
        }
        Commands::Tree { text } => {
            let input = read_input(text.as_deref())?;
            cmd_tree(&codec, &input)
        }
        Commands::Decode { bits, text } => {
            let input = read_input(text.as_deref())?;
            cmd_decode(&codec, &input, &bits)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
