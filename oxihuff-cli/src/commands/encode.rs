//! Encode command implementation.

use crate::utils::{CodeJson, ascii_hex, code_rows, display_text, print_code_table};
use oxihuff_codec::{CodecReport, HuffmanCodec};
use serde::Serialize;

/// JSON output for compression statistics.
#[derive(Debug, Serialize)]
struct StatsJson {
    original_bits: usize,
    encoded_bits: usize,
    encoded_bytes: usize,
    savings_percent: f64,
    bits_per_symbol: f64,
    entropy_bits: f64,
    entropy_bound_bits: f64,
}

/// JSON output for a full encode run.
#[derive(Debug, Serialize)]
struct EncodeJson {
    input: String,
    length: usize,
    ascii_hex: String,
    bitstream: String,
    huffman_hex: String,
    stats: StatsJson,
    codes: Vec<CodeJson>,
    decoded: String,
    matches: bool,
}

impl EncodeJson {
    fn from_report(report: &CodecReport) -> Self {
        let stats = &report.stats;
        Self {
            input: display_text(&report.input),
            length: report.input.len(),
            ascii_hex: ascii_hex(&report.input),
            bitstream: report.bitstream.to_string(),
            huffman_hex: report.bitstream.to_hex(),
            stats: StatsJson {
                original_bits: stats.original_bits(),
                encoded_bits: stats.encoded_bits,
                encoded_bytes: stats.encoded_bytes(),
                savings_percent: stats.savings_percent(),
                bits_per_symbol: stats.bits_per_symbol(),
                entropy_bits: stats.entropy_bits,
                entropy_bound_bits: stats.entropy_bound_bits(),
            },
            codes: code_rows(&report.codes, &report.frequencies),
            decoded: display_text(&report.decoded),
            matches: report.verified,
        }
    }
}

pub fn cmd_encode(
    codec: &HuffmanCodec,
    input: &[u8],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = codec.run(input)?;

    if json {
        let json_output = serde_json::to_string_pretty(&EncodeJson::from_report(&report))?;
        println!("{}", json_output);
        return Ok(());
    }

    let stats = &report.stats;

    println!("Original text: \"{}\"", display_text(&report.input));
    println!("Original length: {} bytes", report.input.len());
    println!();
    println!("Hex representation (ASCII):");
    println!("{}", ascii_hex(&report.input));
    println!();
    println!("Compressed representation (Huffman):");
    println!("Bitstream: {}", report.bitstream);
    println!("Hex dump: {}", report.bitstream.to_hex());
    println!();
    println!("Compression statistics:");
    println!("  Original bits: {}", stats.original_bits());
    println!("  Compressed bits: {}", stats.encoded_bits);
    println!("  Savings: {:.2}%", stats.savings_percent());
    println!("  Compressed size: {} bytes", stats.encoded_bytes());
    println!(
        "  Average code length: {:.3} bits/symbol (entropy {:.3})",
        stats.bits_per_symbol(),
        stats.entropy_bits
    );
    println!("  Entropy bound: {:.2} bits", stats.entropy_bound_bits());
    println!();
    print_code_table(&report.codes, &report.frequencies);

    if report.verified {
        println!();
        println!("Decoded: \"{}\"", display_text(&report.decoded));
        println!("Matches original: yes");
    }

    Ok(())
}
