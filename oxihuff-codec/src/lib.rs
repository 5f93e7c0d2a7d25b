//! # OxiHuff Codec: Huffman Coding for a Single String
//!
//! This crate builds a Huffman prefix code for the byte distribution of one
//! input, encodes the input into a bitstream and decodes it back.
//!
//! ## Pipeline
//!
//! ```text
//! input ─► count_frequencies ─► build_tree ─► generate_codes ─► encode ─► decode
//!            FrequencyTable      HuffmanTree     CodeTable       Bitstream   bytes
//! ```
//!
//! Tree construction uses a fixed-capacity binary min-heap. Equal weights are
//! resolved in favour of the node inserted first, and the first node taken
//! in each merge becomes the left (`0`) child, so codes are reproducible.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_codec::{build_tree, count_frequencies, decode, encode, generate_codes};
//!
//! let input = b"aaaabbbcc";
//! let freq = count_frequencies(input);
//! let tree = build_tree(&freq).unwrap();
//! let codes = generate_codes(&tree);
//!
//! let bits = encode(input, &codes).unwrap();
//! assert_eq!(bits.len(), 14);
//!
//! let decoded = decode(&bits, &tree).unwrap();
//! assert_eq!(decoded, input);
//! ```
//!
//! The whole pipeline, with validation and round-trip verification, is
//! available through [`HuffmanCodec`]:
//!
//! ```rust
//! use oxihuff_codec::HuffmanCodec;
//!
//! let report = HuffmanCodec::default().run(b"abracadabra").unwrap();
//! assert!(report.verified);
//! assert!(report.stats.savings_percent() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codes;
mod config;
mod decode;
mod encode;
mod frequency;
mod heap;
mod stats;
mod tree;

pub use codes::CodeTable;
pub use config::{CodecConfig, DEFAULT_MAX_INPUT_LEN, MAX_QUEUE_NODES, MAX_SYMBOLS};
pub use frequency::FrequencyTable;
pub use heap::{PriorityQueue, Weighted};
pub use oxihuff_core::{Bitstream, HuffError, Result};
pub use stats::CompressionStats;
pub use tree::{HuffmanTree, Node, symbol_label};

use log::debug;

/// Count the occurrences of every byte of `text`.
pub fn count_frequencies(text: &[u8]) -> FrequencyTable {
    FrequencyTable::count(text)
}

/// Build the Huffman tree for `freq`.
///
/// The returned tree owns every node; pass it to [`release_tree`] (or simply
/// drop it) when done.
pub fn build_tree(freq: &FrequencyTable) -> Result<HuffmanTree> {
    HuffmanTree::build(freq)
}

/// Assign a code to every symbol of `tree`.
pub fn generate_codes(tree: &HuffmanTree) -> CodeTable {
    CodeTable::generate(tree)
}

/// Encode `text` with `codes`.
pub fn encode(text: &[u8], codes: &CodeTable) -> Result<Bitstream> {
    encode::encode(text, codes)
}

/// Decode `bits` by walking `tree`.
pub fn decode(bits: &Bitstream, tree: &HuffmanTree) -> Result<Vec<u8>> {
    decode::decode(bits, tree)
}

/// Release a tree and all of its nodes.
pub fn release_tree(tree: HuffmanTree) {
    drop(tree);
}

/// Everything produced by one run of the pipeline.
#[derive(Debug, Clone)]
pub struct CodecReport {
    /// The validated input.
    pub input: Vec<u8>,
    /// Byte frequencies of the input.
    pub frequencies: FrequencyTable,
    /// The Huffman tree.
    pub tree: HuffmanTree,
    /// Code for every present symbol.
    pub codes: CodeTable,
    /// The encoded input.
    pub bitstream: Bitstream,
    /// The decoded bitstream (empty when verification is disabled).
    pub decoded: Vec<u8>,
    /// Whether the decoded bitstream matched the input.
    pub verified: bool,
    /// Size figures.
    pub stats: CompressionStats,
}

/// The full count, build, generate, encode and verify pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Run the pipeline on `input`.
    ///
    /// Empty or over-long input is rejected before any tree is built. When
    /// verification is enabled a decode that does not reproduce the input
    /// fails with [`HuffError::RoundTripMismatch`].
    pub fn run(&self, input: &[u8]) -> Result<CodecReport> {
        self.config.validate_input(input)?;

        let frequencies = count_frequencies(input);
        debug!(
            "counted {} bytes, {} distinct symbols",
            frequencies.total(),
            frequencies.distinct()
        );

        let tree = HuffmanTree::build_with_capacity(&frequencies, self.config.queue_capacity)?;
        let codes = generate_codes(&tree);
        let bitstream = encode(input, &codes)?;

        let (decoded, verified) = if self.config.verify {
            let decoded = decode(&bitstream, &tree)?;
            if let Some(position) = first_mismatch(input, &decoded) {
                return Err(HuffError::round_trip_mismatch(position));
            }
            (decoded, true)
        } else {
            (Vec::new(), false)
        };

        let stats = CompressionStats::new(
            input.len(),
            bitstream.len(),
            frequencies.entropy_bits(),
        );

        Ok(CodecReport {
            input: input.to_vec(),
            frequencies,
            tree,
            codes,
            bitstream,
            decoded,
            verified,
            stats,
        })
    }

    /// Build a tree for `input` and decode an arbitrary bitstream with it.
    pub fn decode_with(&self, input: &[u8], bits: &Bitstream) -> Result<Vec<u8>> {
        self.config.validate_input(input)?;
        let frequencies = count_frequencies(input);
        let tree = HuffmanTree::build_with_capacity(&frequencies, self.config.queue_capacity)?;
        decode(bits, &tree)
    }
}

fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    match a.iter().zip(b).position(|(x, y)| x != y) {
        Some(position) => Some(position),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}
