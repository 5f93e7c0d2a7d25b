//! # OxiHuff Core
//!
//! Core components for the OxiHuff Huffman codec.
//!
//! - [`bitstream`]: Growable MSB-first bit sequence for codewords and messages
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Shell                                               │
//! │     oxihuff CLI: input line, tables, hex dumps         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequencies, min-heap, tree, codes, encode/decode  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     Bitstream, HuffError                               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::Bitstream;
//!
//! let bits: Bitstream = "0110".parse().unwrap();
//! assert_eq!(bits.len(), 4);
//! assert_eq!(bits.to_hex(), "06");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

pub use bitstream::{Bits, Bitstream};
pub use error::{HuffError, Result};
