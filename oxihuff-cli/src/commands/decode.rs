//! Decode command implementation.

use crate::utils::{ascii_hex, display_text};
use oxihuff_codec::{Bitstream, HuffmanCodec};

/// Decode a user-supplied bit string with the code built from `input`.
pub fn cmd_decode(
    codec: &HuffmanCodec,
    input: &[u8],
    bits: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let bits = Bitstream::from_bit_str(bits.trim())?;
    let decoded = codec.decode_with(input, &bits)?;

    println!("Bits: {} ({} bits)", bits, bits.len());
    println!("Decoded: \"{}\"", display_text(&decoded));
    println!("Hex: {}", ascii_hex(&decoded));

    Ok(())
}
