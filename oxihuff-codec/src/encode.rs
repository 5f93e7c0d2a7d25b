//! Encoding: input bytes to a bitstream.

use crate::codes::CodeTable;
use log::debug;
use oxihuff_core::{Bitstream, HuffError, Result};

/// Concatenate the codes of `input`'s symbols, in input order.
///
/// The output buffer is reserved for the worst case (every symbol taking the
/// longest code) before any bit is written. A symbol without a code yields
/// [`HuffError::MissingCode`]: the table was built for a different input.
pub fn encode(input: &[u8], codes: &CodeTable) -> Result<Bitstream> {
    let worst_case = input.len().saturating_mul(codes.max_code_len());
    let mut bits = Bitstream::try_with_capacity(worst_case)?;

    for &symbol in input {
        let code = codes
            .get(symbol)
            .ok_or_else(|| HuffError::missing_code(symbol))?;
        bits.extend_from(code);
    }

    debug!("encoded {} bytes into {} bits", input.len(), bits.len());
    Ok(bits)
}
