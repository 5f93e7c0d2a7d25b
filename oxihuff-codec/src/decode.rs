//! Decoding: bitstream back to bytes by walking the tree.

use crate::tree::{HuffmanTree, Node};
use log::debug;
use oxihuff_core::{Bitstream, HuffError, Result};

/// Recover the symbols encoded in `bits` using `tree`.
///
/// Each `0` moves the cursor left and each `1` right; reaching a leaf emits
/// its symbol and returns the cursor to the root. A step into a child that
/// does not exist, or a stream that stops in the middle of a codeword,
/// yields [`HuffError::MalformedBitstream`].
pub fn decode(bits: &Bitstream, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut output = Vec::new();
    output
        .try_reserve(bits.len())
        .map_err(|e| HuffError::allocation(bits.len(), e))?;

    let mut cursor = root;
    for (bit_position, bit) in bits.iter().enumerate() {
        cursor = cursor.child(bit).ok_or_else(|| {
            HuffError::malformed(
                bit_position,
                format!("no {} child at this node", if bit { "right" } else { "left" }),
            )
        })?;

        if let Node::Leaf { symbol, .. } = cursor {
            output.push(*symbol);
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(HuffError::malformed(
            bits.len(),
            "bitstream ends in the middle of a codeword",
        ));
    }

    debug!("decoded {} bits into {} bytes", bits.len(), output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn tree_for(input: &[u8]) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::count(input)).unwrap()
    }

    #[test]
    fn test_decode_known() {
        let tree = tree_for(b"aaaabbbcc");
        let bits: Bitstream = "00001111111010".parse().unwrap();
        assert_eq!(decode(&bits, &tree).unwrap(), b"aaaabbbcc");
    }

    #[test]
    fn test_decode_empty_stream() {
        let tree = tree_for(b"ab");
        assert!(decode(&Bitstream::new(), &tree).unwrap().is_empty());
    }

    #[test]
    fn test_single_symbol_rejects_one_bit() {
        let tree = tree_for(b"aaaa");
        let bits: Bitstream = "0010".parse().unwrap();
        let err = decode(&bits, &tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::MalformedBitstream {
                bit_position: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_truncated_codeword() {
        // c = 10, b = 11: a lone trailing 1 is half a codeword
        let tree = tree_for(b"aaaabbbcc");
        let bits: Bitstream = "0101".parse().unwrap();
        let err = decode(&bits, &tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::MalformedBitstream {
                bit_position: 4,
                ..
            }
        ));
    }
}
