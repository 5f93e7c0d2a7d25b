//! Growable bit sequence used for codewords and encoded messages.
//!
//! `Bitstream` stores bits MSB-first: the first bit pushed lands in bit 7 of
//! the first byte. A trailing partial byte is always zero-padded, so
//! [`Bitstream::as_bytes`] can be handed out directly.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::Bitstream;
//!
//! let mut bits = Bitstream::new();
//! bits.push_bit(true);
//! bits.push_bit(false);
//! bits.push_bit(true);
//!
//! assert_eq!(bits.len(), 3);
//! assert_eq!(bits.to_string(), "101");
//! assert_eq!(bits.as_bytes(), &[0b1010_0000]);
//! ```

use crate::error::{HuffError, Result};
use std::fmt;
use std::str::FromStr;

/// An ordered, growable sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitstream {
    /// Packed bits (MSB-first), trailing bits of the last byte are zero.
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl Bitstream {
    /// Create an empty bitstream.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Create an empty bitstream with room for at least `bits` bits.
    ///
    /// Fails with [`HuffError::AllocationFailure`] instead of aborting when
    /// the buffer cannot be obtained.
    pub fn try_with_capacity(bits: usize) -> Result<Self> {
        let mut stream = Self::new();
        stream.try_reserve(bits)?;
        Ok(stream)
    }

    /// Reserve room for at least `additional` more bits.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let needed_bytes = (self.len + additional).div_ceil(8);
        let extra = needed_bytes.saturating_sub(self.bytes.len());
        self.bytes
            .try_reserve(extra)
            .map_err(|e| HuffError::allocation(extra, e))
    }

    /// Number of bits in the stream.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes needed to hold the bits.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Append one bit.
    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        let bit_offset = self.len % 8;
        if bit_offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - bit_offset);
        }
        self.len += 1;
    }

    /// Remove and return the last bit.
    pub fn pop_bit(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte_index = self.len / 8;
        let mask = 1u8 << (7 - self.len % 8);
        let bit = self.bytes[byte_index] & mask != 0;
        // Keep the padding bits zero.
        self.bytes[byte_index] &= !mask;
        if self.len % 8 == 0 {
            self.bytes.pop();
        }
        Some(bit)
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &Bitstream) {
        if self.len % 8 == 0 {
            // Byte aligned: copy whole bytes.
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        for bit in other.iter() {
            self.push_bit(bit);
        }
    }

    /// Get the bit at `index`.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            stream: self,
            pos: 0,
        }
    }

    /// Whether `prefix` is a prefix of this stream.
    pub fn starts_with(&self, prefix: &Bitstream) -> bool {
        prefix.len <= self.len && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }

    /// The packed bytes, MSB-first, last byte zero-padded at the end.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy of the packed bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Hex dump of the stream read as one big-endian number.
    ///
    /// The bit string is left-padded with zeros to a whole number of bytes
    /// and every byte is printed as two uppercase hex digits separated by a
    /// space. An empty stream renders as `00`.
    pub fn to_hex(&self) -> String {
        if self.is_empty() {
            return "00".to_string();
        }

        let padding = (8 - self.len % 8) % 8;
        let mut out = Vec::with_capacity(self.bytes.len());
        let mut byte = 0u8;
        let mut filled = padding;
        for bit in self.iter() {
            byte = (byte << 1) | u8::from(bit);
            filled += 1;
            if filled == 8 {
                out.push(format!("{:02X}", byte));
                byte = 0;
                filled = 0;
            }
        }
        out.join(" ")
    }

    /// Parse a textual bitstream made of `0` and `1` characters.
    pub fn from_bit_str(text: &str) -> Result<Self> {
        let mut stream = Self::try_with_capacity(text.len())?;
        for (position, c) in text.chars().enumerate() {
            match c {
                '0' => stream.push_bit(false),
                '1' => stream.push_bit(true),
                other => return Err(HuffError::invalid_bit_char(position, other)),
            }
        }
        Ok(stream)
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Bitstream {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bit_str(s)
    }
}

impl FromIterator<bool> for Bitstream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut stream = Self::new();
        for bit in iter {
            stream.push_bit(bit);
        }
        stream
    }
}

impl<'a> IntoIterator for &'a Bitstream {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the bits of a [`Bitstream`].
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    stream: &'a Bitstream,
    pos: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        let bit = self.stream.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut bits = Bitstream::new();
        for b in [true, false, true, true, false, false, false, true, true] {
            bits.push_bit(b);
        }
        assert_eq!(bits.len(), 9);
        assert_eq!(bits.byte_len(), 2);
        assert_eq!(bits.as_bytes(), &[0b1011_0001, 0b1000_0000]);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(8), Some(true));
        assert_eq!(bits.get(9), None);
    }

    #[test]
    fn test_to_bytes_matches_storage() {
        let bits: Bitstream = "0111010".parse().unwrap();
        let owned = bits.to_bytes();
        assert_eq!(owned, vec![0b0111_0100]);
        assert_eq!(owned, bits.as_bytes());
        assert!(Bitstream::new().to_bytes().is_empty());
    }

    #[test]
    fn test_pop_keeps_padding_clear() {
        let mut bits: Bitstream = "101".parse().unwrap();
        assert_eq!(bits.pop_bit(), Some(true));
        assert_eq!(bits.as_bytes(), &[0b1000_0000]);
        assert_eq!(bits.pop_bit(), Some(false));
        assert_eq!(bits.pop_bit(), Some(true));
        assert!(bits.is_empty());
        assert_eq!(bits.byte_len(), 0);
        assert_eq!(bits.pop_bit(), None);
    }

    #[test]
    fn test_extend_aligned_and_unaligned() {
        let a: Bitstream = "11110000".parse().unwrap();
        let b: Bitstream = "101".parse().unwrap();

        let mut aligned = a.clone();
        aligned.extend_from(&b);
        assert_eq!(aligned.to_string(), "11110000101");

        let mut unaligned = b.clone();
        unaligned.extend_from(&a);
        assert_eq!(unaligned.to_string(), "10111110000");
        assert_eq!(unaligned.as_bytes(), &[0b1011_1110, 0b0000_0000]);
    }

    #[test]
    fn test_display_and_parse() {
        let bits = Bitstream::from_bit_str("0010110").unwrap();
        assert_eq!(bits.to_string(), "0010110");

        let err = Bitstream::from_bit_str("01x1").unwrap_err();
        assert!(matches!(
            err,
            HuffError::InvalidBitChar {
                position: 2,
                found: 'x'
            }
        ));
    }

    #[test]
    fn test_hex_left_pads() {
        assert_eq!(Bitstream::new().to_hex(), "00");
        // 9 bits -> padded with 7 leading zeros: 0000000 1 | 0000 0001
        let bits: Bitstream = "100000001".parse().unwrap();
        assert_eq!(bits.to_hex(), "01 01");
        let bits: Bitstream = "11111111".parse().unwrap();
        assert_eq!(bits.to_hex(), "FF");
        let bits: Bitstream = "1010".parse().unwrap();
        assert_eq!(bits.to_hex(), "0A");
    }

    #[test]
    fn test_starts_with() {
        let bits: Bitstream = "10110".parse().unwrap();
        assert!(bits.starts_with(&"101".parse().unwrap()));
        assert!(bits.starts_with(&Bitstream::new()));
        assert!(!bits.starts_with(&"11".parse().unwrap()));
        assert!(!bits.starts_with(&"101101".parse().unwrap()));
    }

    #[test]
    fn test_collect_and_iter() {
        let bits: Bitstream = [false, true, true].into_iter().collect();
        assert_eq!(bits.iter().len(), 3);
        let back: Vec<bool> = (&bits).into_iter().collect();
        assert_eq!(back, vec![false, true, true]);
    }
}
