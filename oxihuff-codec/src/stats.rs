//! Compression statistics for one encoded input.

/// Size figures of an input and its encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    /// Input length in bytes.
    pub original_bytes: usize,
    /// Length of the encoded bitstream in bits.
    pub encoded_bits: usize,
    /// Shannon entropy of the input in bits per symbol.
    pub entropy_bits: f64,
}

impl CompressionStats {
    /// Create statistics for an input of `original_bytes` encoded in
    /// `encoded_bits` bits.
    pub fn new(original_bytes: usize, encoded_bits: usize, entropy_bits: f64) -> Self {
        Self {
            original_bytes,
            encoded_bits,
            entropy_bits,
        }
    }

    /// Fixed-width size of the input: eight bits per byte.
    pub fn original_bits(&self) -> usize {
        self.original_bytes * 8
    }

    /// Bytes needed to store the encoded bits.
    pub fn encoded_bytes(&self) -> usize {
        self.encoded_bits.div_ceil(8)
    }

    /// Percentage size reduction: `(1 - encoded / original) * 100`.
    pub fn savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.encoded_bits as f64 / self.original_bits() as f64) * 100.0
    }

    /// Encoded size as a fraction of the original size.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_bits() as f64
    }

    /// Average code length in bits per input symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_bytes as f64
    }

    /// Smallest possible encoded size in bits for this distribution.
    pub fn entropy_bound_bits(&self) -> f64 {
        self.entropy_bits * self.original_bytes as f64
    }
}
