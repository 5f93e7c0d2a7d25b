//! Codec configuration.

use oxihuff_core::{HuffError, Result};

/// Number of distinct symbols (every byte value).
pub const MAX_SYMBOLS: usize = 256;

/// Most nodes a tree over [`MAX_SYMBOLS`] leaves can contain.
pub const MAX_QUEUE_NODES: usize = 2 * MAX_SYMBOLS - 1;

/// Default maximum input length in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;

/// Codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Longest accepted input in bytes.
    pub max_input_len: usize,
    /// Capacity of the tree-building priority queue.
    pub queue_capacity: usize,
    /// Decode the encoded bitstream and compare it with the input.
    pub verify: bool,
}

impl CodecConfig {
    /// Standard configuration: 1024-byte inputs, full-alphabet queue,
    /// round-trip verification enabled.
    pub const DEFAULT: Self = Self {
        max_input_len: DEFAULT_MAX_INPUT_LEN,
        queue_capacity: MAX_QUEUE_NODES,
        verify: true,
    };

    /// Create a configuration accepting inputs up to `max_input_len` bytes.
    pub fn new(max_input_len: usize) -> Self {
        Self {
            max_input_len,
            ..Self::DEFAULT
        }
    }

    /// Set the maximum input length.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Set the priority queue capacity.
    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    /// Enable or disable round-trip verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Reject inputs the pipeline must not run on.
    pub fn validate_input(&self, input: &[u8]) -> Result<()> {
        if input.is_empty() {
            return Err(HuffError::EmptyInput);
        }
        if input.len() > self.max_input_len {
            return Err(HuffError::input_too_long(input.len(), self.max_input_len));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
