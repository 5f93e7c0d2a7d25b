//! Error types for OxiHuff operations.
//!
//! A single error enum covers every failure the pipeline can report: input
//! validation, priority queue invariant violations, bitstream decoding and
//! allocation failures.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum HuffError {
    /// I/O error from the surrounding shell (reading input, writing output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input string has zero length.
    #[error("Empty input: nothing to encode")]
    EmptyInput,

    /// The input is longer than the configured maximum.
    #[error("Input too long: {len} bytes exceeds maximum of {max}")]
    InputTooLong {
        /// Actual input length in bytes.
        len: usize,
        /// Configured maximum input length.
        max: usize,
    },

    /// Insertion into a full priority queue.
    #[error("Priority queue overflow: capacity {capacity} exhausted")]
    QueueOverflow {
        /// Fixed capacity of the queue.
        capacity: usize,
    },

    /// Extraction from an empty priority queue.
    #[error("Priority queue underflow: no node to extract")]
    QueueUnderflow,

    /// Tree construction was attempted on a table with no symbols.
    #[error("Frequency table is empty: no symbols to build a tree from")]
    EmptyFrequencyTable,

    /// A symbol being encoded has no entry in the code table.
    #[error("No code for symbol 0x{symbol:02X}: code table was built from different input")]
    MissingCode {
        /// The symbol without a code.
        symbol: u8,
    },

    /// The bitstream does not describe a valid path through the tree.
    #[error("Malformed bitstream at bit {bit_position}: {reason}")]
    MalformedBitstream {
        /// Index of the offending bit.
        bit_position: usize,
        /// Description of what went wrong.
        reason: String,
    },

    /// A textual bitstream contained something other than `0` or `1`.
    #[error("Invalid bit character {found:?} at position {position}")]
    InvalidBitChar {
        /// Character index in the source text.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Decoding did not reproduce the original input.
    #[error("Round-trip mismatch at byte {position}")]
    RoundTripMismatch {
        /// First byte offset where input and decoded output differ.
        position: usize,
    },

    /// Summing frequencies exceeded the counter range.
    #[error("Frequency overflow: {left} + {right} does not fit in 64 bits")]
    FrequencyOverflow {
        /// Left operand of the failed sum.
        left: u64,
        /// Right operand of the failed sum.
        right: u64,
    },

    /// Memory for a buffer could not be obtained.
    #[error("Allocation failure: could not reserve {requested} elements")]
    AllocationFailure {
        /// Number of elements requested.
        requested: usize,
        /// The underlying reservation error.
        #[source]
        source: TryReserveError,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, HuffError>;

impl HuffError {
    /// Create an input too long error.
    pub fn input_too_long(len: usize, max: usize) -> Self {
        Self::InputTooLong { len, max }
    }

    /// Create a queue overflow error.
    pub fn queue_overflow(capacity: usize) -> Self {
        Self::QueueOverflow { capacity }
    }

    /// Create a missing code error.
    pub fn missing_code(symbol: u8) -> Self {
        Self::MissingCode { symbol }
    }

    /// Create a malformed bitstream error.
    pub fn malformed(bit_position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedBitstream {
            bit_position,
            reason: reason.into(),
        }
    }

    /// Create an invalid bit character error.
    pub fn invalid_bit_char(position: usize, found: char) -> Self {
        Self::InvalidBitChar { position, found }
    }

    /// Create a round-trip mismatch error.
    pub fn round_trip_mismatch(position: usize) -> Self {
        Self::RoundTripMismatch { position }
    }

    /// Create an allocation failure error for a failed `try_reserve`.
    pub fn allocation(requested: usize, source: TryReserveError) -> Self {
        Self::AllocationFailure { requested, source }
    }

    /// Create a frequency overflow error.
    pub fn frequency_overflow(left: u64, right: u64) -> Self {
        Self::FrequencyOverflow { left, right }
    }

    /// Whether this error signals a defect in the codec rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::QueueOverflow { .. }
                | Self::QueueUnderflow
                | Self::MissingCode { .. }
                | Self::RoundTripMismatch { .. }
        )
    }
}
