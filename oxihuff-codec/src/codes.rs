//! Code generation by depth-first tree traversal.

use crate::config::MAX_SYMBOLS;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use oxihuff_core::Bitstream;

/// Symbol to codeword mapping for the symbols present in one input.
///
/// Every code is the path from the root to a distinct leaf (`0` = left,
/// `1` = right), so the set is prefix-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Bitstream>>,
}

impl CodeTable {
    /// Assign a code to every leaf of `tree`.
    pub fn generate(tree: &HuffmanTree) -> Self {
        let mut table = Self {
            codes: vec![None; MAX_SYMBOLS],
        };
        let mut path = Bitstream::new();
        table.walk(tree.root(), &mut path);
        table
    }

    fn walk(&mut self, node: &Node, path: &mut Bitstream) {
        match node {
            Node::Leaf { symbol, .. } => {
                let slot = &mut self.codes[*symbol as usize];
                if slot.is_none() {
                    *slot = Some(path.clone());
                }
            }
            Node::Internal { left, right, .. } => {
                path.push_bit(false);
                self.walk(left, path);
                path.pop_bit();

                if let Some(right) = right {
                    path.push_bit(true);
                    self.walk(right, path);
                    path.pop_bit();
                }
            }
        }
    }

    /// Code for `symbol`, if it appeared in the input.
    pub fn get(&self, symbol: u8) -> Option<&Bitstream> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Coded symbols and their codes, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Bitstream)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Bitstream> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }

    /// Total encoded length in bits of an input with frequencies `freq`.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_bit_len(&self, freq: &FrequencyTable) -> u64 {
        freq.iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|c| c.len() as u64 * count))
            .sum()
    }
}
