//! Huffman tree construction.
//!
//! The tree is built bottom-up from a [`FrequencyTable`]: one leaf per
//! present symbol goes into a [`PriorityQueue`], then the two lightest nodes
//! are repeatedly merged until a single root remains. The first node
//! extracted in each round becomes the left child.
//!
//! A single distinct symbol gets a synthetic internal root with the leaf as
//! its only (left) child, so the symbol is still coded as `0` instead of an
//! empty codeword.

use crate::config::MAX_QUEUE_NODES;
use crate::frequency::FrequencyTable;
use crate::heap::{PriorityQueue, Weighted};
use log::{debug, trace};
use oxihuff_core::{HuffError, Result};
use std::fmt::Write;

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A coded symbol.
    Leaf {
        /// The byte value.
        symbol: u8,
        /// Its occurrence count.
        freq: u64,
    },
    /// A combining node. Only the single-symbol root lacks a right child.
    Internal {
        /// Sum of the children's frequencies.
        freq: u64,
        /// Subtree reached by a `0` bit.
        left: Box<Node>,
        /// Subtree reached by a `1` bit.
        right: Option<Box<Node>>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(symbol: u8, freq: u64) -> Self {
        Node::Leaf { symbol, freq }
    }

    /// Merge two subtrees under a new internal node.
    ///
    /// Fails with [`HuffError::FrequencyOverflow`] when the summed
    /// frequency does not fit in a `u64`.
    pub fn merge(left: Node, right: Node) -> Result<Self> {
        let freq = left
            .freq()
            .checked_add(right.freq())
            .ok_or_else(|| HuffError::frequency_overflow(left.freq(), right.freq()))?;
        Ok(Node::Internal {
            freq,
            left: Box::new(left),
            right: Some(Box::new(right)),
        })
    }

    /// Frequency of the node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }

    /// Whether this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child reached by `bit`, if it exists.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_deref()
                } else {
                    Some(left)
                }
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => {
                left.leaf_count() + right.as_ref().map_or(0, |r| r.leaf_count())
            }
        }
    }

    fn node_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => {
                1 + left.node_count() + right.as_ref().map_or(0, |r| r.node_count())
            }
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => {
                1 + left.height().max(right.as_ref().map_or(0, |r| r.height()))
            }
        }
    }

    fn render_into(&self, out: &mut String, depth: usize, label: &str) {
        let indent = "  ".repeat(depth);
        match self {
            Node::Leaf { symbol, freq } => {
                let _ = writeln!(
                    out,
                    "{}{}-> Leaf 0x{:02X} {} [freq: {}]",
                    indent,
                    label,
                    symbol,
                    symbol_label(*symbol),
                    freq
                );
            }
            Node::Internal { freq, left, right } => {
                let _ = writeln!(out, "{}{}-> Internal [freq: {}]", indent, label, freq);
                left.render_into(out, depth + 1, "0");
                if let Some(right) = right {
                    right.render_into(out, depth + 1, "1");
                }
            }
        }
    }
}

impl Weighted for Node {
    fn weight(&self) -> u64 {
        self.freq()
    }
}

/// Printable form of a symbol: `'c'` for visible characters, `Ctrl-N` otherwise.
pub fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("'{}'", symbol as char)
    } else {
        format!("Ctrl-{}", symbol)
    }
}

/// An owned Huffman tree.
///
/// The root is always an internal node. Dropping the tree releases every
/// node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `freq` with a queue sized for the full alphabet.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        Self::build_with_capacity(freq, MAX_QUEUE_NODES)
    }

    /// Build the tree for `freq` using a queue of `queue_capacity` nodes.
    ///
    /// Fails with [`HuffError::EmptyFrequencyTable`] when no symbol is
    /// present, or [`HuffError::QueueOverflow`] when the queue is too small
    /// for the alphabet.
    pub fn build_with_capacity(freq: &FrequencyTable, queue_capacity: usize) -> Result<Self> {
        if freq.is_empty() {
            return Err(HuffError::EmptyFrequencyTable);
        }

        let mut queue = PriorityQueue::with_capacity(queue_capacity)?;
        for (symbol, count) in freq.iter() {
            queue.insert(Node::leaf(symbol, count))?;
        }
        debug!("building tree from {} leaves", queue.len());

        if queue.len() == 1 {
            let only = queue.extract_min()?;
            let root = Node::Internal {
                freq: only.freq(),
                left: Box::new(only),
                right: None,
            };
            return Ok(Self { root });
        }

        while queue.len() > 1 {
            let left = queue.extract_min()?;
            let right = queue.extract_min()?;
            trace!("merge {} + {}", left.freq(), right.freq());
            queue.insert(Node::merge(left, right)?)?;
        }

        let root = queue.extract_min()?;
        Ok(Self { root })
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total frequency; equals the length of the input the tree was built for.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Indented dump of the tree structure, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.root.render_into(&mut out, 0, "root");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_symbol_tree() {
        let tree = HuffmanTree::build(&FrequencyTable::count(b"aaaa")).unwrap();
        match tree.root() {
            Node::Internal { freq, left, right } => {
                assert_eq!(*freq, 4);
                assert_eq!(**left, Node::leaf(b'a', 4));
                assert!(right.is_none());
            }
            Node::Leaf { .. } => panic!("root must be internal"),
        }
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.node_count(), 2);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_merge_order() {
        // a:4 b:3 c:2 -> merge c(2)+b(3)=5, then a(4)+5=9
        let tree = HuffmanTree::build(&FrequencyTable::count(b"aaaabbbcc")).unwrap();
        let root = tree.root();
        assert_eq!(root.freq(), 9);
        assert_eq!(root.child(false), Some(&Node::leaf(b'a', 4)));

        let right = root.child(true).unwrap();
        assert_eq!(right.freq(), 5);
        assert_eq!(right.child(false), Some(&Node::leaf(b'c', 2)));
        assert_eq!(right.child(true), Some(&Node::leaf(b'b', 3)));
    }

    #[test]
    fn test_weight_and_counts() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let freq = FrequencyTable::count(input);
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.weight(), input.len() as u64);
        assert_eq!(tree.leaf_count(), freq.distinct());
        assert_eq!(tree.node_count(), 2 * freq.distinct() - 1);
    }

    #[test]
    fn test_full_alphabet_fits_queue() {
        let input: Vec<u8> = (0..=255).collect();
        let tree = HuffmanTree::build(&FrequencyTable::count(&input)).unwrap();
        assert_eq!(tree.leaf_count(), 256);
        assert_eq!(tree.height(), 8);
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = HuffmanTree::build(&FrequencyTable::new()).unwrap_err();
        assert!(matches!(err, HuffError::EmptyFrequencyTable));
    }

    #[test]
    fn test_frequency_sum_overflow_rejected() {
        let mut freq = FrequencyTable::new();
        freq.add_count(b'a', u64::MAX);
        freq.add_count(b'b', 1);
        let err = HuffmanTree::build(&freq).unwrap_err();
        assert!(matches!(
            err,
            HuffError::FrequencyOverflow {
                left: 1,
                right: u64::MAX
            }
        ));
    }

    #[test]
    fn test_merge_sums_children() {
        let node = Node::merge(Node::leaf(b'x', 2), Node::leaf(b'y', 5)).unwrap();
        assert_eq!(node.freq(), 7);
        assert!(Node::merge(Node::leaf(b'x', u64::MAX), Node::leaf(b'y', 1)).is_err());
    }

    #[test]
    fn test_undersized_queue_overflows() {
        let err = HuffmanTree::build_with_capacity(&FrequencyTable::count(b"abcd"), 3).unwrap_err();
        assert!(matches!(err, HuffError::QueueOverflow { capacity: 3 }));
    }

    #[test]
    fn test_render() {
        let tree = HuffmanTree::build(&FrequencyTable::count(b"ab")).unwrap();
        let text = tree.render();
        assert!(text.starts_with("root-> Internal [freq: 2]"));
        assert!(text.contains("0-> Leaf 0x61 'a' [freq: 1]"));
        assert!(text.contains("1-> Leaf 0x62 'b' [freq: 1]"));
    }

    #[test]
    fn test_symbol_label() {
        assert_eq!(symbol_label(b'a'), "'a'");
        assert_eq!(symbol_label(b' '), "Ctrl-32");
        assert_eq!(symbol_label(b'\n'), "Ctrl-10");
        assert_eq!(symbol_label(0xFF), "Ctrl-255");
    }
}
