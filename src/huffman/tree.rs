//! Huffman tree construction, code table, encoding and decoding.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::types::{LabError, LabResult};

use super::Bitmap;

#[derive(Debug, Clone)]
enum Node {
    Leaf { symbol: char, weight: u64 },
    Internal { weight: u64, zero: usize, one: usize },
}

impl Node {
    fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

/// A Huffman code over lowercase ASCII letters.
///
/// Nodes live in an arena; leaves are created in symbol order and internal
/// nodes in merge order, and equal weights are merged in creation order, so
/// the same text always yields the same codes.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
    frequencies: BTreeMap<char, u64>,
    codes: BTreeMap<char, String>,
}

/// Count letters case-insensitively, ignoring everything else.
pub fn letter_frequencies(text: &str) -> BTreeMap<char, u64> {
    let mut freq = BTreeMap::new();
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        *freq.entry(c.to_ascii_lowercase()).or_insert(0) += 1;
    }
    freq
}

impl HuffmanTree {
    /// Build from the letter frequencies of `text`.
    pub fn from_text(text: &str) -> LabResult<Self> {
        Self::from_frequencies(letter_frequencies(text))
    }

    /// Build from explicit symbol weights. Zero weights are dropped.
    pub fn from_frequencies(frequencies: BTreeMap<char, u64>) -> LabResult<Self> {
        let frequencies: BTreeMap<char, u64> =
            frequencies.into_iter().filter(|&(_, w)| w > 0).collect();
        if frequencies.is_empty() {
            return Err(LabError::EmptyAlphabet);
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();
        for (&symbol, &weight) in &frequencies {
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Leaf { symbol, weight });
        }

        while heap.len() > 1 {
            let (Some(Reverse((w0, zero))), Some(Reverse((w1, one)))) = (heap.pop(), heap.pop())
            else {
                break;
            };
            let weight = w0 + w1;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Internal { weight, zero, one });
        }
        let root = nodes.len() - 1;
        log::debug!(
            "huffman tree: {} symbols, {} nodes, total weight {}",
            frequencies.len(),
            nodes.len(),
            nodes[root].weight()
        );

        let mut tree = Self {
            nodes,
            root,
            frequencies,
            codes: BTreeMap::new(),
        };
        tree.codes = tree.assign_codes();
        Ok(tree)
    }

    fn assign_codes(&self) -> BTreeMap<char, String> {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(self.root, String::new())];
        while let Some((idx, prefix)) = stack.pop() {
            match &self.nodes[idx] {
                Node::Leaf { symbol, .. } => {
                    // A lone symbol still needs one bit.
                    let code = if prefix.is_empty() {
                        "0".to_string()
                    } else {
                        prefix
                    };
                    codes.insert(*symbol, code);
                }
                Node::Internal { zero, one, .. } => {
                    stack.push((*one, format!("{}1", prefix)));
                    stack.push((*zero, format!("{}0", prefix)));
                }
            }
        }
        codes
    }

    /// Symbol -> code string.
    pub fn codes(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    /// Code for one symbol (case-insensitive).
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes
            .get(&symbol.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Symbol -> weight the tree was built from.
    pub fn frequencies(&self) -> &BTreeMap<char, u64> {
        &self.frequencies
    }

    /// Total weight (number of counted letters).
    pub fn total_weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    /// Sum of weight × code length over all symbols.
    pub fn weighted_path_length(&self) -> u64 {
        self.frequencies
            .iter()
            .map(|(s, &w)| w * self.codes.get(s).map_or(0, |c| c.len() as u64))
            .sum()
    }

    /// Concatenate the codes of `word`'s letters. Symbols without a code are
    /// skipped.
    pub fn encode(&self, word: &str) -> String {
        word.chars().filter_map(|c| self.code(c)).collect()
    }

    /// Encode `word` into a bitmap; returns it with the bit length.
    pub fn encode_to_bitmap(&self, word: &str) -> (Bitmap, usize) {
        let bits = self.encode(word);
        (Bitmap::from_bit_string(&bits), bits.len())
    }

    /// Decode a `'0'`/`'1'` string.
    pub fn decode(&self, bits: &str) -> LabResult<String> {
        let mut out = String::new();

        if let Node::Leaf { symbol, .. } = self.nodes[self.root] {
            for c in bits.chars() {
                if c != '0' {
                    return Err(LabError::InvalidCode(bits.to_string()));
                }
                out.push(symbol);
            }
            return Ok(out);
        }

        let mut at = self.root;
        for c in bits.chars() {
            let Node::Internal { zero, one, .. } = self.nodes[at] else {
                return Err(LabError::InvalidCode(bits.to_string()));
            };
            at = match c {
                '0' => zero,
                '1' => one,
                _ => return Err(LabError::InvalidCode(bits.to_string())),
            };
            if let Node::Leaf { symbol, .. } = self.nodes[at] {
                out.push(symbol);
                at = self.root;
            }
        }

        if at != self.root {
            return Err(LabError::InvalidCode(bits.to_string()));
        }
        Ok(out)
    }
}
