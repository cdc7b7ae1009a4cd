//! Huffman coding over letter frequencies.

pub mod bitmap;
pub mod text;
pub mod tree;

pub use bitmap::Bitmap;
pub use text::{clean_text, load_text, TextSource, DEMO_WORDS, FALLBACK_TEXT};
pub use tree::{letter_frequencies, HuffmanTree};
