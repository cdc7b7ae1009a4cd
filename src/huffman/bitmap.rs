//! Growable bitmap used to pack Huffman codes.

/// A byte-packed bit vector that grows on demand.
///
/// Bit `k` lives in byte `k / 8` at mask `0x80 >> (k % 8)`, so the packed
/// bytes read left to right in the same order as the code string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    bytes: Vec<u8>,
    /// Number of set bits.
    ones: usize,
}

impl Bitmap {
    /// Create a bitmap with room for `bits` bits, all cleared.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: vec![0; bits.div_ceil(8)],
            ones: 0,
        }
    }

    /// Build from a string of `'0'`/`'1'` characters; any other character
    /// counts as `'0'`.
    pub fn from_bit_string(bits: &str) -> Self {
        let mut map = Self::with_capacity(bits.len());
        for (k, c) in bits.chars().enumerate() {
            if c == '1' {
                map.set(k);
            }
        }
        map
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.ones
    }

    /// Capacity in bits.
    pub fn capacity(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Packed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Set bit `k`, growing if needed.
    pub fn set(&mut self, k: usize) {
        self.expand(k);
        if !self.test(k) {
            self.ones += 1;
        }
        self.bytes[k >> 3] |= mask(k);
    }

    /// Clear bit `k`, growing if needed.
    pub fn clear(&mut self, k: usize) {
        self.expand(k);
        if self.test(k) {
            self.ones -= 1;
        }
        self.bytes[k >> 3] &= !mask(k);
    }

    /// Whether bit `k` is set. Bits past the capacity read as cleared.
    pub fn test(&self, k: usize) -> bool {
        self.bytes
            .get(k >> 3)
            .is_some_and(|byte| byte & mask(k) != 0)
    }

    /// The first `n` bits as a `'0'`/`'1'` string.
    pub fn to_bit_string(&self, n: usize) -> String {
        (0..n).map(|k| if self.test(k) { '1' } else { '0' }).collect()
    }

    /// Double the capacity until bit `k` fits.
    fn expand(&mut self, k: usize) {
        if k < self.capacity() {
            return;
        }
        let needed = (2 * k).div_ceil(8).max(k / 8 + 1);
        self.bytes.resize(needed, 0);
    }
}

fn mask(k: usize) -> u8 {
    0x80 >> (k & 0x07)
}
