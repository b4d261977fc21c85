use std::fmt;

use crate::error::Error;

/// A growable sequence of individual bits
///
/// Bits are packed most-significant-bit first into a byte
/// buffer, together with the exact number of valid bits.
/// The codec layer never pads; `as_bytes` exposes the raw
/// buffer with zero padding in the last partial byte for
/// collaborators that need byte alignment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    /// packed bit storage, MSb first within each byte
    bytes: Vec<u8>,
    /// how many bits of the buffer are valid
    bit_len: usize,
}

impl BitSequence {
    pub fn new() -> BitSequence {
        BitSequence {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let bit_index = self.bit_len % 8;
        if bit_index == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0b10000000_u8.rotate_right(bit_index as u32);
        }
        self.bit_len += 1;
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.bytes[index / 8];
        let mask = 0b10000000_u8.rotate_right((index % 8) as u32);
        Some(byte & mask > 0)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            sequence: self,
            position: 0,
        }
    }

    pub fn extend_from(&mut self, other: &BitSequence) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Zero-padded byte view of the sequence
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parses a textual bit string like "0101"
    pub fn from_bit_str(text: &str) -> Result<BitSequence, Error> {
        let mut sequence = BitSequence::new();
        for character in text.chars() {
            match character {
                '0' => sequence.push(false),
                '1' => sequence.push(true),
                other => return Err(Error::MalformedBitString(other)),
            }
        }
        Ok(sequence)
    }
}

pub struct Bits<'a> {
    sequence: &'a BitSequence,
    position: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.sequence.get(self.position)?;
        self.position += 1;
        Some(bit)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut sequence = BitSequence::new();
        for bit in iter {
            sequence.push(bit);
        }
        sequence
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence({})", self)
    }
}
