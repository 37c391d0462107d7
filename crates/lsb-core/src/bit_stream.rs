use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates over the bits of any byte source, the most significant bit of each byte first.
///
/// Yields `0` or `1` per bit and ends with the last bit of the last byte.
pub struct BitIterator<I> {
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bit = (self.i % 8) as u8;
            if bit == 0 {
                let mut b = 0;
                self.byte = match self.iter.read(slice::from_mut(&mut b)) {
                    Ok(0) => None,
                    Ok(..) => Some(b),
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => None,
                };
            }
            let b = self.byte?;
            self.i += 1;

            return Some((b >> (7 - bit)) & 1);
        }
    }
}

/// An owned, ordered sequence of bits.
///
/// Bits are packed most significant bit first, the unused tail of the last
/// byte is always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// every bit of every byte, in order
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let len = bytes.len() * 8;
        Self { bytes, len }
    }

    /// number of bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        BitIterator::new(self.bytes.as_slice())
            .take(self.len)
            .map(|b| b == 1)
    }

    /// the packed bits, a trailing partial byte is zero padded
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut bits = BitStream::new();
        bits.extend(iter);
        bits
    }
}

impl Extend<bool> for BitStream {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        for bit in iter {
            self.push(bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pack_bits_most_significant_first() {
        let bits: BitStream = [true, false, false, false, false, false, false, true, true]
            .into_iter()
            .collect();

        assert_eq!(bits.len(), 9);
        assert_eq!(bits.as_bytes(), &[0b1000_0001, 0b1000_0000]);
        assert_eq!(bits.get(7), Some(true));
        assert_eq!(bits.get(9), None);
    }

    #[test]
    fn should_iterate_exactly_len_bits() {
        let mut bits = BitStream::from_bytes(vec![0b0100_1000]);
        bits.push(true);

        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(
            collected,
            vec![false, true, false, false, true, false, false, false, true]
        );
    }

    #[test]
    fn should_survive_a_roundtrip_through_the_iterator() {
        let bits = BitStream::from_bytes(b"webp".to_vec());
        let copy: BitStream = bits.iter().collect();

        assert_eq!(copy, bits);
        assert_eq!(copy.into_bytes(), b"webp".to_vec());
    }
}
