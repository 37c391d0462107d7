use std::io::{self, Read};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::media::codec_options::LsbCodecOptions;
use crate::media::image::iterators::{SlotLayout, Slots};
use crate::media::pixel_buffer::PixelBuffer;

/// Reads bits back out of the carrier slots of a [`PixelBuffer`], in the same order
/// [`LsbWriter`](super::encoder::LsbWriter) stores them.
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use lsb_core::media::image::decoder::LsbReader;
/// use lsb_core::media::{LsbCodecOptions, PixelBuffer};
///
/// // 'H' = 0100_1000 spread over 8 channels
/// let raw = vec![0x10, 0x11, 0x10, 0x10, 0x11, 0x10, 0x10, 0x10, 0x00];
/// let buffer = PixelBuffer::new(3, 1, 3, raw).unwrap();
/// let mut secret = [0; 1];
///
/// LsbReader::new(&buffer, &LsbCodecOptions::default())
///     .read_exact(&mut secret)
///     .expect("Cannot read 1 byte from reader");
///
/// assert_eq!(&secret, b"H");
/// ```
pub struct LsbReader<'a> {
    data: &'a [u8],
    slots: Slots,
    read: usize,
}

impl<'a> LsbReader<'a> {
    /// the options are expected to be validated
    pub fn new(buffer: &'a PixelBuffer, options: &LsbCodecOptions) -> Self {
        Self {
            data: buffer.as_raw(),
            slots: SlotLayout::new(buffer, options).into_slots(options.seed),
            read: 0,
        }
    }

    /// the bit stored in the next slot
    #[inline]
    pub fn unveil_bit(&mut self) -> Option<bool> {
        let slot = self.slots.next()?;
        self.read += 1;

        Some((self.data[slot.offset] >> slot.plane) & 1 == 1)
    }

    /// slots not read yet
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    pub fn bits_read(&self) -> usize {
        self.read
    }
}

/// Delivers whole bytes only, a trailing rest of less than 8 slots is never read.
impl Read for LsbReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let bytes = buf.len().min(self.remaining() / 8);
        let mut bit_buffer = BitWriter::endian(&mut buf[..bytes], BigEndian);

        for _ in 0..bytes * 8 {
            match self.unveil_bit() {
                Some(bit) => bit_buffer.write_bit(bit)?,
                None => break,
            }
        }

        Ok(bytes)
    }
}
