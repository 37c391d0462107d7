use std::io::{self, ErrorKind, Write};

use crate::media::codec_options::LsbCodecOptions;
use crate::media::image::iterators::{SlotLayout, Slots};
use crate::media::pixel_buffer::PixelBuffer;

/// Stores one bit in a bit plane of a color channel
pub trait HideBit {
    fn hide_bit(self, bit: bool, plane: u8);
}

impl HideBit for &mut u8 {
    #[inline]
    fn hide_bit(self, bit: bool, plane: u8) {
        *self = (*self & !(1 << plane)) | (u8::from(bit) << plane);
    }
}

/// Writes bits into the carrier slots of a [`PixelBuffer`], one bit per slot.
///
/// As a [`Write`] it only ever stores whole bytes, most significant bit first,
/// and reports `WriteZero` once less than 8 slots are left.
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use lsb_core::media::image::encoder::LsbWriter;
/// use lsb_core::media::{LsbCodecOptions, PixelBuffer};
///
/// let mut buffer = PixelBuffer::new(4, 4, 3, vec![0xfe; 48]).unwrap();
/// {
///     let mut writer = LsbWriter::new(&mut buffer, &LsbCodecOptions::default());
///     writer.write_all(b"Hi").expect("Cannot write secret message");
/// }
/// // 'H' = 0100_1000
/// assert_eq!(&buffer.as_raw()[..8], &[0xfe, 0xff, 0xfe, 0xfe, 0xff, 0xfe, 0xfe, 0xfe]);
/// ```
pub struct LsbWriter<'a> {
    data: &'a mut [u8],
    slots: Slots,
    written: usize,
}

impl<'a> LsbWriter<'a> {
    /// the options are expected to be validated
    pub fn new(buffer: &'a mut PixelBuffer, options: &LsbCodecOptions) -> Self {
        let slots = SlotLayout::new(buffer, options).into_slots(options.seed);

        Self {
            data: buffer.as_raw_mut(),
            slots,
            written: 0,
        }
    }

    /// Stores `bit` in the next free slot.
    pub fn hide_bit(&mut self, bit: bool) -> io::Result<()> {
        let slot = self.slots.next().ok_or_else(|| {
            io::Error::new(ErrorKind::WriteZero, "no carrier slot left in the image")
        })?;
        self.data[slot.offset].hide_bit(bit, slot.plane);
        self.written += 1;

        Ok(())
    }

    /// slots left for writing
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    pub fn bits_written(&self) -> usize {
        self.written
    }
}

impl Write for LsbWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let bytes = buf.len().min(self.remaining() / 8);
        for byte in &buf[..bytes] {
            for i in (0..8).rev() {
                self.hide_bit((byte >> i) & 1 == 1)?;
            }
        }

        Ok(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod encoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_only_touch_the_least_significant_bit() {
        let mut c: u8 = 0b1010_1010;
        (&mut c).hide_bit(true, 0);
        assert_eq!(c, 0b1010_1011);
        (&mut c).hide_bit(false, 1);
        assert_eq!(c, 0b1010_1001);
        (&mut c).hide_bit(true, 7);
        assert_eq!(c, 0b1010_1001);
        (&mut c).hide_bit(false, 7);
        assert_eq!(c, 0b0010_1001);
    }

    #[test]
    fn should_write_bits_in_traversal_order() {
        let img = prepare_5x5_image();
        let mut buffer = PixelBuffer::from(img.clone());
        {
            let mut writer = LsbWriter::new(&mut buffer, &LsbCodecOptions::default());
            for _ in 0..4 {
                writer.hide_bit(true).unwrap();
            }
            assert_eq!(writer.bits_written(), 4);
        }

        // (0,0) = (0, 1, 2, 3), (1,0) = (4, 5, 6, 7)
        assert_eq!(buffer.pixel(0, 0), &[1, 1, 3, 3]);
        assert_eq!(buffer.pixel(1, 0), &[5, 5, 6, 7]);
        assert_eq!(buffer.pixel(2, 0), img.get_pixel(2, 0).0.as_slice());
    }

    #[test]
    fn should_refuse_to_write_beyond_the_last_slot() {
        let mut buffer = PixelBuffer::new(1, 1, 3, vec![0; 3]).unwrap();
        let mut writer = LsbWriter::new(&mut buffer, &LsbCodecOptions::default());

        for _ in 0..3 {
            writer.hide_bit(false).unwrap();
        }
        let err = writer.hide_bit(false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteZero);
    }

    #[test]
    fn should_never_write_partial_bytes() {
        // 3 pixels, 9 slots => one byte
        let mut buffer = PixelBuffer::new(3, 1, 3, vec![0; 9]).unwrap();
        let mut writer = LsbWriter::new(&mut buffer, &LsbCodecOptions::default());

        assert_eq!(writer.write(b"ab").unwrap(), 1);
        assert_eq!(writer.write(b"b").unwrap(), 0);
        assert_eq!(writer.remaining(), 1);
        assert_eq!(
            writer.write_all(b"b").unwrap_err().kind(),
            ErrorKind::WriteZero
        );
    }
}
