use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use super::decoder::LsbReader;
use super::encoder::LsbWriter;
use crate::bit_stream::BitStream;
use crate::error::LsbError;
use crate::frame::{EXTENSION_LENGTH_BYTES, HEADER_BYTES};
use crate::media::capacity::{ensure_capacity, required_bits};
use crate::media::codec_options::LsbCodecOptions;
use crate::media::image::iterators::SlotLayout;
use crate::media::pixel_buffer::PixelBuffer;
use crate::result::Result;

/// Factory for reader and writer
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB reader that implements Read
    pub fn decoder<'i>(input: &'i PixelBuffer, opts: &LsbCodecOptions) -> Result<LsbReader<'i>> {
        opts.validate()?;
        Ok(LsbReader::new(input, opts))
    }

    /// builds a LSB writer that implements Write
    pub fn encoder<'i>(
        carrier: &'i mut PixelBuffer,
        opts: &LsbCodecOptions,
    ) -> Result<LsbWriter<'i>> {
        opts.validate()?;
        Ok(LsbWriter::new(carrier, opts))
    }
}

/// Embeds `bits` into `buffer`, one bit per carrier slot.
///
/// Capacity is checked before the first slot is touched, on `InsufficientCapacity`
/// the buffer is left exactly as it was. Slots after the last bit stay unmodified.
pub fn embed_bits(
    buffer: &mut PixelBuffer,
    bits: &BitStream,
    opts: &LsbCodecOptions,
) -> Result<()> {
    ensure_capacity(bits.len(), buffer, opts)?;

    let mut writer = LsbWriter::new(buffer, opts);
    for bit in bits.iter() {
        writer.hide_bit(bit)?;
    }
    debug!(
        "Embedded {} bits, {} slots left untouched",
        writer.bits_written(),
        writer.remaining()
    );

    Ok(())
}

/// Reads the frame bitstream back out of `buffer`.
///
/// The length fields are read first, then exactly the declared rest of the frame,
/// the remaining slots are never visited. A frame declaring more bits than the
/// buffer carries fails with `TruncatedFrame` before its payload is read.
pub fn extract_bits(buffer: &PixelBuffer, opts: &LsbCodecOptions) -> Result<BitStream> {
    opts.validate()?;
    let available = SlotLayout::new(buffer, opts).capacity();
    let ensure = |required: usize| {
        if required > available {
            Err(LsbError::TruncatedFrame {
                required,
                available,
            })
        } else {
            Ok(())
        }
    };
    let mut reader = LsbReader::new(buffer, opts);

    ensure(8 * EXTENSION_LENGTH_BYTES)?;
    let extension_len = reader.read_u8()?;
    trace!("Extension length field: {extension_len}");

    ensure(required_bits(extension_len as usize, 0))?;
    let mut frame = Vec::with_capacity(HEADER_BYTES + extension_len as usize);
    frame.push(extension_len);
    let mut extension = vec![0; extension_len as usize];
    reader.read_exact(&mut extension)?;
    frame.extend_from_slice(&extension);

    let payload_len = reader.read_u32::<BigEndian>()?;
    trace!("Payload length field: {payload_len}");
    frame.extend_from_slice(&payload_len.to_be_bytes());

    let total = required_bits(extension_len as usize, payload_len as usize);
    ensure(total)?;
    frame.reserve_exact(payload_len as usize);
    reader
        .by_ref()
        .take(payload_len as u64)
        .read_to_end(&mut frame)?;
    debug!(
        "Extracted a frame of {total} bits out of {available} available, {} bits read",
        reader.bits_read()
    );

    Ok(BitStream::from_bytes(frame))
}

/// All whole bytes `buffer` carries, without looking for a frame.
pub fn extract_raw(buffer: &PixelBuffer, opts: &LsbCodecOptions) -> Result<Vec<u8>> {
    let mut reader = LsbCodec::decoder(buffer, opts)?;
    let mut raw = Vec::with_capacity(reader.remaining() / 8);
    reader.read_to_end(&mut raw)?;

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{self, Frame};
    use crate::media::codec_options::Traversal;
    use crate::test_utils::{prepare_5x5_image, prepare_noise_image};

    #[test]
    fn should_embed_and_extract_a_frame() {
        let mut buffer = PixelBuffer::from(prepare_5x5_image());
        // 64 of 75 bits
        let bits = frame::build("a", b"Hi").unwrap();

        embed_bits(&mut buffer, &bits, &LsbCodecOptions::default()).unwrap();
        let extracted = extract_bits(&buffer, &LsbCodecOptions::default()).unwrap();

        assert_eq!(extracted, bits);
        let frame = Frame::from_bit_stream(&extracted).unwrap();
        assert_eq!(frame.payload(), b"Hi");
    }

    #[test]
    fn should_leave_the_buffer_untouched_when_capacity_is_short() {
        let original = PixelBuffer::from(prepare_5x5_image());
        let mut buffer = original.clone();
        // 75 slots, 80 bits
        let bits = frame::build("txt", &[0; 2]).unwrap();

        let result = embed_bits(&mut buffer, &bits, &LsbCodecOptions::default());
        assert!(matches!(
            result,
            Err(LsbError::InsufficientCapacity {
                required: 80,
                available: 75
            })
        ));
        assert_eq!(buffer, original);
    }

    #[test]
    fn should_not_touch_slots_after_the_frame() {
        let original = PixelBuffer::from(prepare_5x5_image());
        let mut buffer = original.clone();
        let bits = frame::build("a", &[]).unwrap();

        embed_bits(&mut buffer, &bits, &LsbCodecOptions::default()).unwrap();

        // 48 bits end in the 16th pixel
        assert_eq!(buffer.as_raw()[16 * 4..], original.as_raw()[16 * 4..]);
    }

    #[test]
    fn should_report_a_truncated_frame() {
        let mut buffer = PixelBuffer::from(prepare_5x5_image());
        // a frame claiming 1000 payload bytes
        let mut bytes = frame::build("a", &[]).unwrap().into_bytes();
        bytes[2..6].copy_from_slice(&1000u32.to_be_bytes());
        embed_bits(
            &mut buffer,
            &BitStream::from_bytes(bytes),
            &LsbCodecOptions::default(),
        )
        .unwrap();

        assert!(matches!(
            extract_bits(&buffer, &LsbCodecOptions::default()),
            Err(LsbError::TruncatedFrame {
                // 1006 bytes
                required: 8048,
                available: 75
            })
        ));
    }

    #[test]
    fn should_report_a_truncated_header() {
        let buffer = PixelBuffer::new(2, 1, 3, vec![0xff; 6]).unwrap();

        assert!(matches!(
            extract_bits(&buffer, &LsbCodecOptions::default()),
            Err(LsbError::TruncatedFrame { available: 6, .. })
        ));
    }

    #[test]
    fn should_not_find_a_frame_in_noise() {
        let buffer = PixelBuffer::from(prepare_noise_image(64, 64, 0x5eed));
        let result = extract_bits(&buffer, &LsbCodecOptions::default())
            .and_then(|bits| Frame::from_bit_stream(&bits));

        assert!(
            matches!(
                result,
                Err(LsbError::TruncatedFrame { .. }) | Err(LsbError::MalformedFrame(_))
            ),
            "{result:?}"
        );
    }

    #[test]
    fn should_extract_with_the_options_used_for_embedding() {
        let mut buffer = PixelBuffer::from(prepare_noise_image(32, 32, 1));
        let written = LsbCodecOptions::default().with_traversal(Traversal::ColumnMajor);
        embed_bits(&mut buffer, &frame::build("bin", b"xyz").unwrap(), &written).unwrap();

        let frame = Frame::from_bit_stream(&extract_bits(&buffer, &written).unwrap()).unwrap();
        assert_eq!(frame.payload(), b"xyz");
    }

    #[test]
    fn should_dump_every_whole_byte() {
        let buffer = PixelBuffer::from(prepare_5x5_image());
        let raw = extract_raw(&buffer, &LsbCodecOptions::default()).unwrap();

        // 75 slots => 9 bytes
        assert_eq!(raw.len(), 9);
        // (0, 1, 2) (4, 5, 6) (8, 9) => 0100_1001
        assert_eq!(raw[0], 0b0100_1001);
    }

    #[test]
    fn should_validate_options_first() {
        let buffer = PixelBuffer::from(prepare_5x5_image());
        let opts = LsbCodecOptions::default().with_bits_per_channel(0);

        assert!(matches!(
            extract_bits(&buffer, &opts),
            Err(LsbError::InvalidCodecOptions(_))
        ));
        assert!(matches!(
            LsbCodec::decoder(&buffer, &opts),
            Err(LsbError::InvalidCodecOptions(_))
        ));
    }
}
