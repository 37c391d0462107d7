use log::debug;

use crate::error::LsbError;
use crate::frame::{HEADER_BYTES, MAX_PAYLOAD_LEN};
use crate::media::codec_options::LsbCodecOptions;
use crate::media::image::iterators::SlotLayout;
use crate::media::pixel_buffer::PixelBuffer;
use crate::result::Result;

/// Carrier bits a frame with the given field lengths occupies.
///
/// Saturates at `usize::MAX`, lengths read from an image can exceed what fits in a `usize`.
pub fn required_bits(extension_len: usize, payload_len: usize) -> usize {
    HEADER_BYTES
        .checked_add(extension_len)
        .and_then(|bytes| bytes.checked_add(payload_len))
        .and_then(|bytes| bytes.checked_mul(8))
        .unwrap_or(usize::MAX)
}

/// Number of bits `buffer` can carry under `options`, computed fresh on every call.
pub fn capacity(buffer: &PixelBuffer, options: &LsbCodecOptions) -> Result<usize> {
    options.validate()?;

    Ok(SlotLayout::new(buffer, options).capacity())
}

/// Fails with `InsufficientCapacity` when `required` bits do not fit into `buffer`.
pub fn ensure_capacity(
    required: usize,
    buffer: &PixelBuffer,
    options: &LsbCodecOptions,
) -> Result<()> {
    let available = capacity(buffer, options)?;
    debug!("Capacity check: {required} bits required, {available} bits available");
    if required > available {
        return Err(LsbError::InsufficientCapacity {
            required,
            available,
        });
    }

    Ok(())
}

/// What a container can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    /// carrier bits
    pub bits: usize,
}

impl CapacityReport {
    pub fn of(buffer: &PixelBuffer, options: &LsbCodecOptions) -> Result<Self> {
        Ok(Self {
            width: buffer.width(),
            height: buffer.height(),
            bits: capacity(buffer, options)?,
        })
    }

    /// largest payload that still fits next to an extension of `extension_len` bytes
    pub fn max_payload_bytes(&self, extension_len: usize) -> usize {
        (self.bits / 8)
            .saturating_sub(HEADER_BYTES + extension_len)
            .min(MAX_PAYLOAD_LEN as usize)
    }
}
