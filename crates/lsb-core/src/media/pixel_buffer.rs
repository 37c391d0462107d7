use image::{DynamicImage, ImageBuffer, RgbImage, RgbaImage};

use crate::error::LsbError;
use crate::result::Result;

/// Decoded pixels handed to the codec.
///
/// Pixels are stored row by row, the channels of a pixel interleaved, one byte per channel.
/// With 2 or 4 channels the last one is alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if !(1..=4).contains(&channels) {
            return Err(LsbError::InvalidPixelBuffer(format!(
                "{channels} channels per pixel are not supported"
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(LsbError::InvalidPixelBuffer(format!(
                "{width}x{height} pixels with {channels} channels need {expected} bytes, got {}",
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn from_rgb(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: 3,
            data: image.into_raw(),
        }
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: 4,
            data: image.into_raw(),
        }
    }

    /// Any color type ends up as 8 bit RGB, or RGBA when the image carries alpha.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        if image.color().has_alpha() {
            Self::from_rgba(image.to_rgba8())
        } else {
            Self::from_rgb(image.to_rgb8())
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn has_alpha(&self) -> bool {
        self.channels % 2 == 0
    }

    /// channels of the pixel at column `x` and row `y`
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = self.offset(x, y, 0);
        &self.data[start..start + self.channels as usize]
    }

    /// index into the raw data of channel `c` of the pixel at (`x`, `y`)
    #[inline]
    pub fn offset(&self, x: u32, y: u32, c: u8) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize + c as usize
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_dynamic_image(self) -> Result<DynamicImage> {
        let (w, h, channels) = (self.width, self.height, self.channels);
        let len = self.data.len();
        match channels {
            1 => ImageBuffer::from_raw(w, h, self.data).map(DynamicImage::ImageLuma8),
            2 => ImageBuffer::from_raw(w, h, self.data).map(DynamicImage::ImageLumaA8),
            3 => ImageBuffer::from_raw(w, h, self.data).map(DynamicImage::ImageRgb8),
            _ => ImageBuffer::from_raw(w, h, self.data).map(DynamicImage::ImageRgba8),
        }
        .ok_or_else(|| {
            LsbError::InvalidPixelBuffer(format!(
                "{len} bytes do not form {w}x{h} pixels with {channels} channels"
            ))
        })
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        Self::from_rgb(image)
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        Self::from_rgba(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_reject_data_not_matching_the_dimensions() {
        assert!(matches!(
            PixelBuffer::new(2, 2, 3, vec![0; 11]),
            Err(LsbError::InvalidPixelBuffer(_))
        ));
        assert!(matches!(
            PixelBuffer::new(2, 2, 5, vec![0; 20]),
            Err(LsbError::InvalidPixelBuffer(_))
        ));
        assert!(PixelBuffer::new(2, 2, 3, vec![0; 12]).is_ok());
    }

    #[test]
    fn should_address_pixels_row_by_row() {
        let img = prepare_5x5_image();
        let buffer = PixelBuffer::from(img.clone());

        assert_eq!(buffer.pixel(1, 0), &img.get_pixel(1, 0).0[..]);
        assert_eq!(buffer.pixel(0, 1), &img.get_pixel(0, 1).0[..]);
        assert_eq!(buffer.offset(0, 1, 2), 5 * 4 + 2);
    }

    #[test]
    fn should_keep_alpha_only_when_the_image_has_it() {
        let rgb = DynamicImage::new_rgb16(3, 3);
        let rgba = DynamicImage::new_luma_a8(3, 3);

        assert_eq!(PixelBuffer::from_dynamic(rgb).channels(), 3);
        let buffer = PixelBuffer::from_dynamic(rgba);
        assert_eq!(buffer.channels(), 4);
        assert!(buffer.has_alpha());
    }

    #[test]
    fn should_turn_back_into_the_same_image() {
        let img = prepare_5x5_image();
        let buffer = PixelBuffer::from(img.clone());

        assert_eq!(buffer.into_dynamic_image().unwrap().to_rgba8(), img);
    }

    #[test]
    fn should_not_turn_mismatching_data_into_an_image() {
        let buffer = PixelBuffer {
            width: 2,
            height: 2,
            channels: 3,
            data: vec![0; 11],
        };

        assert!(matches!(
            buffer.into_dynamic_image(),
            Err(LsbError::InvalidPixelBuffer(_))
        ));
    }
}
