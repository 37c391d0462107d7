use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader};
use log::{debug, error};

use crate::error::LsbError;
use crate::media::pixel_buffer::PixelBuffer;
use crate::result::Result;

/// Formats that store every channel byte exactly as given, so embedded bits survive saving.
///
/// All of them carry a magic number, TGA is missing because it cannot be recognized from content.
pub const LOSSLESS_FORMATS: [ImageFormat; 6] = [
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::Pnm,
    ImageFormat::Qoi,
];

pub fn is_lossless(format: ImageFormat) -> bool {
    LOSSLESS_FORMATS.contains(&format)
}

/// Codec an image decoded from `format` is written back with.
///
/// Lossless formats are kept, anything else (JPEG) falls back to PNG.
pub fn output_format_for(format: ImageFormat) -> ImageFormat {
    if is_lossless(format) {
        format
    } else {
        ImageFormat::Png
    }
}

/// A decoded cover image together with the codec it came in.
#[derive(Debug, Clone)]
pub struct Container {
    pixels: PixelBuffer,
    format: ImageFormat,
}

impl Container {
    pub fn new(pixels: PixelBuffer, format: ImageFormat) -> Self {
        Self { pixels, format }
    }

    /// Decodes `bytes`, the codec is guessed from the content, not from a file name.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| LsbError::UnsupportedContainerFormat(ImageError::IoError(e)))?;
        let format = reader.format().unwrap_or(ImageFormat::Png);
        let image = reader.decode().map_err(|e| {
            debug!("Cannot decode container: {e}");
            LsbError::UnsupportedContainerFormat(e)
        })?;
        debug!(
            "Decoded {format:?} container of {}x{} pixels, color type {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(Self {
            pixels: PixelBuffer::from_dynamic(image),
            format,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| {
            error!("Error reading container {path:?}: {source}");
            LsbError::ReadError { source }
        })?;

        Self::decode(&bytes)
    }

    /// codec of the decoded bytes
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    /// Encodes the pixels with `format`, or with [`output_format_for`] the original codec.
    pub fn encode(self, format: Option<ImageFormat>) -> Result<Vec<u8>> {
        let format = format.unwrap_or_else(|| output_format_for(self.format));

        encode(self.pixels, format)
    }
}

/// Writes `pixels` as an image file of `format`.
///
/// Lossy formats are refused with `UnsupportedOutputFormat`, they would destroy the bit planes.
pub fn encode(pixels: PixelBuffer, format: ImageFormat) -> Result<Vec<u8>> {
    if !is_lossless(format) {
        return Err(LsbError::UnsupportedOutputFormat(format));
    }

    let mut bytes = Cursor::new(Vec::new());
    pixels
        .into_dynamic_image()?
        .write_to(&mut bytes, format)
        .map_err(|e| {
            error!("Error encoding {format:?} image: {e}");
            LsbError::UnsupportedContainerFormat(e)
        })?;

    Ok(bytes.into_inner())
}
