//! # LSB Core API
//!
//! Hides a payload together with the extension of the file it came from in the
//! least significant bits of an image, and gets both back out again.
//!
//! There are 3 ways in
//! - [`embed`] and [`extract`] working on the bytes of image files
//! - the builders in [`api::embed`] and [`api::extract`]
//! - [`commands`] working on paths, as used by the `lsb` command line tool
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use std::io::Cursor;
//! use lsb_core::media::LsbCodecOptions;
//!
//! let mut png = Cursor::new(Vec::new());
//! image::RgbImage::new(16, 16)
//!     .write_to(&mut png, image::ImageFormat::Png)
//!     .expect("Failed to create a carrier image");
//!
//! let embedded = lsb_core::embed(b"Hello, World!", "txt", png.get_ref(), &LsbCodecOptions::default())
//!     .expect("Failed to hide message in image");
//!
//! let frame = lsb_core::extract(&embedded, &LsbCodecOptions::default())
//!     .expect("Failed to extract message from image");
//! assert_eq!(frame.extension(), "txt");
//! assert_eq!(frame.payload(), b"Hello, World!");
//! ```
//!
//! ## The same with the builders
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let mut png = Cursor::new(Vec::new());
//! image::RgbImage::new(16, 16)
//!     .write_to(&mut png, image::ImageFormat::Png)
//!     .expect("Failed to create a carrier image");
//!
//! let embedded = lsb_core::api::embed::prepare()
//!     .with_payload("Hello, World!")
//!     .with_extension("txt")
//!     .with_container(png.into_inner())
//!     .with_output_format(image::ImageFormat::WebP)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let frame = lsb_core::api::extract::prepare()
//!     .with_image(embedded)
//!     .execute()
//!     .expect("Failed to extract message from image");
//! assert_eq!(frame.payload(), b"Hello, World!");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod bit_stream;
pub mod commands;
pub mod error;
pub mod frame;
pub mod media;
pub mod result;

pub use crate::bit_stream::{BitIterator, BitStream};
pub use crate::error::LsbError;
pub use crate::frame::Frame;
pub use crate::media::{CapacityReport, LsbCodecOptions, PixelBuffer, Traversal};
pub use crate::result::Result;

/// Hides `payload` and `extension` in the container image file `container`.
///
/// Returns the bytes of a new image file in the container's codec, or PNG when that
/// codec is lossy. On any error nothing is produced.
pub fn embed(
    payload: &[u8],
    extension: &str,
    container: &[u8],
    opts: &LsbCodecOptions,
) -> Result<Vec<u8>> {
    let bits = frame::build(extension, payload)?;

    api::embed::embed(&bits, container, None, opts)
}

/// Gets payload and extension back out of an image file written by [`embed`].
pub fn extract(image: &[u8], opts: &LsbCodecOptions) -> Result<Frame> {
    api::extract::extract(image, opts)
}


#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::test_utils::prepare_png_container;

    #[test]
    fn should_embed_and_extract_with_every_option() {
        let container = prepare_png_container(40, 30, 11);
        let options = [
            LsbCodecOptions::default(),
            LsbCodecOptions::default().with_traversal(Traversal::ColumnMajor),
            LsbCodecOptions::default().with_bits_per_channel(4),
            LsbCodecOptions::default().with_color_channel_step_increment(3),
            LsbCodecOptions::default().with_seed(Some(0xdead_beef)),
        ];

        for opts in options {
            let embedded = embed(b"some payload", "dat", &container, &opts).unwrap();
            let frame = extract(&embedded, &opts).unwrap_or_else(|e| panic!("{opts:?}: {e}"));

            assert_eq!(frame.into_parts(), ("dat".to_string(), b"some payload".to_vec()));
        }
    }

    #[test]
    fn should_not_store_anything_about_the_options() {
        let container = prepare_png_container(40, 30, 12);
        let written = LsbCodecOptions::default().with_seed(Some(1));
        let embedded = embed(b"some payload", "dat", &container, &written).unwrap();

        assert!(extract(&embedded, &LsbCodecOptions::default()).is_err());
    }
}
