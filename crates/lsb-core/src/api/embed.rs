use image::ImageFormat;
use log::{debug, info};

use crate::error::LsbError;
use crate::bit_stream::BitStream;
use crate::frame;
use crate::media::image::container::{self, Container};
use crate::media::image::lsb_codec::embed_bits;
use crate::media::LsbCodecOptions;
use crate::result::Result;

use super::DEFAULT_EXTENSION;

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    payload: Option<Vec<u8>>,
    extension: Option<String>,
    container: Option<Vec<u8>>,
    output_format: Option<ImageFormat>,
    options: LsbCodecOptions,
}

impl EmbedApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: LsbCodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The bytes to hide
    pub fn with_payload<B: Into<Vec<u8>>>(mut self, payload: B) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Extension of the hidden file, without the leading dot.
    /// When never set, `bin` is stored.
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Raw bytes of the cover image file, in any supported codec
    pub fn with_container<B: Into<Vec<u8>>>(mut self, container: B) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Codec of the resulting image.
    /// By default the codec of the container is kept, or PNG when it is lossy.
    pub fn with_output_format(mut self, format: ImageFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Same as [`EmbedApi::with_output_format`], `None` keeps the default
    pub fn use_output_format(mut self, format: Option<ImageFormat>) -> Self {
        self.output_format = format;
        self
    }

    /// Executes the embedding and returns the bytes of the new image file
    pub fn execute(self) -> Result<Vec<u8>> {
        let Some(payload) = self.payload else {
            return Err(LsbError::PayloadNotSet);
        };
        let Some(container) = self.container else {
            return Err(LsbError::CarrierNotSet);
        };
        let extension = self
            .extension
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let bits = frame::build(&extension, &payload)?;

        embed(&bits, &container, self.output_format, &self.options)
    }
}

/// Everything that can be checked without touching pixels is checked before decoding.
pub(crate) fn embed(
    bits: &BitStream,
    container: &[u8],
    output_format: Option<ImageFormat>,
    options: &LsbCodecOptions,
) -> Result<Vec<u8>> {
    options.validate()?;
    if let Some(format) = output_format.filter(|f| !container::is_lossless(*f)) {
        return Err(LsbError::UnsupportedOutputFormat(format));
    }

    let mut container = Container::decode(container)?;
    embed_bits(container.pixels_mut(), bits, options)?;
    debug!(
        "Embedded a frame of {} bits into a {:?} container",
        bits.len(),
        container.format()
    );

    let format = output_format.unwrap_or_else(|| container::output_format_for(container.format()));
    if format != container.format() {
        info!(
            "Writing {format:?} instead of the {:?} container format",
            container.format()
        );
    }

    container.encode(Some(format))
}
