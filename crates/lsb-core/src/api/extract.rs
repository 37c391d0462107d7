use log::debug;

use crate::error::LsbError;
use crate::frame::Frame;
use crate::media::image::container::Container;
use crate::media::image::lsb_codec::extract_bits;
use crate::media::LsbCodecOptions;
use crate::result::Result;

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    image: Option<Vec<u8>>,
    options: LsbCodecOptions,
}

impl ExtractApi {
    /// Use the given codec options, they must equal the ones used for embedding
    pub fn with_options(mut self, options: LsbCodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Raw bytes of the image file that contains the frame
    pub fn with_image<B: Into<Vec<u8>>>(mut self, image: B) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Execute the extraction and return the hidden payload with its extension
    pub fn execute(self) -> Result<Frame> {
        let Some(image) = self.image else {
            return Err(LsbError::CarrierNotSet);
        };

        extract(&image, &self.options)
    }
}

pub(crate) fn extract(image: &[u8], options: &LsbCodecOptions) -> Result<Frame> {
    options.validate()?;
    let container = Container::decode(image)?;
    let bits = extract_bits(container.pixels(), options)?;
    let frame = Frame::from_bit_stream(&bits)?;
    debug!(
        "Extracted .{} payload of {} bytes from a {:?} image",
        frame.extension(),
        frame.payload().len(),
        container.format()
    );

    Ok(frame)
}
