use image::{ImageError, ImageFormat};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LsbError {
    /// Represents an extension that cannot be stored in a frame, for example one longer than 255 bytes
    #[error("Invalid extension {extension:?}: {reason}")]
    InvalidExtension { extension: String, reason: String },

    /// Represents a payload whose length does not fit into the 32 bit length field
    #[error("Payload of {0} bytes is too large, at most 4294967295 bytes can be embedded")]
    PayloadTooLarge(usize),

    /// Represents a container that has not enough carrier bits for the whole frame
    #[error(
        "Capacity Error: the container carries {available} bits but the frame requires {required} bits"
    )]
    InsufficientCapacity { required: usize, available: usize },

    /// Represents a frame whose declared length runs past the end of the container
    #[error(
        "Truncated frame: the frame declares {required} bits but the container only carries {available} bits"
    )]
    TruncatedFrame { required: usize, available: usize },

    /// Represents a bitstream that was not produced by the frame builder, for example an image without hidden data
    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    /// Represents a container the image codec could not decode or encode
    #[error("Container format is not supported")]
    UnsupportedContainerFormat(#[source] ImageError),

    /// Represents an output format that would destroy the embedded bits, for example JPEG
    #[error("Output format {0:?} is not lossless")]
    UnsupportedOutputFormat(ImageFormat),

    /// Represents codec options that cannot address a carrier slot
    #[error("Invalid codec options: {0}")]
    InvalidCodecOptions(String),

    /// Represents raw pixel data that does not match the declared dimensions
    #[error("Invalid pixel buffer: {0}")]
    InvalidPixelBuffer(String),

    #[error("API Error: Missing payload")]
    PayloadNotSet,

    #[error("API Error: Missing carrier image")]
    CarrierNotSet,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl LsbError {
    pub(crate) fn invalid_extension(extension: &str, reason: impl Into<String>) -> Self {
        Self::InvalidExtension {
            extension: extension.to_owned(),
            reason: reason.into(),
        }
    }
}
