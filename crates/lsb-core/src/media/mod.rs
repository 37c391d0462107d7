pub mod capacity;
pub mod codec_options;
pub mod image;
pub mod pixel_buffer;

pub use capacity::CapacityReport;
pub use codec_options::{LsbCodecOptions, Traversal};
pub use pixel_buffer::PixelBuffer;
