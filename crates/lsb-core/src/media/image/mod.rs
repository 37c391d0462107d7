pub mod container;
pub mod decoder;
pub mod encoder;
pub(crate) mod iterators;
pub mod lsb_codec;
mod permutation;

pub use container::Container;
pub use iterators::Slot;
pub use lsb_codec::{embed_bits, extract_bits, extract_raw, LsbCodec};
