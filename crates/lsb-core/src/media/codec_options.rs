use crate::error::LsbError;
use crate::result::Result;

/// Options for LSB (Least Significant Bit) image embedding
///
/// The defaults are the pinned format convention: row-major pixels, the
/// channels R, G and B of each pixel in that order, alpha left alone, one bit
/// in the least significant bit of every channel. Embed and extract must be
/// called with equal options, nothing about them is stored in the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsbCodecOptions {
    /// Order in which the pixels of the image are visited.
    pub traversal: Traversal,

    /// If true no alpha channel would be used for embedding,
    /// this reduces then the capacity by one bit per pixel
    pub skip_alpha_channel: bool,

    /// Determines the step width when iterating over the color channels.
    /// For example `2` would move from (R)GBA to RG(B)A.
    /// Depending on if the alpha channel is skipped (`skip_alpha_channel`) it would either
    /// not count alpha at all or it does.
    ///
    /// Note this number influences the capacity directly.
    pub color_channel_step_increment: usize,

    /// How many of the lowest bits of a color channel carry data, 1 to 8.
    /// The lowest bit plane is filled first.
    pub bits_per_channel: u8,

    /// When set, all carrier slots are visited in a pseudo random order derived from the seed
    /// instead of the traversal order.
    pub seed: Option<u64>,
}

impl Default for LsbCodecOptions {
    fn default() -> Self {
        Self {
            traversal: Traversal::RowMajor,
            skip_alpha_channel: true,
            color_channel_step_increment: 1,
            bits_per_channel: 1,
            seed: None,
        }
    }
}

impl LsbCodecOptions {
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_alpha_channel(mut self, use_alpha: bool) -> Self {
        self.skip_alpha_channel = !use_alpha;
        self
    }

    pub fn with_color_channel_step_increment(mut self, step: usize) -> Self {
        self.color_channel_step_increment = step;
        self
    }

    pub fn with_bits_per_channel(mut self, bits: u8) -> Self {
        self.bits_per_channel = bits;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=8).contains(&self.bits_per_channel) {
            return Err(LsbError::InvalidCodecOptions(format!(
                "bits per channel must be between 1 and 8, got {}",
                self.bits_per_channel
            )));
        }
        if self.color_channel_step_increment == 0 {
            return Err(LsbError::InvalidCodecOptions(
                "the color channel step increment must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Pixel visiting order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// row by row, left to right within a row
    #[default]
    RowMajor,
    /// column by column, top to bottom within a column
    ColumnMajor,
}
