use std::ops::Range;
use std::vec;

use crate::media::codec_options::{LsbCodecOptions, Traversal};
use crate::media::image::permutation::Permutation;
use crate::media::pixel_buffer::PixelBuffer;

/// One carrier position: a channel byte of the raw pixel data and the bit plane in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub offset: usize,
    pub plane: u8,
}

/// Maps the n-th carrier slot to its position in the raw pixel data.
///
/// The visiting order is
/// 1. pixels in `traversal` order,
/// 2. the used channels of a pixel in storage order, alpha excluded when skipped,
/// 3. every `color_channel_step_increment`-th channel of that sequence,
/// 4. `bits_per_channel` bit planes of a channel, lowest plane first.
#[derive(Debug, Clone)]
pub(crate) struct SlotLayout {
    width: usize,
    height: usize,
    channels: usize,
    take: usize,
    step: usize,
    bits: usize,
    traversal: Traversal,
    visited_channels: usize,
}

impl SlotLayout {
    /// the options are expected to be validated
    pub fn new(buffer: &PixelBuffer, options: &LsbCodecOptions) -> Self {
        let channels = buffer.channels() as usize;
        let take = if options.skip_alpha_channel && buffer.has_alpha() {
            channels - 1
        } else {
            channels
        };
        let step = options.color_channel_step_increment.max(1);
        let visited_channels = (buffer.pixel_count() * take).div_ceil(step);

        Self {
            width: buffer.width() as usize,
            height: buffer.height() as usize,
            channels,
            take,
            step,
            bits: options.bits_per_channel.clamp(1, 8) as usize,
            traversal: options.traversal,
            visited_channels,
        }
    }

    /// number of slots, i.e. of bits the buffer can carry
    pub fn capacity(&self) -> usize {
        self.visited_channels * self.bits
    }

    pub fn slot(&self, n: usize) -> Slot {
        let channel = (n / self.bits) * self.step;
        let plane = (n % self.bits) as u8;
        let pixel = channel / self.take;
        let (x, y) = match self.traversal {
            Traversal::RowMajor => (pixel % self.width, pixel / self.width),
            Traversal::ColumnMajor => (pixel / self.height, pixel % self.height),
        };

        Slot {
            offset: (y * self.width + x) * self.channels + channel % self.take,
            plane,
        }
    }

    /// all slots, scattered by `seed` when given
    pub fn into_slots(self, seed: Option<u64>) -> Slots {
        let order = match seed {
            Some(seed) => Order::Scattered(Permutation::from_seed(seed, self.capacity()).into_iter()),
            None => Order::Sequential(0..self.capacity()),
        };

        Slots {
            layout: self,
            order,
        }
    }
}

enum Order {
    Sequential(Range<usize>),
    Scattered(vec::IntoIter<usize>),
}

/// Iterator over the carrier slots of a buffer, in embedding order.
pub(crate) struct Slots {
    layout: SlotLayout,
    order: Order,
}

impl Iterator for Slots {
    type Item = Slot;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = match &mut self.order {
            Order::Sequential(range) => range.next(),
            Order::Scattered(order) => order.next(),
        }?;

        Some(self.layout.slot(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.order {
            Order::Sequential(range) => range.size_hint(),
            Order::Scattered(order) => order.size_hint(),
        }
    }
}

impl ExactSizeIterator for Slots {}
