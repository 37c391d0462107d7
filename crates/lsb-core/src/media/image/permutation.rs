//! Pseudo random visiting order for carrier slots.
//!
//! Spreading the frame over the whole image instead of packing it into the
//! first rows. The seed decides WHERE bits go, it does not protect WHAT is hidden.

use fastrand::Rng;

/// Deterministic shuffle of `0..length`, equal seeds give equal orders.
#[derive(Debug, Clone)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    pub fn from_seed(seed: u64, length: usize) -> Self {
        let mut rng = Rng::with_seed(seed);
        let mut indices: Vec<usize> = (0..length).collect();

        // Fisher-Yates shuffle
        for i in (1..length).rev() {
            let j = rng.usize(0..=i);
            indices.swap(i, j);
        }

        Permutation { indices }
    }
}

impl IntoIterator for Permutation {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.into_iter()
    }
}
