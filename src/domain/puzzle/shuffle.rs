//! Presentation order of images within a round.
//!
//! The relational store's retrieval order carries no meaning, so every
//! request applies an explicit uniform permutation. The randomness source is
//! injected so tests can pin the order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::foundation::ImageKey;

/// Reorders the images of a single round in place.
pub trait RoundShuffler: Send + Sync {
    fn shuffle(&self, images: &mut [ImageKey]);
}

/// Uniform Fisher-Yates shuffle driven by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomShuffler;

impl RoundShuffler for RandomShuffler {
    fn shuffle(&self, images: &mut [ImageKey]) {
        images.shuffle(&mut rand::thread_rng());
    }
}

/// Deterministic shuffle: every call permutes with a fresh RNG from `seed`.
#[derive(Debug, Clone, Copy)]
pub struct SeededShuffler {
    seed: u64,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RoundShuffler for SeededShuffler {
    fn shuffle(&self, images: &mut [ImageKey]) {
        images.shuffle(&mut StdRng::seed_from_u64(self.seed));
    }
}

/// Leaves images in the order the store returned them.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl RoundShuffler for KeepOrder {
    fn shuffle(&self, _images: &mut [ImageKey]) {}
}
