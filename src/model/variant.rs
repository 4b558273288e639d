// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Choosing between drawings of the same letter
//!
//! Repeated letters look hand-written when each occurrence picks one of
//! several drawings at random. The picker is injected so tests can lay
//! out text reproducibly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index in `0..count`. `count` is never zero.
pub trait VariantPicker: Send {
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform choice driven by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> VariantPicker for RandomPicker<R> {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Always the first drawing
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstVariant;

impl VariantPicker for FirstVariant {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}
