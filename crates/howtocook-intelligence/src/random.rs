// ABOUTME: Injectable randomness capability and the sampling primitives built on it
// ABOUTME: Thread-local, seeded ChaCha, and scripted sources behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HowToCook MCP Contributors

//! Selection primitives
//!
//! Every random decision in the engine goes through [`RandomSource::next_index`].
//! Production uses [`ThreadRandom`]; `RANDOM_SEED` switches to [`SeededRandom`]
//! for reproducible runs; tests drive policy with [`SequenceRandom`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Source of uniformly distributed indices
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..upper`. Callers never pass `upper == 0`.
    fn next_index(&self, upper: usize) -> usize;
}

/// Process-wide generator backed by `rand::thread_rng`
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Reproducible generator seeded from a `u64`
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededRandom {
    /// Create a generator whose sequence is fully determined by `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, upper: usize) -> usize {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..upper)
    }
}

/// Replays a fixed script of values, cycling when exhausted
///
/// Each value is reduced modulo the requested bound, so a script of zeros always
/// picks the first candidate and makes `shuffle` a fixed rotation.
#[derive(Debug)]
pub struct SequenceRandom {
    script: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// Create a source replaying `script`; an empty script behaves like `[0]`
    #[must_use]
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Source that always returns zero
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&self, upper: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed) % self.script.len();
        self.script[position] % upper
    }
}

/// Uniform random permutation of `items` (Fisher-Yates), leaving the input untouched
pub fn shuffle<T: Clone>(rng: &dyn RandomSource, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Shuffle, then keep the first `min(n, items.len())` elements
///
/// Asking for more than is available returns everything, without padding.
pub fn pick_n<T: Clone>(rng: &dyn RandomSource, items: &[T], n: usize) -> Vec<T> {
    let mut picked = shuffle(rng, items);
    picked.truncate(n.min(items.len()));
    picked
}

/// One uniformly chosen element, or `None` for an empty slice
pub fn choose<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.next_index(items.len()))
    }
}
