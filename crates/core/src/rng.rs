//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm: each bag contains one of
//! each piece (I, O, T, S, Z, J, L), shuffled with Fisher-Yates. Draws come
//! off the front of the queue; shuffled bags are appended at the back.
//!
//! The random source is injectable through [`RandomSource`]. A simple LCG is
//! provided for deterministic play and testing.

use std::collections::VecDeque;

use crate::types::PieceKind;

/// Source of randomness for shuffling.
pub trait RandomSource {
    /// Uniform value in `[0, max)`. `max` is never zero.
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() >> 16) as u64 * max as u64 >> 16) as u32
    }
}

/// Shuffle a slice in place using Fisher-Yates
pub fn shuffle<T>(rng: &mut impl RandomSource, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_range((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue<R = SimpleRng> {
    /// Upcoming pieces in draw order
    queue: VecDeque<PieceKind>,
    rng: R,
}

impl PieceQueue<SimpleRng> {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> PieceQueue<R> {
    /// Create a queue drawing its shuffles from `rng`
    pub fn with_source(rng: R) -> Self {
        Self {
            queue: VecDeque::with_capacity(14),
            rng,
        }
    }

    /// Append one freshly shuffled bag
    fn refill_bag(&mut self) {
        let mut bag = PieceKind::ALL;
        shuffle(&mut self.rng, &mut bag);
        self.queue.extend(bag);
    }

    /// Draw the next piece, refilling when the queue is empty
    pub fn draw(&mut self) -> PieceKind {
        if self.queue.is_empty() {
            self.refill_bag();
        }
        match self.queue.pop_front() {
            Some(kind) => kind,
            None => unreachable!("refill_bag always adds seven pieces"),
        }
    }

    /// The next `n` pieces in draw order, without consuming them.
    ///
    /// Tops the queue up with whole bags as needed; pieces already queued keep
    /// their place, so later draws return exactly what was previewed.
    pub fn peek_queue(&mut self, n: usize) -> impl Iterator<Item = PieceKind> + '_ {
        while self.queue.len() < n {
            self.refill_bag();
        }
        self.queue.iter().copied().take(n)
    }

    /// Number of pieces currently queued
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
