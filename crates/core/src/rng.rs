//! RNG module - uniform piece draws with a no-repeat rule
//!
//! Pieces are drawn uniformly from the seven kinds. The game asks for a draw
//! that differs from the previous "next" piece; that is done with a plain
//! rejection-sampling loop.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::types::{PieceKind, PIECE_COUNT};

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle with a short period, so
        // take the range from the high half.
        ((self.next_u32() >> 16) * max) >> 16
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
}

impl PieceRandomizer {
    /// Create a new randomizer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw any of the seven pieces
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PIECE_COUNT as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Draw a piece, redrawing until it differs from `excluded`
    pub fn draw_excluding(&mut self, excluded: Option<PieceKind>) -> PieceKind {
        loop {
            let piece = self.draw();
            if Some(piece) != excluded {
                return piece;
            }
        }
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
