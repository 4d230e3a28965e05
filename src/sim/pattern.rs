//! Pattern generation
//!
//! A pattern is drawn once per game from a seeded PCG stream, so the same
//! seed always yields the same sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Fixed sequence of symbols for one game instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    symbols: Vec<Symbol>,
}

impl Pattern {
    /// Draw `len` independent uniform symbols from `seed`
    pub fn generate(seed: u64, len: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let symbols = (0..len)
            .map(|_| Symbol::ACTIVE[rng.random_range(0..Symbol::ACTIVE.len())])
            .collect();
        Self { symbols }
    }

    /// Build a pattern from known symbols (tests, replays)
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The first `round` symbols, clamped to the pattern length
    pub fn revealed(&self, round: u16) -> &[Symbol] {
        let end = (round as usize).min(self.symbols.len());
        &self.symbols[..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }
}

/// Seed derived from wall-clock time for production games
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
