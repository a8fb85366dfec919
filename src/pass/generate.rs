//! Password generation.

use clap::ValueEnum;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{CharacterClasses, assemble_pool};
use crate::settings::Settings;

/// How a pool index is drawn for each character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// Round a unit draw scaled by the pool size. Can land one past the last
    /// character, which drops that character from the output.
    #[default]
    Rounded,
    /// Closed range over the pool. Output always has the requested length.
    Uniform,
}

/// Map a unit draw in `[0, 1)` onto `[0, len]`, upper bound included.
#[inline]
fn rounded_index(unit: f64, len: usize) -> usize {
    (unit * len as f64).round() as usize
}

/// Build a password of up to `length` characters from `pool`.
///
/// An index past the end of the pool appends nothing, so [`Sampling::Rounded`]
/// may return fewer characters than asked for. An empty pool gives an empty
/// string.
pub fn generate<R: Rng>(pool: &[char], length: usize, sampling: Sampling, rng: &mut R) -> String {
    let mut password = String::with_capacity(length);
    if pool.is_empty() {
        return password;
    }

    for _ in 0..length {
        let idx = match sampling {
            Sampling::Rounded => rounded_index(rng.random::<f64>(), pool.len()),
            Sampling::Uniform => rng.random_range(0..pool.len()),
        };
        if let Some(&c) = pool.get(idx) {
            password.push(c);
        }
    }

    password
}

/// Pool assembly plus sampling, bound to a symbol alphabet and an RNG.
pub struct Generator<R> {
    symbols: String,
    sampling: Sampling,
    rng: R,
}

impl Generator<ThreadRng> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.symbols, settings.sampling, rand::rng())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(symbols: &str, sampling: Sampling, rng: R) -> Self {
        Self {
            symbols: symbols.to_string(),
            sampling,
            rng,
        }
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn pool_size(&self, classes: &CharacterClasses) -> usize {
        assemble_pool(classes, &self.symbols).len()
    }

    pub fn password(&mut self, classes: &CharacterClasses, length: usize) -> Zeroizing<String> {
        let pool = assemble_pool(classes, &self.symbols);
        let password = Zeroizing::new(generate(&pool, length, self.sampling, &mut self.rng));
        debug!(
            pool = pool.len(),
            requested = length,
            produced = password.chars().count(),
            sampling = ?self.sampling,
            "password generated"
        );
        password
    }
}
