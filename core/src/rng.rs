//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through the single GenRng seeded from
//! the run's configured seed, passed by `&mut` into every
//! synthesis call. Draw order is part of the output contract:
//! reordering draws changes every record downstream.

use rand::{distributions::WeightedIndex, seq::index, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64Mcg;

use crate::error::{GenError, GenResult};

/// The run's deterministic RNG stream.
pub struct GenRng {
    pub seed: u64,
    inner: Pcg64Mcg,
}

impl GenRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an integer in [lo, hi], both ends inclusive.
    pub fn range_i64(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        self.inner.gen_range(lo..=hi)
    }

    /// Roll a float in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Integer jitter in {-1, 0, +1}.
    pub fn jitter(&mut self) -> i64 {
        self.range_i64(-1, 1)
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot pick from an empty slice");
        &items[self.inner.gen_range(0..items.len())]
    }

    /// `k` distinct indices from [0, n), in draw order. `k` is clipped to `n`.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        index::sample(&mut self.inner, n, k.min(n)).into_vec()
    }

    /// Index into `weights` chosen proportionally to weight.
    pub fn weighted_index(&mut self, weights: &[f64]) -> GenResult<usize> {
        let dist = WeightedIndex::<f64>::new(weights)
            .map_err(|e| GenError::Distribution(format!("weights {weights:?}: {e}")))?;
        Ok(dist.sample(&mut self.inner))
    }

    /// |N(0, sigma)|: density decays away from zero.
    pub fn half_normal(&mut self, sigma: f64) -> GenResult<f64> {
        let normal = Normal::new(0.0, sigma)
            .map_err(|e| GenError::Distribution(format!("half-normal sigma={sigma}: {e}")))?;
        Ok(normal.sample(&mut self.inner).abs())
    }
}
