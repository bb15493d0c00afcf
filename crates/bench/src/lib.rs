use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Runtime budget of a benchmark group, picked from the input length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeTier {
    Small,
    Medium,
    Large,
}

impl RuntimeTier {
    pub fn for_len(len: usize) -> Self {
        if len <= 1_024 {
            Self::Small
        } else if len <= 16_384 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// `(sample size, warm-up ms, measurement ms)`.
    fn budget(self) -> (usize, u64, u64) {
        match self {
            Self::Small => (15, 100, 200),
            Self::Medium => (15, 500, 1_000),
            Self::Large => (10, 800, 1_500),
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        let (samples, warm_up_ms, measure_ms) = self.budget();
        group.sample_size(samples);
        group.warm_up_time(Duration::from_millis(warm_up_ms));
        group.measurement_time(Duration::from_millis(measure_ms));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Index in `-(len + 1)..=len`; the two extremes address nothing.
pub fn random_signed_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> isize {
    let bound = i64::try_from(len).unwrap_or(i64::MAX - 1);
    let index = rng.random_range(-bound - 1..=bound);
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// `(from, to)` pairs for windowed reads over a sequence of length `len`.
pub fn random_windows<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize) -> Vec<(isize, isize)> {
    (0..count)
        .map(|_| (random_signed_index(rng, len), random_signed_index(rng, len)))
        .collect()
}
