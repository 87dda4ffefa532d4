use rand::SeedableRng;
use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::prelude::*;
use rand::rngs::SmallRng;

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_in_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniform in `[0, extent)`, or 0 when the extent is empty.
    pub fn next_in_extent(&mut self, extent: f32) -> f32 {
        if extent > 0.0 {
            self.next_in_range(0.0..extent)
        } else {
            0.0
        }
    }

    /// Uniform in `[-magnitude, magnitude]`; the sign of `magnitude` is ignored.
    pub fn next_symmetric(&mut self, magnitude: f32) -> f32 {
        let magnitude = magnitude.abs();
        if magnitude > 0.0 && magnitude.is_finite() {
            self.next_in_range(-1.0f32..=1.0) * magnitude
        } else {
            0.0
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = Random::from_seed(7);
        let mut b = Random::from_seed(7);
        for _ in 0..10 {
            assert_eq!(a.next_in_extent(100.0), b.next_in_extent(100.0));
        }
    }

    #[test]
    fn empty_extent_yields_zero() {
        let mut rand = Random::from_seed(1);
        assert_eq!(rand.next_in_extent(0.0), 0.0);
        assert_eq!(rand.next_in_extent(-5.0), 0.0);
    }

    #[test]
    fn symmetric_stays_within_magnitude() {
        let mut rand = Random::from_seed(2);
        for _ in 0..1000 {
            let value = rand.next_symmetric(-0.5);
            assert!((-0.5..=0.5).contains(&value));
        }
        assert_eq!(rand.next_symmetric(0.0), 0.0);
        assert_eq!(rand.next_symmetric(f32::NAN), 0.0);
    }

    #[test]
    fn symmetric_handles_largest_magnitude() {
        let mut rand = Random::from_seed(3);
        for _ in 0..100 {
            let value = rand.next_symmetric(f32::MAX);
            assert!(value.is_finite());
            assert!(value.abs() <= f32::MAX);
        }
    }
}
