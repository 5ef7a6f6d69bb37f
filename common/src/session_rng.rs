use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform choice used to break the final tie between moves.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl RandomSource for SessionRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(17);
        let mut b = SessionRng::new(17);

        let first: Vec<usize> = (0..20).map(|_| a.pick_index(9)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick_index(9)).collect();

        assert_eq!(first, second);
        assert_eq!(a.seed(), 17);
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        let mut rng = SessionRng::from_random();
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }
}
