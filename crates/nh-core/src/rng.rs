//! Random number generation
//!
//! A game draws from two independent seeded streams. The core stream drives
//! everything that changes game state; the display stream drives cosmetic
//! choices (flavour text, the opening moon message). Both are ChaCha8 so a
//! pair of seeds replays a game exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The pair of seeds a game is started from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seeds {
    pub core: u64,
    pub disp: u64,
}

impl Seeds {
    pub const fn new(core: u64, disp: u64) -> Self {
        Self { core, disp }
    }

    /// Fresh seeds from the operating system
    pub fn from_entropy() -> Self {
        Self {
            core: rand::random(),
            disp: rand::random(),
        }
    }
}

/// Game random number generator
///
/// Only the seed is serialized; deserializing restarts the stream.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// rn2(n): 0..n-1, or 0 when n is 0
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// rnd(n): 1..=n, or 0 when n is 0
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// rn1(x, y): y..y+x-1
    pub fn rn1(&mut self, x: u32, y: i32) -> i32 {
        self.rn2(x) as i32 + y
    }

    /// Uniform value in an inclusive range; `lo` when the range is empty
    pub fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// d(n, m): sum of n rolls of 1..=m
    pub fn dice(&mut self, n: u32, m: u32) -> u32 {
        (0..n).map(|_| self.rnd(m)).sum()
    }

    /// rnl(n): 0..n-1 skewed toward 0 by good luck
    pub fn rnl(&mut self, n: u32, luck: i8) -> u32 {
        if n == 0 {
            return 0;
        }
        let result = self.rn2(n) as i32 - luck as i32;
        result.clamp(0, n as i32 - 1) as u32
    }

    /// True with probability 1/n
    pub fn one_in(&mut self, n: u32) -> bool {
        self.rn2(n) == 0
    }

    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }

    /// Index drawn with probability proportional to its weight
    pub fn weighted(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let mut roll = self.rn2(total);
        for (i, &w) in weights.iter().enumerate() {
            if roll < w {
                return Some(i);
            }
            roll -= w;
        }
        None
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            assert!(rng.rn2(10) < 10);
        }
    }

    #[test]
    fn test_rnd_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rnd(6);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_dice() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.dice(2, 6);
            assert!((2..=12).contains(&n));
        }
    }

    #[test]
    fn test_between_and_rn1() {
        let mut rng = GameRng::new(3);
        for _ in 0..500 {
            let v = rng.between(-2, 4);
            assert!((-2..=4).contains(&v));
            let w = rng.rn1(5, 10);
            assert!((10..15).contains(&w));
        }
        assert_eq!(rng.between(7, 3), 7);
    }

    #[test]
    fn test_weighted_skips_zero_weights() {
        let mut rng = GameRng::new(9);
        for _ in 0..500 {
            let i = rng.weighted(&[0, 3, 0, 1]);
            assert!(matches!(i, Some(1) | Some(3)));
        }
        assert_eq!(rng.weighted(&[0, 0]), None);
        assert_eq!(rng.weighted(&[]), None);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
        }
    }

    #[test]
    fn test_serialize_keeps_seed() {
        let rng = GameRng::new(1234);
        let json = serde_json::to_string(&rng).unwrap();
        let back: GameRng = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed(), 1234);

        let seeds = Seeds::new(1, 2);
        let json = serde_json::to_string(&seeds).unwrap();
        assert_eq!(serde_json::from_str::<Seeds>(&json).unwrap(), seeds);
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.rnd(0), 0);
        assert_eq!(rng.dice(0, 6), 0);
        assert_eq!(rng.dice(2, 0), 0);
        assert_eq!(rng.rnl(0, 3), 0);
    }
}
