//! Pseudo-Random Generator
//!
//! Uses xorshift64* for deterministic PRNG. Not cryptographically secure,
//! which is fine: the only consumers are sparkle jitter and color choice.

/// Deterministic xorshift64* generator.
pub struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    /// Create a new RNG with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// xorshift64* step.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        // 53 mantissa bits
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [-range, range].
    pub fn jitter(&mut self, range: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * range
    }

    /// Fair coin flip.
    pub fn flip(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }
}

impl Default for XorShift64Star {
    fn default() -> Self {
        Self::with_seed(0x1234_5678_9ABC_DEF0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let mut a = XorShift64Star::with_seed(42);
        let mut b = XorShift64Star::with_seed(42);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_jitter_bounds() {
        let mut rng = XorShift64Star::with_seed(7);
        for _ in 0..1000 {
            let j = rng.jitter(15.0);
            assert!(j >= -15.0 && j <= 15.0);
        }
    }

    #[test]
    fn test_next_f64_range() {
        let mut rng = XorShift64Star::with_seed(99);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
