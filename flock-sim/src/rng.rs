//! Seedable RNG for spawning. Deterministic, not cryptographic.

/// SplitMix64: tiny, fast, and good enough for scattering sheep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f32_unit(&mut self) -> f32 {
        // 24 bits of mantissa
        let x = (self.next_u64() >> 40) as u32;
        (x as f32) / ((1u32 << 24) as f32)
    }

    /// Uniform float in `[min, max)`.
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min <= max);
        min + (max - min) * self.next_f32_unit()
    }

    /// Uniform index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0.
    pub fn next_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "next_index needs a non-empty range");
        (self.next_u64() % len as u64) as usize
    }
}
