/// Deterministic linear-congruential sequence.
///
/// `state' = (state * 1103515245 + 12345) mod 2^31`, emitted as `state' / 2^31`. The same
/// seed always yields the same stream; there is no other entropy source. One instance is
/// owned by each render request and threaded through every stage that draws from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededSequence {
    state: u32,
    draws: u64,
}

impl SeededSequence {
    const MULTIPLIER: u64 = 1_103_515_245;
    const INCREMENT: u64 = 12_345;
    const MODULUS_MASK: u64 = 0x7fff_ffff;
    const MODULUS: f64 = 2_147_483_648.0;

    /// Start a sequence from `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed,
            draws: 0,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        // Reducing mod 2^64 first is exact because 2^31 divides 2^64.
        let next = (u64::from(self.state)
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT))
            & Self::MODULUS_MASK;
        self.state = next as u32;
        self.draws += 1;
        f64::from(self.state) / Self::MODULUS
    }

    /// Next value scaled into `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seed/sequence.rs"]
mod tests;
