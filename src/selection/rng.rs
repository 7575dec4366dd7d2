/// Mulberry32: a 32-bit counter-based generator.
///
/// The whole state is the `u32` counter, carried by value. Output matches the
/// widely used JavaScript reference for the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

impl Mulberry32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next draw as a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform index in `0..bound` via `floor(r * bound)`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        // r < 1, so the product stays below `bound`
        (self.next_f64() * bound as f64).floor() as usize
    }
}
