use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Stream of random draws consumed by the path generator.
pub trait RandomSource {
    /// Uniform integer in `[lo, hi)`. Returns `lo` when the range is empty.
    fn next_int(&mut self, lo: i32, hi: i32) -> i32;
    /// Uniform float in `[lo, hi]`. Returns `lo` when the range is empty.
    fn next_float(&mut self, lo: f64, hi: f64) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_int(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).next_int(lo, hi)
    }

    fn next_float(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).next_float(lo, hi)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> RngSource<R> {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    fn next_float(&mut self, lo: f64, hi: f64) -> f64 {
        // NaN bounds fall through to `lo` as well
        if !(lo < hi) {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays fixed draws, cycling once a script is exhausted.
///
/// Integer and float draws are scripted independently, in the order the
/// generator requests them. An empty script answers with the range's lower
/// bound. Values are returned as scripted, without clamping to the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    ints: Vec<i32>,
    floats: Vec<f64>,
    int_cursor: usize,
    float_cursor: usize,
}

impl ScriptedRandom {
    pub fn new(ints: Vec<i32>, floats: Vec<f64>) -> ScriptedRandom {
        ScriptedRandom {
            ints,
            floats,
            int_cursor: 0,
            float_cursor: 0,
        }
    }

    /// Number of draws served so far, `(ints, floats)`.
    pub fn draws(&self) -> (usize, usize) {
        (self.int_cursor, self.float_cursor)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, lo: i32, _hi: i32) -> i32 {
        let value = match self.ints.len() {
            0 => lo,
            len => self.ints[self.int_cursor % len],
        };
        self.int_cursor += 1;
        value
    }

    fn next_float(&mut self, lo: f64, _hi: f64) -> f64 {
        let value = match self.floats.len() {
            0 => lo,
            len => self.floats[self.float_cursor % len],
        };
        self.float_cursor += 1;
        value
    }
}
