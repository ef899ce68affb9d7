//! Uniform random sources shared by the lightning controller and the particle pool

/// A uniform generator over [0, 1).
///
/// A single source is shared by every system in a frame, so the order in
/// which systems draw from it is part of their observable behavior.
pub trait RandomSource {
    /// Returns a float in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Returns a float in [min, max)
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns an f32 in [min, max). A draw that rounds onto `max` is pulled
    /// back to the largest f32 below it.
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let value = self.range(min as f64, max as f64) as f32;
        if value >= max && max > min {
            next_below(max)
        } else {
            value
        }
    }
}

/// Largest finite f32 strictly less than `x`
fn next_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Lightweight xorshift64 PRNG — no external crate needed
#[derive(Clone, Debug)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Xorshift64 {
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill the mantissa exactly, so 1.0 is never produced
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are clamped into [0, 1). An empty script always yields 0.0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Total number of values handed out so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        let Some(&v) = self.values.get(self.cursor) else {
            return 0.0;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
