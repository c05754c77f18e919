//! Standard-normal noise via the Box–Muller transform.
//!
//! The block sizer consumes normal samples through the `NormalSource` trait
//! rather than a hidden global call, so tests can supply fixed sequences and
//! make the emphasis selection deterministic. Production code uses
//! `BoxMullerSource` over `rand::thread_rng()`; reproducibility across runs
//! is neither guaranteed nor required.

use rand::rngs::ThreadRng;
use rand::Rng;
use std::f64::consts::PI;

/// A source of independent standard-normal samples.
pub trait NormalSource {
    fn sample(&mut self) -> f64;
}

/// Box–Muller transform over two independent uniform(0,1) draws.
#[derive(Debug)]
pub struct BoxMullerSource<R: Rng> {
    rng: R,
}

impl BoxMullerSource<ThreadRng> {
    /// A source backed by the thread-local entropy generator.
    pub fn from_entropy() -> Self {
        BoxMullerSource {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> BoxMullerSource<R> {
    pub fn new(rng: R) -> Self {
        BoxMullerSource { rng }
    }

    // A zero draw would feed ln(0); resample until nonzero.
    fn nonzero_uniform(&mut self) -> f64 {
        loop {
            let u: f64 = self.rng.gen();
            if u != 0.0 {
                return u;
            }
        }
    }
}

impl<R: Rng> NormalSource for BoxMullerSource<R> {
    fn sample(&mut self) -> f64 {
        let u1 = self.nonzero_uniform();
        let u2 = self.nonzero_uniform();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
