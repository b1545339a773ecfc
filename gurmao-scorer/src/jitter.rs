//! Randomness injected into scoring.
//!
//! Every scored restaurant receives a small bonus in `[0, 5)` so that
//! identical queries do not always produce identical orderings. The source
//! of that bonus is a [`Jitter`] passed in by the caller: tests use
//! [`NoJitter`] or a [`SeededJitter`], production uses [`SystemJitter`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Exclusive upper bound of a jitter bonus.
pub const MAX_JITTER: f64 = 5.0;

/// Source of the per-restaurant variety bonus.
///
/// Implementations should return values in `0.0..MAX_JITTER`; the scorer
/// clamps anything else into range and treats non-finite values as zero.
///
/// # Examples
///
/// ```rust
/// use gurmao_scorer::Jitter;
///
/// struct Half;
///
/// impl Jitter for Half {
///     fn next_bonus(&mut self) -> f64 {
///         0.5
///     }
/// }
///
/// assert_eq!(Half.next_bonus(), 0.5);
/// ```
pub trait Jitter {
    /// Return the next bonus.
    fn next_bonus(&mut self) -> f64;
}

/// Jitter disabled: every bonus is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn next_bonus(&mut self) -> f64 {
        0.0
    }
}

/// The same bonus on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn next_bonus(&mut self) -> f64 {
        self.0
    }
}

/// Reproducible jitter from a seeded `ChaCha8` stream.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: ChaCha8Rng,
}

impl SeededJitter {
    /// Create a stream seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Jitter for SeededJitter {
    fn next_bonus(&mut self) -> f64 {
        self.rng.gen_range(0.0..MAX_JITTER)
    }
}

/// Jitter drawn from operating-system entropy.
#[derive(Debug, Clone)]
pub struct SystemJitter {
    rng: StdRng,
}

impl SystemJitter {
    /// Create a generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SystemJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Jitter for SystemJitter {
    fn next_bonus(&mut self) -> f64 {
        self.rng.gen_range(0.0..MAX_JITTER)
    }
}

/// Configurable choice of jitter source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JitterStrategy {
    /// No jitter; scoring is fully deterministic.
    None,
    /// Reproducible jitter from a fixed seed.
    Seeded {
        /// Stream seed.
        seed: u64,
    },
    /// Jitter from operating-system entropy.
    #[default]
    System,
}

impl JitterStrategy {
    /// Build the jitter source for this strategy.
    #[must_use]
    pub fn build(self) -> Box<dyn Jitter + Send> {
        match self {
            Self::None => Box::new(NoJitter),
            Self::Seeded { seed } => Box::new(SeededJitter::new(seed)),
            Self::System => Box::new(SystemJitter::new()),
        }
    }
}
