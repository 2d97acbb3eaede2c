//! Randomness for the computer opponent.
//!
//! The opponent never touches ambient randomness. Random tie-breaks go
//! through the `IndexPicker` trait so callers can inject either a seeded
//! `GameRng` or a `ScriptedPicker` with a fixed sequence.
//!
//! ```
//! use morpion::core::{GameRng, IndexPicker};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick(4), b.pick(4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform indices into a non-empty candidate list.
pub trait IndexPicker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Pick one element of a slice, or `None` when it is empty.
pub fn choose<T: Copy, P: IndexPicker + ?Sized>(picker: &mut P, items: &[T]) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[picker.pick(items.len())])
    }
}

/// Deterministic RNG backed by ChaCha8.
///
/// Same seed produces an identical sequence of picks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl IndexPicker for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the candidate count, so a script
/// never produces an out-of-range pick.
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    /// Create a picker replaying `script`. An empty script always picks 0.
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of picks served so far.
    #[must_use]
    pub fn picks_served(&self) -> usize {
        self.cursor
    }
}

impl IndexPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % len
    }
}
