//! # Random Sources
//!
//! The random interface the generators draw from, plus a scripted source for
//! reproducing exact decision sequences.

use rand::Rng;
use std::collections::VecDeque;

/// Source of the two kinds of draws the generators make.
///
/// Implemented for every [`rand::Rng`], so a seeded `StdRng` works directly.
pub trait SlotRandom {
    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f32;

    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_int(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> SlotRandom for R {
    fn next_float(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn next_int(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Shuffles a slice in place with Fisher-Yates driven by [`SlotRandom::next_int`].
///
/// Walks from the back, swapping each element with one at or before it, so a
/// source that always answers `bound - 1` leaves the slice untouched.
pub fn shuffle<T, R: SlotRandom + ?Sized>(items: &mut [T], random: &mut R) {
    for i in (1..items.len()).rev() {
        let j = random.next_int(i + 1);
        items.swap(i, j);
    }
}

/// Float returned once the float script runs out. Fails every gate.
const EXHAUSTED_FLOAT: f32 = 0.99;

/// Random source that replays scripted draws.
///
/// Floats come from the float script and integers from the integer script.
/// Scripted integers are clamped to `bound - 1`. Once a script is exhausted,
/// floats answer `0.99` and integers answer `bound - 1`, which keeps shuffles
/// in their input order.
///
/// # Examples
///
/// ```
/// use enchant_slots::{ScriptedRandom, SlotRandom};
///
/// let mut random = ScriptedRandom::new([0.1], [7]);
/// assert_eq!(random.next_float(), 0.1);
/// assert_eq!(random.next_int(3), 2);
/// assert_eq!(random.next_int(5), 4);
/// assert_eq!(random.float_draws(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f32>,
    ints: VecDeque<usize>,
    float_draws: usize,
    int_draws: usize,
}

impl ScriptedRandom {
    /// Creates a source from float and integer scripts.
    pub fn new(
        floats: impl IntoIterator<Item = f32>,
        ints: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            floats: floats.into_iter().collect(),
            ints: ints.into_iter().collect(),
            float_draws: 0,
            int_draws: 0,
        }
    }

    /// Creates a source with only a float script; shuffles keep input order.
    pub fn with_floats(floats: impl IntoIterator<Item = f32>) -> Self {
        Self::new(floats, [])
    }

    /// Number of floats drawn so far.
    pub fn float_draws(&self) -> usize {
        self.float_draws
    }

    /// Number of integers drawn so far.
    pub fn int_draws(&self) -> usize {
        self.int_draws
    }

    /// Scripted floats not yet consumed.
    pub fn remaining_floats(&self) -> usize {
        self.floats.len()
    }
}

impl SlotRandom for ScriptedRandom {
    fn next_float(&mut self) -> f32 {
        self.float_draws += 1;
        self.floats.pop_front().unwrap_or(EXHAUSTED_FLOAT)
    }

    fn next_int(&mut self, bound: usize) -> usize {
        self.int_draws += 1;
        let last = bound.saturating_sub(1);
        self.ints.pop_front().map_or(last, |v| v.min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exhausted_script_keeps_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        let mut random = ScriptedRandom::default();
        shuffle(&mut items, &mut random);

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(random.int_draws(), 4);
    }

    #[test]
    fn test_scripted_shuffle() {
        // i = 2 swaps with 0, then i = 1 swaps with 0
        let mut items = vec!['a', 'b', 'c'];
        let mut random = ScriptedRandom::new([], [0, 0]);
        shuffle(&mut items, &mut random);

        assert_eq!(items, vec!['b', 'c', 'a']);
    }

    #[test]
    fn test_shuffle_small_slices() {
        let mut random = ScriptedRandom::default();

        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut random);
        let mut single = vec![9];
        shuffle(&mut single, &mut random);

        assert_eq!(single, vec![9]);
        assert_eq!(random.int_draws(), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_rng_draw_ranges() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let f = rng.next_float();
            assert!((0.0..1.0).contains(&f));
            assert!(SlotRandom::next_int(&mut rng, 3) < 3);
        }
    }

    #[test]
    fn test_scripted_float_fallback() {
        let mut random = ScriptedRandom::with_floats([0.2]);
        assert_eq!(random.next_float(), 0.2);
        assert_eq!(random.remaining_floats(), 0);
        assert_eq!(random.next_float(), EXHAUSTED_FLOAT);
        assert_eq!(random.float_draws(), 2);
    }
}
