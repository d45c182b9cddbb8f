//! # Slot Generation
//!
//! The probabilistic core: turns a candidate pool into up to three offer slots.
//!
//! The generator:
//! 1. Shuffles the pool into an owned working list, consumed from the back
//! 2. Always fills the first slot when anything is left
//! 3. Rolls for a second slot, then for a third only if the second exists
//! 4. Rolls each slot's size: three choices, else two, else one
//!
//! Once any slot offers exactly two choices, later slots can no longer offer three.

use crate::{
    EnchantError, EnchantResult, EnchantmentId, EnchantmentSet, EnchantmentSlots,
    EnchantmentSlotsBuilder, Generator, SlotChances, SlotPosition, SlotRandom,
};
use log::debug;

use super::random::shuffle;

/// Decision state carried from one slot to the next within a single call.
#[derive(Debug, Clone, Copy, Default)]
struct SlotState {
    /// A slot already offers exactly two choices; blocks three-choice slots
    two_choice_used: bool,
    /// The second slot was generated; required for the third
    second_slot_generated: bool,
}

/// Generator producing [`EnchantmentSlots`] from a candidate pool.
///
/// # Examples
///
/// ```
/// use enchant_slots::{EnchantmentId, EnchantmentSet, Generator, ScriptedRandom, SlotGenerator, SlotPosition};
///
/// let pool: EnchantmentSet = ["lure", "luck_of_the_sea"]
///     .iter()
///     .map(|p| EnchantmentId::parse(p).unwrap())
///     .collect();
///
/// let generator = SlotGenerator::default();
/// let slots = generator.generate(&pool, &mut ScriptedRandom::default());
///
/// assert_eq!(slots.len(), 1);
/// assert_eq!(slots.get(SlotPosition::First).unwrap().len(), 2);
/// assert!(generator.validate(&slots, &pool).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotGenerator {
    /// Probabilities for slot sizes and optional slots
    pub chances: SlotChances,
}

impl SlotGenerator {
    /// Creates a generator with custom chances.
    pub fn new(chances: SlotChances) -> Self {
        Self { chances }
    }

    /// Fills one slot from the back of the working list.
    ///
    /// The three-choice roll is only drawn while no two-choice slot exists.
    /// The caller guarantees `remaining` is not empty.
    fn fill_slot<R: SlotRandom + ?Sized>(
        &self,
        position: SlotPosition,
        remaining: &mut Vec<EnchantmentId>,
        state: &mut SlotState,
        builder: &mut EnchantmentSlotsBuilder,
        random: &mut R,
    ) {
        let three_choices = !state.two_choice_used
            && random.next_float() < self.chances.three_choice
            && remaining.len() >= 3;

        let count = if three_choices {
            3
        } else if remaining.len() >= 2 {
            state.two_choice_used = true;
            2
        } else {
            1
        };

        let choices: Vec<EnchantmentId> = remaining.drain(remaining.len() - count..).rev().collect();
        debug!("{:?} slot offers {} choice(s)", position, choices.len());
        builder.with_slot(position, choices);
    }
}

impl Generator<EnchantmentSlots> for SlotGenerator {
    fn generate<R: SlotRandom + ?Sized>(
        &self,
        pool: &EnchantmentSet,
        random: &mut R,
    ) -> EnchantmentSlots {
        let mut remaining: Vec<EnchantmentId> = pool.iter().cloned().collect();
        shuffle(&mut remaining, random);

        if remaining.is_empty() {
            debug!("No candidates left, offering nothing");
            return EnchantmentSlots::EMPTY;
        }

        let mut state = SlotState::default();
        let mut builder = EnchantmentSlots::builder();

        self.fill_slot(
            SlotPosition::First,
            &mut remaining,
            &mut state,
            &mut builder,
            random,
        );
        if remaining.is_empty() {
            return builder.build();
        }

        if random.next_float() < self.chances.second_slot {
            self.fill_slot(
                SlotPosition::Second,
                &mut remaining,
                &mut state,
                &mut builder,
                random,
            );
            state.second_slot_generated = true;
        }
        if remaining.is_empty() {
            return builder.build();
        }

        if state.second_slot_generated && random.next_float() < self.chances.third_slot {
            self.fill_slot(
                SlotPosition::Third,
                &mut remaining,
                &mut state,
                &mut builder,
                random,
            );
        }

        builder.build()
    }

    fn validate(&self, slots: &EnchantmentSlots, pool: &EnchantmentSet) -> EnchantResult<()> {
        slots.check_structure()?;

        if !slots.choice_ids().is_subset(pool) {
            return Err(EnchantError::GenerationFailed(
                "slots offer an enchantment outside the candidate pool".to_string(),
            ));
        }

        if pool.is_empty() != slots.is_empty() {
            return Err(EnchantError::GenerationFailed(format!(
                "{} slot(s) generated from a pool of {}",
                slots.len(),
                pool.len()
            )));
        }

        if !slots.is_empty() && slots.get(SlotPosition::First).is_none() {
            return Err(EnchantError::GenerationFailed(
                "first slot is missing".to_string(),
            ));
        }

        if slots.get(SlotPosition::Third).is_some() && slots.get(SlotPosition::Second).is_none() {
            return Err(EnchantError::GenerationFailed(
                "third slot generated without a second".to_string(),
            ));
        }

        let mut two_choice_seen = false;
        for slot in slots.iter() {
            if two_choice_seen && slot.len() == 3 {
                return Err(EnchantError::GenerationFailed(format!(
                    "{:?} slot offers three choices after a two-choice slot",
                    slot.position()
                )));
            }
            two_choice_seen |= slot.len() == 2;
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "SlotGenerator"
    }
}

/// Generates offer slots from a candidate pool with the default chances.
pub fn generate<R: SlotRandom + ?Sized>(pool: &EnchantmentSet, random: &mut R) -> EnchantmentSlots {
    SlotGenerator::default().generate(pool, random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedRandom;

    fn pool(paths: &[&str]) -> EnchantmentSet {
        paths
            .iter()
            .map(|p| EnchantmentId::parse(&format!("test:{}", p)).unwrap())
            .collect()
    }

    fn sizes(slots: &EnchantmentSlots) -> Vec<(SlotPosition, usize)> {
        slots.iter().map(|s| (s.position(), s.len())).collect()
    }

    #[test]
    fn test_empty_pool_is_empty() {
        let mut random = ScriptedRandom::with_floats([0.0, 0.0, 0.0]);
        let slots = generate(&EnchantmentSet::new(), &mut random);

        assert_eq!(slots, EnchantmentSlots::EMPTY);
        assert_eq!(random.float_draws(), 0);
    }

    #[test]
    fn test_single_candidate() {
        let candidates = pool(&["a"]);
        let mut random = ScriptedRandom::with_floats([0.0, 0.0, 0.0]);
        let slots = generate(&candidates, &mut random);

        assert_eq!(sizes(&slots), vec![(SlotPosition::First, 1)]);
        assert_eq!(slots.choice_ids(), candidates);
    }

    #[test]
    fn test_three_then_two_consumes_everything() {
        // identity shuffle leaves [a, b, c, d, e]; popping starts from e
        let candidates = pool(&["a", "b", "c", "d", "e"]);
        let mut random = ScriptedRandom::with_floats([0.0, 0.0, 0.9]);
        let slots = generate(&candidates, &mut random);

        assert_eq!(
            sizes(&slots),
            vec![(SlotPosition::First, 3), (SlotPosition::Second, 2)]
        );
        let first = slots.get(SlotPosition::First).unwrap();
        assert_eq!(first.choices(), pool(&["c", "d", "e"]).into_iter().rev().collect::<Vec<_>>());
        assert_eq!(slots.choice_ids(), candidates);
        assert_eq!(random.float_draws(), 3);
    }

    #[test]
    fn test_two_choice_lock_skips_three_choice_roll() {
        // first roll fails: two choices; second gate passes; no three-choice roll drawn
        let candidates = pool(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut random = ScriptedRandom::with_floats([0.9, 0.0, 0.0]);
        let slots = generate(&candidates, &mut random);

        assert_eq!(
            sizes(&slots),
            vec![
                (SlotPosition::First, 2),
                (SlotPosition::Second, 2),
                (SlotPosition::Third, 2)
            ]
        );
        assert_eq!(random.float_draws(), 3);
    }

    #[test]
    fn test_three_choice_slots_can_repeat() {
        let candidates = pool(&["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        let mut random = ScriptedRandom::with_floats([0.0, 0.0, 0.0, 0.0, 0.0]);
        let slots = generate(&candidates, &mut random);

        assert_eq!(
            sizes(&slots),
            vec![
                (SlotPosition::First, 3),
                (SlotPosition::Second, 3),
                (SlotPosition::Third, 3)
            ]
        );
        assert_eq!(slots.choice_count(), 9);
    }

    #[test]
    fn test_second_gate_failure_stops_generation() {
        let candidates = pool(&["a", "b", "c", "d", "e", "f"]);
        let mut random = ScriptedRandom::with_floats([0.0, 0.5, 0.0, 0.0]);
        let slots = generate(&candidates, &mut random);

        assert_eq!(sizes(&slots), vec![(SlotPosition::First, 3)]);
        assert_eq!(random.float_draws(), 2);
    }

    #[test]
    fn test_third_gate_uses_quarter_chance() {
        let candidates = pool(&["a", "b", "c", "d", "e", "f", "g"]);

        let mut random = ScriptedRandom::with_floats([0.0, 0.0, 0.0, 0.3]);
        let slots = generate(&candidates, &mut random);
        assert_eq!(slots.len(), 2);

        let mut random = ScriptedRandom::with_floats([0.0, 0.0, 0.0, 0.2]);
        let slots = generate(&candidates, &mut random);
        assert_eq!(
            sizes(&slots),
            vec![
                (SlotPosition::First, 3),
                (SlotPosition::Second, 3),
                (SlotPosition::Third, 1)
            ]
        );
    }

    #[test]
    fn test_small_pool_degrades() {
        // three-choice roll succeeds but only two remain
        let candidates = pool(&["a", "b"]);
        let mut random = ScriptedRandom::with_floats([0.0]);
        let slots = generate(&candidates, &mut random);

        assert_eq!(sizes(&slots), vec![(SlotPosition::First, 2)]);
    }

    #[test]
    fn test_second_slot_single_leftover() {
        let candidates = pool(&["a", "b", "c", "d"]);
        let mut random = ScriptedRandom::with_floats([0.0, 0.0, 0.0]);
        let slots = generate(&candidates, &mut random);

        assert_eq!(
            sizes(&slots),
            vec![(SlotPosition::First, 3), (SlotPosition::Second, 1)]
        );
    }

    #[test]
    fn test_custom_chances() {
        let generator = SlotGenerator::new(SlotChances::new(0.0, 1.0, 1.0).unwrap());
        let candidates = pool(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut random = ScriptedRandom::with_floats([0.5, 0.5, 0.5]);
        let slots = generator.generate(&candidates, &mut random);

        assert_eq!(
            sizes(&slots),
            vec![
                (SlotPosition::First, 2),
                (SlotPosition::Second, 2),
                (SlotPosition::Third, 2)
            ]
        );
        assert!(generator.validate(&slots, &candidates).is_ok());
        assert_eq!(generator.generator_type(), "SlotGenerator");
    }

    #[test]
    fn test_validate_rejects_broken_output() {
        let generator = SlotGenerator::default();
        let candidates = pool(&["a", "b", "c", "d", "e", "f"]);
        let ids: Vec<_> = candidates.iter().cloned().collect();

        let mut builder = EnchantmentSlots::builder();
        builder
            .with_slot(SlotPosition::First, ids[0..2].to_vec())
            .with_slot(SlotPosition::Second, ids[2..5].to_vec());
        assert!(generator.validate(&builder.build(), &candidates).is_err());

        let mut builder = EnchantmentSlots::builder();
        builder
            .with_slot(SlotPosition::First, ids[0..1].to_vec())
            .with_slot(SlotPosition::Third, ids[1..2].to_vec());
        assert!(generator.validate(&builder.build(), &candidates).is_err());

        let mut builder = EnchantmentSlots::builder();
        builder.with_slot(SlotPosition::First, pool(&["z"]).into_iter().collect());
        assert!(generator.validate(&builder.build(), &candidates).is_err());

        assert!(generator
            .validate(&EnchantmentSlots::EMPTY, &candidates)
            .is_err());
    }
}
