//! # Generation Module
//!
//! Candidate filtering, presence resolution and the offer generators.
//!
//! The pieces compose in one direction: the candidate filter and the presence
//! resolver produce sets of identifiers, their difference is the candidate pool,
//! and a [`Generator`] turns a pool into output using an injected random source.

pub mod filter;
pub mod pick;
pub mod presence;
pub mod random;
pub mod slot_generator;

pub use filter::*;
pub use pick::*;
pub use presence::*;
pub use random::*;
pub use slot_generator::*;

use crate::{
    config, EnchantError, EnchantResult, Enchantable, EnchantmentRegistry, EnchantmentSet,
    EnchantmentSlots, SelectionRules,
};
use serde::{Deserialize, Serialize};

/// Probabilities driving slot generation.
///
/// Controls how often a slot offers three choices and how often the second and
/// third slots appear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotChances {
    /// Probability that a slot offers three choices (0.0 to 1.0)
    pub three_choice: f32,
    /// Probability that a second slot is generated (0.0 to 1.0)
    pub second_slot: f32,
    /// Probability that a third slot follows a second one (0.0 to 1.0)
    pub third_slot: f32,
}

impl SlotChances {
    /// Creates validated chances.
    ///
    /// # Examples
    ///
    /// ```
    /// use enchant_slots::SlotChances;
    ///
    /// assert!(SlotChances::new(1.0, 1.0, 1.0).is_ok());
    /// assert!(SlotChances::new(1.5, 0.5, 0.25).is_err());
    /// ```
    pub fn new(three_choice: f32, second_slot: f32, third_slot: f32) -> EnchantResult<Self> {
        let chances = Self {
            three_choice,
            second_slot,
            third_slot,
        };
        chances.validate()?;
        Ok(chances)
    }

    /// Checks every probability lies in `[0, 1]`.
    pub fn validate(&self) -> EnchantResult<()> {
        for (name, value) in [
            ("three_choice", self.three_choice),
            ("second_slot", self.second_slot),
            ("third_slot", self.third_slot),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EnchantError::InvalidConfig(format!(
                    "{} chance {} is outside 0..=1",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for SlotChances {
    fn default() -> Self {
        Self {
            three_choice: config::THREE_CHOICE_CHANCE,
            second_slot: config::SECOND_SLOT_CHANCE,
            third_slot: config::THIRD_SLOT_CHANCE,
        }
    }
}

/// Trait for generators working on a candidate pool.
///
/// Generators never fail on a well-formed pool; `validate` is how callers and
/// tests confirm output obeys the generator's invariants.
pub trait Generator<T> {
    /// Generates content from the pool using the provided random source.
    fn generate<R: SlotRandom + ?Sized>(&self, pool: &EnchantmentSet, random: &mut R) -> T;

    /// Validates that generated content is consistent with the pool it came from.
    fn validate(&self, content: &T, pool: &EnchantmentSet) -> EnchantResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Computes the candidate pool for an item: eligible minus present.
pub fn candidate_pool<I, S>(item: &I, registry: &EnchantmentRegistry, rules: &S) -> EnchantmentSet
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    let present = present_in(item);
    eligible_for(item, registry, rules)
        .into_iter()
        .filter(|id| !present.contains(id))
        .collect()
}

/// Generates offer slots for an item with the default chances.
///
/// # Examples
///
/// ```
/// use enchant_slots::{generate_for_item, EnchantmentRegistry, ItemKind, ItemStack, RuleConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let registry = EnchantmentRegistry::vanilla().unwrap();
/// let bow = ItemStack::new("minecraft:bow", ItemKind::Bow);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let slots = generate_for_item(&bow, &registry, &RuleConfig::default(), &mut rng);
/// assert!(!slots.is_empty());
/// ```
pub fn generate_for_item<I, S, R>(
    item: &I,
    registry: &EnchantmentRegistry,
    rules: &S,
    random: &mut R,
) -> EnchantmentSlots
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
    R: SlotRandom + ?Sized,
{
    generate(&candidate_pool(item, registry, rules), random)
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}
