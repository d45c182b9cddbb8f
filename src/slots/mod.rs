//! # Slots Module
//!
//! The result of a generation call: up to three offer slots keyed by position.
//!
//! Slots are built once through [`EnchantmentSlotsBuilder`] and are immutable
//! afterwards. They can be attached to an [`ItemStack`]'s custom data and read back,
//! which is how earlier offers are found by the presence resolver.

use crate::{config, EnchantError, EnchantResult, EnchantmentId, EnchantmentSet, ItemStack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position of an offer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPosition {
    First,
    Second,
    Third,
}

/// One offer slot: a set of mutually exclusive enchantment choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentSlot {
    position: SlotPosition,
    choices: Vec<EnchantmentId>,
}

impl EnchantmentSlot {
    /// Gets the slot position.
    pub fn position(&self) -> SlotPosition {
        self.position
    }

    /// Gets the offered choices.
    pub fn choices(&self) -> &[EnchantmentId] {
        &self.choices
    }

    /// Number of choices offered.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Checks whether the slot offers the given enchantment.
    pub fn contains(&self, id: &EnchantmentId) -> bool {
        self.choices.contains(id)
    }
}

/// Offer slots generated for an item.
///
/// # Examples
///
/// ```
/// use enchant_slots::{EnchantmentId, EnchantmentSlots, SlotPosition};
///
/// let lure = EnchantmentId::parse("lure").unwrap();
/// let mut builder = EnchantmentSlots::builder();
/// builder.with_slot(SlotPosition::First, vec![lure.clone()]);
/// let slots = builder.build();
///
/// assert_eq!(slots.len(), 1);
/// assert!(slots.get(SlotPosition::First).unwrap().contains(&lure));
/// assert!(EnchantmentSlots::EMPTY.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<EnchantmentSlot>", into = "Vec<EnchantmentSlot>")]
pub struct EnchantmentSlots {
    slots: BTreeMap<SlotPosition, EnchantmentSlot>,
}

impl EnchantmentSlots {
    /// Slots value offering nothing.
    pub const EMPTY: EnchantmentSlots = EnchantmentSlots {
        slots: BTreeMap::new(),
    };

    /// Starts building a new set of slots.
    pub fn builder() -> EnchantmentSlotsBuilder {
        EnchantmentSlotsBuilder::default()
    }

    /// Gets the slot at a position.
    pub fn get(&self, position: SlotPosition) -> Option<&EnchantmentSlot> {
        self.slots.get(&position)
    }

    /// Iterates over slots in position order.
    pub fn iter(&self) -> impl Iterator<Item = &EnchantmentSlot> {
        self.slots.values()
    }

    /// Number of slots present.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total number of choices across all slots.
    pub fn choice_count(&self) -> usize {
        self.slots.values().map(EnchantmentSlot::len).sum()
    }

    /// Collects every offered enchantment identifier.
    pub fn choice_ids(&self) -> EnchantmentSet {
        self.slots
            .values()
            .flat_map(|slot| slot.choices.iter().cloned())
            .collect()
    }

    /// Checks the structural rules every slots value obeys.
    ///
    /// Each slot offers one to three choices and no identifier appears twice.
    pub fn check_structure(&self) -> EnchantResult<()> {
        for slot in self.slots.values() {
            if slot.is_empty() || slot.len() > config::MAX_CHOICES_PER_SLOT {
                return Err(EnchantError::GenerationFailed(format!(
                    "slot {:?} offers {} choices",
                    slot.position,
                    slot.len()
                )));
            }
        }

        if self.choice_ids().len() != self.choice_count() {
            return Err(EnchantError::GenerationFailed(
                "an enchantment is offered more than once".to_string(),
            ));
        }

        Ok(())
    }

    /// Reads slots previously attached to an item.
    ///
    /// Returns `Ok(None)` when the item carries no slots.
    pub fn from_item(item: &ItemStack) -> EnchantResult<Option<Self>> {
        match item.custom_data.get(config::SLOTS_DATA_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Attaches these slots to an item, replacing any previous ones.
    ///
    /// Attaching [`EnchantmentSlots::EMPTY`] removes stored slots instead.
    pub fn write_to_item(&self, item: &mut ItemStack) -> EnchantResult<()> {
        if self.is_empty() {
            item.custom_data.remove(config::SLOTS_DATA_KEY);
            return Ok(());
        }
        let value = serde_json::to_value(self)?;
        item.custom_data
            .insert(config::SLOTS_DATA_KEY.to_string(), value);
        Ok(())
    }
}

impl TryFrom<Vec<EnchantmentSlot>> for EnchantmentSlots {
    type Error = EnchantError;

    fn try_from(list: Vec<EnchantmentSlot>) -> Result<Self, Self::Error> {
        let mut slots = BTreeMap::new();
        for slot in list {
            let position = slot.position;
            if slots.insert(position, slot).is_some() {
                return Err(EnchantError::GenerationFailed(format!(
                    "slot {:?} appears twice",
                    position
                )));
            }
        }
        let slots = Self { slots };
        slots.check_structure()?;
        Ok(slots)
    }
}

impl From<EnchantmentSlots> for Vec<EnchantmentSlot> {
    fn from(slots: EnchantmentSlots) -> Self {
        slots.slots.into_values().collect()
    }
}

/// Accumulates slots by position.
#[derive(Debug, Clone, Default)]
pub struct EnchantmentSlotsBuilder {
    slots: BTreeMap<SlotPosition, EnchantmentSlot>,
}

impl EnchantmentSlotsBuilder {
    /// Sets the slot at a position, replacing any previous one.
    pub fn with_slot(&mut self, position: SlotPosition, choices: Vec<EnchantmentId>) -> &mut Self {
        debug_assert!(!choices.is_empty() && choices.len() <= config::MAX_CHOICES_PER_SLOT);
        self.slots
            .insert(position, EnchantmentSlot { position, choices });
        self
    }

    /// Finishes building.
    pub fn build(self) -> EnchantmentSlots {
        EnchantmentSlots { slots: self.slots }
    }
}
