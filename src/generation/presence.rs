//! # Presence Resolver
//!
//! Finds the enchantments an item already has or is already being offered.

use crate::{Enchantable, EnchantmentSet};

/// Collects applied enchantments plus every choice of the item's attached slots.
///
/// # Examples
///
/// ```
/// use enchant_slots::{present_in, EnchantmentId, ItemKind, ItemStack};
///
/// let lure = EnchantmentId::parse("lure").unwrap();
/// let rod = ItemStack::new("minecraft:fishing_rod", ItemKind::FishingRod)
///     .with_enchantment(lure.clone(), 1);
///
/// assert!(present_in(&rod).contains(&lure));
/// ```
pub fn present_in<I: Enchantable + ?Sized>(item: &I) -> EnchantmentSet {
    let mut present = item.applied_enchantments();
    if let Some(slots) = item.existing_slots() {
        present.extend(slots.choice_ids());
    }
    present
}
