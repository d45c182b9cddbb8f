//! # Candidate Filter
//!
//! Narrows the registry down to the enchantments an item may be offered.
//!
//! A definition is eligible only if it passes every rule in [`filter_rules`]. The
//! rules are conjunctive, so order does not change the result; it only decides
//! which rule gets reported when a definition is rejected.

use crate::{
    Enchantable, EnchantmentDefinition, EnchantmentRegistry, EnchantmentSet, EnchantmentTarget,
    SelectionRules,
};
use log::trace;

/// A named eligibility check over a definition, an item and the rules.
pub type FilterRule<I, S> = (&'static str, fn(&EnchantmentDefinition, &I, &S) -> bool);

/// The configured allow/deny list lets the enchantment through.
pub fn allowed_by_list<I, S>(definition: &EnchantmentDefinition, _item: &I, rules: &S) -> bool
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    rules.is_enchantment_allowed(definition)
}

/// The enchantment is randomly selectable, or the flag is ignored.
pub fn randomly_selectable<I, S>(definition: &EnchantmentDefinition, _item: &I, rules: &S) -> bool
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    definition.available_for_random_selection || !rules.respects_random_selection()
}

/// The enchantment is not treasure, or treasure is allowed.
pub fn treasure_permitted<I, S>(definition: &EnchantmentDefinition, _item: &I, rules: &S) -> bool
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    !definition.treasure || rules.allows_treasure()
}

/// The enchantment is not a curse, or curses are allowed.
pub fn curse_permitted<I, S>(definition: &EnchantmentDefinition, _item: &I, rules: &S) -> bool
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    !definition.cursed || rules.allows_cursed()
}

/// The enchantment applies to the item.
///
/// Weapons only take weapon-target enchantments; everything else asks the
/// definition itself.
pub fn applies_to_item<I, S>(definition: &EnchantmentDefinition, item: &I, _rules: &S) -> bool
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    if item.is_weapon() {
        definition.target == EnchantmentTarget::Weapon
    } else {
        definition.is_acceptable_item(item)
    }
}

/// Returns the eligibility rules in evaluation order.
pub fn filter_rules<I, S>() -> [FilterRule<I, S>; 5]
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    [
        ("allow list", allowed_by_list::<I, S>),
        ("random selection", randomly_selectable::<I, S>),
        ("treasure", treasure_permitted::<I, S>),
        ("curse", curse_permitted::<I, S>),
        ("item applicability", applies_to_item::<I, S>),
    ]
}

/// Checks a single definition against every rule.
pub fn is_eligible<I, S>(definition: &EnchantmentDefinition, item: &I, rules: &S) -> bool
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    match filter_rules::<I, S>()
        .iter()
        .find(|(_, check)| !check(definition, item, rules))
    {
        Some((name, _)) => {
            trace!("{} rejected by {} rule", definition.id, name);
            false
        }
        None => true,
    }
}

/// Collects every registered enchantment eligible for the item.
///
/// # Examples
///
/// ```
/// use enchant_slots::{eligible_for, EnchantmentId, EnchantmentRegistry, ItemKind, ItemStack, RuleConfig};
///
/// let registry = EnchantmentRegistry::vanilla().unwrap();
/// let sword = ItemStack::new("minecraft:iron_sword", ItemKind::Sword).as_weapon();
///
/// let eligible = eligible_for(&sword, &registry, &RuleConfig::default());
/// assert!(eligible.contains(&EnchantmentId::parse("sharpness").unwrap()));
/// assert!(!eligible.contains(&EnchantmentId::parse("unbreaking").unwrap()));
/// ```
pub fn eligible_for<I, S>(item: &I, registry: &EnchantmentRegistry, rules: &S) -> EnchantmentSet
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    registry
        .iter()
        .filter(|definition| is_eligible(*definition, item, rules))
        .map(|definition| definition.id.clone())
        .collect()
}
