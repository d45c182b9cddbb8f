//! # Enchantment Targets
//!
//! Item categories an enchantment can apply to, and the item kinds each accepts.

use crate::{Enchantable, ItemKind};
use serde::{Deserialize, Serialize};

/// Category of items an enchantment is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnchantmentTarget {
    Armor,
    ArmorFeet,
    ArmorLegs,
    ArmorChest,
    ArmorHead,
    Weapon,
    Digger,
    FishingRod,
    Trident,
    Breakable,
    Bow,
    Wearable,
    Crossbow,
    Vanishable,
}

impl EnchantmentTarget {
    /// Returns every target category.
    pub fn all() -> Vec<EnchantmentTarget> {
        vec![
            EnchantmentTarget::Armor,
            EnchantmentTarget::ArmorFeet,
            EnchantmentTarget::ArmorLegs,
            EnchantmentTarget::ArmorChest,
            EnchantmentTarget::ArmorHead,
            EnchantmentTarget::Weapon,
            EnchantmentTarget::Digger,
            EnchantmentTarget::FishingRod,
            EnchantmentTarget::Trident,
            EnchantmentTarget::Breakable,
            EnchantmentTarget::Bow,
            EnchantmentTarget::Wearable,
            EnchantmentTarget::Crossbow,
            EnchantmentTarget::Vanishable,
        ]
    }

    /// Checks whether an item of the given kind belongs to this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use enchant_slots::{EnchantmentTarget, ItemKind};
    ///
    /// assert!(EnchantmentTarget::Armor.is_acceptable_item(ItemKind::Boots, true));
    /// assert!(!EnchantmentTarget::ArmorHead.is_acceptable_item(ItemKind::Boots, true));
    /// assert!(EnchantmentTarget::Breakable.is_acceptable_item(ItemKind::Other, true));
    /// ```
    pub fn is_acceptable_item(self, kind: ItemKind, damageable: bool) -> bool {
        match self {
            EnchantmentTarget::Armor => kind.is_armor(),
            EnchantmentTarget::ArmorFeet => kind == ItemKind::Boots,
            EnchantmentTarget::ArmorLegs => kind == ItemKind::Leggings,
            EnchantmentTarget::ArmorChest => kind == ItemKind::Chestplate,
            EnchantmentTarget::ArmorHead => kind == ItemKind::Helmet,
            EnchantmentTarget::Weapon => kind == ItemKind::Sword,
            EnchantmentTarget::Digger => kind.is_mining_tool(),
            EnchantmentTarget::FishingRod => kind == ItemKind::FishingRod,
            EnchantmentTarget::Trident => kind == ItemKind::Trident,
            EnchantmentTarget::Breakable => damageable,
            EnchantmentTarget::Bow => kind == ItemKind::Bow,
            EnchantmentTarget::Wearable => kind.is_armor() || kind == ItemKind::Elytra,
            EnchantmentTarget::Crossbow => kind == ItemKind::Crossbow,
            EnchantmentTarget::Vanishable => damageable || kind == ItemKind::Compass,
        }
    }
}

/// Lists every target category that accepts the given item.
///
/// # Examples
///
/// ```
/// use enchant_slots::{targets_for, EnchantmentTarget, ItemKind, ItemStack};
///
/// let bow = ItemStack::new("minecraft:bow", ItemKind::Bow);
/// let targets = targets_for(&bow);
/// assert!(targets.contains(&EnchantmentTarget::Bow));
/// assert!(targets.contains(&EnchantmentTarget::Breakable));
/// assert!(!targets.contains(&EnchantmentTarget::Weapon));
/// ```
pub fn targets_for<I: Enchantable + ?Sized>(item: &I) -> Vec<EnchantmentTarget> {
    EnchantmentTarget::all()
        .into_iter()
        .filter(|target| target.is_acceptable_item(item.kind(), item.is_damageable()))
        .collect()
}
