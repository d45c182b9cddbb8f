//! # Item Module
//!
//! The item model consumed by candidate filtering and presence resolution.
//!
//! [`Enchantable`] is the seam the generation functions depend on. [`ItemStack`] is
//! the concrete implementation used by the CLI and the tests; it carries applied
//! enchantments and a free-form custom data map where generated offer slots are
//! persisted.

use crate::{config, EnchantmentId, EnchantmentSet, EnchantmentSlots};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Broad kind of an item, used for target category checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Sword,
    Axe,
    Pickaxe,
    Shovel,
    Hoe,
    Bow,
    Crossbow,
    Trident,
    FishingRod,
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    Elytra,
    Shield,
    Compass,
    Book,
    Other,
}

impl ItemKind {
    /// Checks if this kind is a piece of armor.
    pub fn is_armor(self) -> bool {
        matches!(
            self,
            ItemKind::Helmet | ItemKind::Chestplate | ItemKind::Leggings | ItemKind::Boots
        )
    }

    /// Checks if this kind is a mining tool.
    pub fn is_mining_tool(self) -> bool {
        matches!(
            self,
            ItemKind::Axe | ItemKind::Pickaxe | ItemKind::Shovel | ItemKind::Hoe
        )
    }

    /// Whether items of this kind normally lose durability.
    pub fn is_damageable_by_default(self) -> bool {
        !matches!(self, ItemKind::Compass | ItemKind::Book | ItemKind::Other)
    }
}

/// Item abstraction consumed by the generation functions.
pub trait Enchantable {
    /// Gets the item's registry id, e.g. `minecraft:diamond_sword`.
    fn item_id(&self) -> &str;

    /// Gets the item's kind.
    fn kind(&self) -> ItemKind;

    /// Whether the item has durability.
    fn is_damageable(&self) -> bool;

    /// Whether the item belongs to the weapon category.
    fn is_weapon(&self) -> bool;

    /// Identifiers of enchantments currently applied to the item.
    fn applied_enchantments(&self) -> EnchantmentSet;

    /// Previously generated slots still attached to the item, if any.
    fn existing_slots(&self) -> Option<EnchantmentSlots>;
}

/// A concrete item with its enchantment state.
///
/// # Examples
///
/// ```
/// use enchant_slots::{Enchantable, EnchantmentId, ItemKind, ItemStack};
///
/// let sharpness = EnchantmentId::parse("sharpness").unwrap();
/// let sword = ItemStack::new("minecraft:iron_sword", ItemKind::Sword)
///     .as_weapon()
///     .with_enchantment(sharpness.clone(), 3);
///
/// assert!(sword.is_weapon());
/// assert!(sword.applied_enchantments().contains(&sharpness));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Registry id of the item
    pub item_id: String,
    /// Kind used for target checks
    pub kind: ItemKind,
    /// Whether the item has durability
    pub damageable: bool,
    /// Item tags, e.g. the weapons tag
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Applied enchantments and their levels
    #[serde(default)]
    pub enchantments: BTreeMap<EnchantmentId, u32>,
    /// Custom persisted state
    #[serde(default)]
    pub custom_data: BTreeMap<String, serde_json::Value>,
}

impl ItemStack {
    /// Creates a new item with no enchantments, tags or custom data.
    pub fn new(item_id: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            item_id: item_id.into(),
            kind,
            damageable: kind.is_damageable_by_default(),
            tags: BTreeSet::new(),
            enchantments: BTreeMap::new(),
            custom_data: BTreeMap::new(),
        }
    }

    /// Overrides the damageable flag.
    pub fn with_damageable(mut self, damageable: bool) -> Self {
        self.damageable = damageable;
        self
    }

    /// Adds an item tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Tags the item as a weapon.
    pub fn as_weapon(self) -> Self {
        self.with_tag(config::WEAPONS_TAG)
    }

    /// Applies an enchantment at the given level.
    pub fn with_enchantment(mut self, id: EnchantmentId, level: u32) -> Self {
        self.enchantments.insert(id, level);
        self
    }

    /// Checks if the item carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Gets the level of an applied enchantment.
    pub fn enchantment_level(&self, id: &EnchantmentId) -> Option<u32> {
        self.enchantments.get(id).copied()
    }
}

impl Enchantable for ItemStack {
    fn item_id(&self) -> &str {
        &self.item_id
    }

    fn kind(&self) -> ItemKind {
        self.kind
    }

    fn is_damageable(&self) -> bool {
        self.damageable
    }

    fn is_weapon(&self) -> bool {
        self.has_tag(config::WEAPONS_TAG)
    }

    fn applied_enchantments(&self) -> EnchantmentSet {
        self.enchantments.keys().cloned().collect()
    }

    fn existing_slots(&self) -> Option<EnchantmentSlots> {
        match EnchantmentSlots::from_item(self) {
            Ok(slots) => slots,
            Err(e) => {
                warn!(
                    "Ignoring unreadable enchantment slots on {}: {}",
                    self.item_id, e
                );
                None
            }
        }
    }
}
