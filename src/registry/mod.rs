//! # Registry Module
//!
//! Enchantment identifiers, definitions and the registry that holds them.
//!
//! The registry is always passed explicitly into the generation functions; there is
//! no global instance. A built-in set of vanilla definitions is available through
//! [`EnchantmentRegistry::vanilla`].

pub mod target;

pub use target::*;

use crate::{config, EnchantError, EnchantResult, Enchantable, ItemKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Namespaced identifier of an enchantment, e.g. `minecraft:sharpness`.
///
/// # Examples
///
/// ```
/// use enchant_slots::EnchantmentId;
///
/// let id: EnchantmentId = "sharpness".parse().unwrap();
/// assert_eq!(id.namespace(), "minecraft");
/// assert_eq!(id.path(), "sharpness");
/// assert_eq!(id.to_string(), "minecraft:sharpness");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnchantmentId {
    full: String,
    split: usize,
}

impl EnchantmentId {
    /// Creates an identifier from its namespace and path.
    pub fn new(namespace: &str, path: &str) -> EnchantResult<Self> {
        let valid_namespace = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'));
        let valid_path = !path.is_empty()
            && path
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'));

        if !valid_namespace || !valid_path {
            return Err(EnchantError::InvalidIdentifier(format!(
                "{}:{}",
                namespace, path
            )));
        }

        Ok(Self {
            full: format!("{}:{}", namespace, path),
            split: namespace.len(),
        })
    }

    /// Parses `namespace:path`, defaulting the namespace when omitted.
    pub fn parse(raw: &str) -> EnchantResult<Self> {
        match raw.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(config::DEFAULT_NAMESPACE, raw),
        }
    }

    /// Gets the namespace part.
    pub fn namespace(&self) -> &str {
        &self.full[..self.split]
    }

    /// Gets the path part.
    pub fn path(&self) -> &str {
        &self.full[self.split + 1..]
    }

    /// Gets the full `namespace:path` form.
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for EnchantmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl FromStr for EnchantmentId {
    type Err = EnchantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EnchantmentId {
    type Error = EnchantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EnchantmentId> for String {
    fn from(id: EnchantmentId) -> Self {
        id.full
    }
}

/// Ordered set of enchantment identifiers.
///
/// Ordered so that shuffling a pool built from it is reproducible for a fixed seed.
pub type EnchantmentSet = BTreeSet<EnchantmentId>;

/// Registry record describing one enchantment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentDefinition {
    /// Stable identifier
    pub id: EnchantmentId,
    /// Category of items this enchantment is designed for
    pub target: EnchantmentTarget,
    /// Treasure enchantments are normally only found as loot
    #[serde(default)]
    pub treasure: bool,
    /// Curses carry a drawback for the holder
    #[serde(default)]
    pub cursed: bool,
    /// Whether the enchantment may be rolled randomly
    #[serde(default = "default_available")]
    pub available_for_random_selection: bool,
    /// Item kinds accepted in addition to the target category
    #[serde(default)]
    pub extra_kinds: Vec<ItemKind>,
    /// Specific item ids accepted in addition to the target category
    #[serde(default)]
    pub extra_items: Vec<String>,
}

fn default_available() -> bool {
    true
}

impl EnchantmentDefinition {
    /// Creates a plain definition: not treasure, not cursed, randomly selectable.
    ///
    /// # Examples
    ///
    /// ```
    /// use enchant_slots::{EnchantmentDefinition, EnchantmentId, EnchantmentTarget};
    ///
    /// let id = EnchantmentId::parse("minecraft:power").unwrap();
    /// let power = EnchantmentDefinition::new(id, EnchantmentTarget::Bow);
    /// assert!(power.available_for_random_selection);
    /// assert!(!power.treasure && !power.cursed);
    /// ```
    pub fn new(id: EnchantmentId, target: EnchantmentTarget) -> Self {
        Self {
            id,
            target,
            treasure: false,
            cursed: false,
            available_for_random_selection: true,
            extra_kinds: Vec::new(),
            extra_items: Vec::new(),
        }
    }

    /// Marks the definition as treasure.
    pub fn treasure(mut self) -> Self {
        self.treasure = true;
        self
    }

    /// Marks the definition as a curse.
    pub fn cursed(mut self) -> Self {
        self.cursed = true;
        self
    }

    /// Excludes the definition from random selection.
    pub fn not_randomly_selectable(mut self) -> Self {
        self.available_for_random_selection = false;
        self
    }

    /// Accepts an extra item kind beyond the target category.
    pub fn also_accepts_kind(mut self, kind: ItemKind) -> Self {
        self.extra_kinds.push(kind);
        self
    }

    /// Accepts a specific item id beyond the target category.
    pub fn also_accepts_item(mut self, item_id: impl Into<String>) -> Self {
        self.extra_items.push(item_id.into());
        self
    }

    /// Checks whether this enchantment can be applied to the given item.
    pub fn is_acceptable_item<I: Enchantable + ?Sized>(&self, item: &I) -> bool {
        self.target
            .is_acceptable_item(item.kind(), item.is_damageable())
            || self.extra_kinds.contains(&item.kind())
            || self.extra_items.iter().any(|id| id == item.item_id())
    }
}

/// Registry of every known enchantment definition.
///
/// Keeps registration order for iteration and rejects duplicate identifiers.
#[derive(Debug, Clone, Default)]
pub struct EnchantmentRegistry {
    definitions: Vec<EnchantmentDefinition>,
    index: HashMap<EnchantmentId, usize>,
}

impl EnchantmentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from definitions, failing on the first duplicate.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EnchantmentDefinition>,
    ) -> EnchantResult<Self> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Loads a registry from a JSON array of definitions.
    pub fn from_json(json: &str) -> EnchantResult<Self> {
        let definitions: Vec<EnchantmentDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Serializes the registry as a JSON array of definitions.
    pub fn to_json(&self) -> EnchantResult<String> {
        Ok(serde_json::to_string_pretty(&self.definitions)?)
    }

    /// Registers a definition.
    pub fn register(&mut self, definition: EnchantmentDefinition) -> EnchantResult<()> {
        if self.index.contains_key(&definition.id) {
            return Err(EnchantError::DuplicateEnchantment(definition.id.to_string()));
        }
        self.index
            .insert(definition.id.clone(), self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Gets a definition by identifier.
    pub fn get(&self, id: &EnchantmentId) -> Option<&EnchantmentDefinition> {
        self.index.get(id).map(|&i| &self.definitions[i])
    }

    /// Checks whether an identifier is registered.
    pub fn contains(&self, id: &EnchantmentId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EnchantmentDefinition> {
        self.definitions.iter()
    }

    /// Iterates over registered identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &EnchantmentId> {
        self.definitions.iter().map(|d| &d.id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Creates a registry holding the vanilla enchantments.
    ///
    /// # Examples
    ///
    /// ```
    /// use enchant_slots::{EnchantmentId, EnchantmentRegistry};
    ///
    /// let registry = EnchantmentRegistry::vanilla().unwrap();
    /// let mending = EnchantmentId::parse("mending").unwrap();
    /// assert!(registry.get(&mending).unwrap().treasure);
    /// ```
    pub fn vanilla() -> EnchantResult<Self> {
        use EnchantmentTarget::*;

        let plain = |path: &str, target| -> EnchantResult<EnchantmentDefinition> {
            Ok(EnchantmentDefinition::new(EnchantmentId::parse(path)?, target))
        };

        Self::from_definitions([
            plain("protection", Armor)?,
            plain("fire_protection", Armor)?,
            plain("feather_falling", ArmorFeet)?,
            plain("blast_protection", Armor)?,
            plain("projectile_protection", Armor)?,
            plain("respiration", ArmorHead)?,
            plain("aqua_affinity", ArmorHead)?,
            plain("thorns", Armor)?,
            plain("depth_strider", ArmorFeet)?,
            plain("frost_walker", ArmorFeet)?.treasure(),
            plain("binding_curse", Wearable)?.treasure().cursed(),
            plain("soul_speed", ArmorFeet)?
                .treasure()
                .not_randomly_selectable(),
            plain("swift_sneak", ArmorLegs)?
                .treasure()
                .not_randomly_selectable(),
            plain("sharpness", Weapon)?.also_accepts_kind(ItemKind::Axe),
            plain("smite", Weapon)?.also_accepts_kind(ItemKind::Axe),
            plain("bane_of_arthropods", Weapon)?.also_accepts_kind(ItemKind::Axe),
            plain("knockback", Weapon)?,
            plain("fire_aspect", Weapon)?,
            plain("looting", Weapon)?,
            plain("sweeping", Weapon)?,
            plain("efficiency", Digger)?.also_accepts_item("minecraft:shears"),
            plain("silk_touch", Digger)?,
            plain("unbreaking", Breakable)?,
            plain("fortune", Digger)?,
            plain("power", Bow)?,
            plain("punch", Bow)?,
            plain("flame", Bow)?,
            plain("infinity", Bow)?,
            plain("luck_of_the_sea", FishingRod)?,
            plain("lure", FishingRod)?,
            plain("loyalty", Trident)?,
            plain("impaling", Trident)?,
            plain("riptide", Trident)?,
            plain("channeling", Trident)?,
            plain("multishot", Crossbow)?,
            plain("quick_charge", Crossbow)?,
            plain("piercing", Crossbow)?,
            plain("mending", Breakable)?.treasure(),
            plain("vanishing_curse", Vanishable)?.treasure().cursed(),
        ])
    }
}
