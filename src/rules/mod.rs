//! # Rules Module
//!
//! Configuration deciding which enchantments may be offered at all.
//!
//! [`SelectionRules`] is the interface the candidate filter consults. [`RuleConfig`]
//! is the serializable implementation loaded from a JSON file.

use crate::{EnchantError, EnchantResult, EnchantmentDefinition, EnchantmentId, EnchantmentSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The checks the candidate filter asks of a configuration.
pub trait SelectionRules {
    /// Whether the allow/deny list lets this enchantment through.
    fn is_enchantment_allowed(&self, definition: &EnchantmentDefinition) -> bool;

    /// Whether the "available for random selection" flag is honored.
    fn respects_random_selection(&self) -> bool;

    /// Whether treasure enchantments may be offered.
    fn allows_treasure(&self) -> bool;

    /// Whether curses may be offered.
    fn allows_cursed(&self) -> bool;
}

/// How the configured enchantment list is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Only listed enchantments are allowed
    Allow,
    /// Listed enchantments are forbidden
    Deny,
}

/// Rule configuration for candidate filtering.
///
/// # Examples
///
/// ```
/// use enchant_slots::{ListKind, RuleConfig};
///
/// let config = RuleConfig::default();
/// assert_eq!(config.list_kind, ListKind::Deny);
/// assert!(config.enchantments.is_empty());
/// assert!(config.respect_random_selection);
/// assert!(!config.allow_treasure);
/// assert!(!config.allow_cursed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Interpretation of `enchantments`
    pub list_kind: ListKind,
    /// The allow or deny list
    pub enchantments: EnchantmentSet,
    /// Honor each definition's random selection flag
    pub respect_random_selection: bool,
    /// Offer treasure enchantments
    pub allow_treasure: bool,
    /// Offer curses
    pub allow_cursed: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            list_kind: ListKind::Deny,
            enchantments: EnchantmentSet::new(),
            respect_random_selection: true,
            allow_treasure: false,
            allow_cursed: false,
        }
    }
}

impl RuleConfig {
    /// Creates a configuration that allows every enchantment and every flag.
    pub fn permissive() -> Self {
        Self {
            list_kind: ListKind::Deny,
            enchantments: EnchantmentSet::new(),
            respect_random_selection: false,
            allow_treasure: true,
            allow_cursed: true,
        }
    }

    /// Creates a configuration allowing only the listed enchantments.
    pub fn allow_only(enchantments: impl IntoIterator<Item = EnchantmentId>) -> Self {
        Self {
            list_kind: ListKind::Allow,
            enchantments: enchantments.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Creates a configuration denying the listed enchantments.
    pub fn deny(enchantments: impl IntoIterator<Item = EnchantmentId>) -> Self {
        Self {
            list_kind: ListKind::Deny,
            enchantments: enchantments.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Checks the allow/deny list for an identifier.
    pub fn is_id_allowed(&self, id: &EnchantmentId) -> bool {
        let listed = self.enchantments.contains(id);
        match self.list_kind {
            ListKind::Allow => listed,
            ListKind::Deny => !listed,
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EnchantResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON.
    pub fn save_to_json(&self) -> EnchantResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a configuration file.
    pub fn load_from_file(path: impl AsRef<Path>) -> EnchantResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| {
            EnchantError::InvalidConfig(format!("{}: {}", path.display(), e))
        })
    }
}

impl SelectionRules for RuleConfig {
    fn is_enchantment_allowed(&self, definition: &EnchantmentDefinition) -> bool {
        self.is_id_allowed(&definition.id)
    }

    fn respects_random_selection(&self) -> bool {
        self.respect_random_selection
    }

    fn allows_treasure(&self) -> bool {
        self.allow_treasure
    }

    fn allows_cursed(&self) -> bool {
        self.allow_cursed
    }
}
