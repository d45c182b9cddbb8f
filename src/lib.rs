//! # Enchant Slots
//!
//! Randomized enchantment offer generation for an enchanting table style feature.
//!
//! ## Architecture Overview
//!
//! The crate turns an item plus a registry of enchantment definitions into a set of
//! "offer slots", each presenting the player with one to three mutually exclusive
//! enchantments. The core revolves around a handful of concepts:
//!
//! - **Registry**: Enchantment identifiers, definitions and their target categories
//! - **Items**: A small item model carrying applied enchantments and custom data
//! - **Rules**: Allow/deny lists and flag toggles deciding what may be offered
//! - **Slots**: The immutable result of a generation call, persistable onto an item
//! - **Generation**: Candidate filtering, presence resolution and the slot generator
//!
//! ## Determinism
//!
//! Every generation entry point takes its random source as a parameter. Feeding a
//! seeded [`rand::rngs::StdRng`] or a [`ScriptedRandom`] yields reproducible output.

pub mod generation;
pub mod item;
pub mod registry;
pub mod rules;
pub mod slots;

// Core module re-exports
pub use generation::*;
pub use item::*;
pub use registry::*;
pub use rules::*;
pub use slots::*;

/// Core error type for the enchant slots crate.
#[derive(thiserror::Error, Debug)]
pub enum EnchantError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Identifier could not be parsed
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// An enchantment was registered twice
    #[error("Duplicate enchantment: {0}")]
    DuplicateEnchantment(String),

    /// Configuration values are out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generated slots broke an invariant
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the crate.
pub type EnchantResult<T> = Result<T, EnchantError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation constants.
pub mod config {
    /// Chance that a slot offers three choices
    pub const THREE_CHOICE_CHANCE: f32 = 0.5;

    /// Chance that a second slot is generated
    pub const SECOND_SLOT_CHANCE: f32 = 0.5;

    /// Chance that a third slot is generated once a second exists
    pub const THIRD_SLOT_CHANCE: f32 = 0.25;

    /// Most choices a single slot can offer
    pub const MAX_CHOICES_PER_SLOT: usize = 3;

    /// Namespace assumed for identifiers written without one
    pub const DEFAULT_NAMESPACE: &str = "minecraft";

    /// Item tag marking the weapon category
    pub const WEAPONS_TAG: &str = "mcde:weapons";

    /// Custom data key under which offer slots are stored on an item
    pub const SLOTS_DATA_KEY: &str = "mcde:enchantment_slots";
}
