//! # Enchant Slots Command Line
//!
//! Builds an item from flags, then prints generated offer slots or a single pick
//! as JSON.

use clap::Parser;
use enchant_slots::{
    candidate_pool, pick_one, EnchantResult, EnchantmentId, EnchantmentRegistry, EnchantmentSlots,
    Generator, ItemKind, ItemStack, RuleConfig, SlotChances, SlotGenerator,
};
use log::{debug, info};
use std::path::PathBuf;

/// Command line arguments for the enchantment slot generator.
#[derive(Parser, Debug)]
#[command(name = "enchant-slots")]
#[command(about = "Generate randomized enchantment offer slots for an item")]
#[command(version)]
struct Args {
    /// Item id, e.g. minecraft:diamond_sword
    #[arg(long, default_value = "minecraft:diamond_sword")]
    item: String,

    /// Item kind (sword, axe, pickaxe, bow, helmet, ...)
    #[arg(long, default_value = "sword", value_parser = parse_kind)]
    kind: ItemKind,

    /// Treat the item as part of the weapon category
    #[arg(long)]
    weapon: bool,

    /// Enchantment already applied to the item (repeatable)
    #[arg(long = "applied")]
    applied: Vec<String>,

    /// JSON file with enchantment definitions (defaults to the vanilla set)
    #[arg(long)]
    registry: Option<PathBuf>,

    /// JSON file with selection rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Random seed for generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pick a single enchantment instead of generating slots
    #[arg(long)]
    single: bool,

    /// Chance that a slot offers three choices
    #[arg(long, default_value_t = enchant_slots::config::THREE_CHOICE_CHANCE)]
    three_choice_chance: f32,

    /// Chance that a second slot is generated
    #[arg(long, default_value_t = enchant_slots::config::SECOND_SLOT_CHANCE)]
    second_slot_chance: f32,

    /// Chance that a third slot is generated
    #[arg(long, default_value_t = enchant_slots::config::THIRD_SLOT_CHANCE)]
    third_slot_chance: f32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_kind(raw: &str) -> Result<ItemKind, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .map_err(|_| format!("unknown item kind: {}", raw))
}

fn main() -> EnchantResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting enchant-slots v{}", enchant_slots::VERSION);

    let registry = match &args.registry {
        Some(path) => EnchantmentRegistry::from_json(&std::fs::read_to_string(path)?)?,
        None => EnchantmentRegistry::vanilla()?,
    };
    let rules = match &args.rules {
        Some(path) => RuleConfig::load_from_file(path)?,
        None => RuleConfig::default(),
    };
    let chances = SlotChances::new(
        args.three_choice_chance,
        args.second_slot_chance,
        args.third_slot_chance,
    )?;

    let item = build_item(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generating with seed: {}", seed);
    let mut rng = enchant_slots::utils::create_rng(seed);

    if args.single {
        let pick = pick_one(&item, &registry, &rules, &mut rng);
        println!("{}", serde_json::to_string_pretty(&pick)?);
        return Ok(());
    }

    let pool = candidate_pool(&item, &registry, &rules);
    debug!("Candidate pool has {} enchantment(s)", pool.len());

    let generator = SlotGenerator::new(chances);
    let slots: EnchantmentSlots = generator.generate(&pool, &mut rng);
    generator.validate(&slots, &pool)?;

    println!("{}", serde_json::to_string_pretty(&slots)?);
    Ok(())
}

/// Initializes env_logger, letting `RUST_LOG` override the flag.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Builds the item described by the command line flags.
fn build_item(args: &Args) -> EnchantResult<ItemStack> {
    let mut item = ItemStack::new(args.item.clone(), args.kind);
    if args.weapon {
        item = item.as_weapon();
    }
    for raw in &args.applied {
        item = item.with_enchantment(EnchantmentId::parse(raw)?, 1);
    }
    Ok(item)
}
