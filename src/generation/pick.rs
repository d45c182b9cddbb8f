//! # Single Pick
//!
//! Picks one enchantment directly instead of building offer slots.

use crate::{
    candidate_pool, EnchantError, EnchantResult, Enchantable, EnchantmentId, EnchantmentRegistry,
    EnchantmentSet, Generator, SelectionRules, SlotRandom,
};

/// Generator picking one candidate uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePickGenerator;

impl Generator<Option<EnchantmentId>> for SinglePickGenerator {
    fn generate<R: SlotRandom + ?Sized>(
        &self,
        pool: &EnchantmentSet,
        random: &mut R,
    ) -> Option<EnchantmentId> {
        if pool.is_empty() {
            return None;
        }
        let index = random.next_int(pool.len());
        pool.iter().nth(index).cloned()
    }

    fn validate(&self, pick: &Option<EnchantmentId>, pool: &EnchantmentSet) -> EnchantResult<()> {
        match pick {
            Some(id) if !pool.contains(id) => Err(EnchantError::GenerationFailed(format!(
                "picked {} outside the candidate pool",
                id
            ))),
            None if !pool.is_empty() => Err(EnchantError::GenerationFailed(
                "nothing picked from a non-empty pool".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn generator_type(&self) -> &'static str {
        "SinglePickGenerator"
    }
}

/// Picks one enchantment the item neither has nor is being offered.
///
/// # Examples
///
/// ```
/// use enchant_slots::{pick_one, EnchantmentId, EnchantmentRegistry, ItemKind, ItemStack, RuleConfig, ScriptedRandom};
///
/// let registry = EnchantmentRegistry::vanilla().unwrap();
/// let rules = RuleConfig::allow_only([EnchantmentId::parse("lure").unwrap()]);
/// let rod = ItemStack::new("minecraft:fishing_rod", ItemKind::FishingRod);
///
/// let pick = pick_one(&rod, &registry, &rules, &mut ScriptedRandom::default());
/// assert_eq!(pick, Some(EnchantmentId::parse("lure").unwrap()));
/// ```
pub fn pick_one<I, S, R>(
    item: &I,
    registry: &EnchantmentRegistry,
    rules: &S,
    random: &mut R,
) -> Option<EnchantmentId>
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
    R: SlotRandom + ?Sized,
{
    SinglePickGenerator.generate(&candidate_pool(item, registry, rules), random)
}

/// Checks whether at least one new enchantment could be offered for the item.
pub fn can_generate_enchantment<I, S>(item: &I, registry: &EnchantmentRegistry, rules: &S) -> bool
where
    I: Enchantable + ?Sized,
    S: SelectionRules + ?Sized,
{
    !candidate_pool(item, registry, rules).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemKind, ItemStack, RuleConfig, ScriptedRandom};

    fn id(raw: &str) -> EnchantmentId {
        EnchantmentId::parse(raw).unwrap()
    }

    #[test]
    fn test_pick_uses_scripted_index() {
        let pool: EnchantmentSet = [id("flame"), id("infinity"), id("power")].into_iter().collect();

        let mut random = ScriptedRandom::new([], [1]);
        let pick = SinglePickGenerator.generate(&pool, &mut random);
        assert_eq!(pick, Some(id("infinity")));
        assert!(SinglePickGenerator.validate(&pick, &pool).is_ok());
        assert_eq!(random.int_draws(), 1);
    }

    #[test]
    fn test_pick_from_empty_pool() {
        let mut random = ScriptedRandom::default();
        let pick = SinglePickGenerator.generate(&EnchantmentSet::new(), &mut random);

        assert!(pick.is_none());
        assert_eq!(random.int_draws(), 0);
        assert!(SinglePickGenerator.validate(&pick, &EnchantmentSet::new()).is_ok());
    }

    #[test]
    fn test_validate_pick() {
        let pool: EnchantmentSet = [id("flame")].into_iter().collect();
        assert!(SinglePickGenerator.validate(&Some(id("lure")), &pool).is_err());
        assert!(SinglePickGenerator.validate(&None, &pool).is_err());
    }

    #[test]
    fn test_pick_one_skips_present() {
        let registry = EnchantmentRegistry::vanilla().unwrap();
        let rules = RuleConfig::default();
        let rod = ItemStack::new("minecraft:fishing_rod", ItemKind::FishingRod)
            .with_enchantment(id("lure"), 3)
            .with_enchantment(id("unbreaking"), 1);

        for seed in 0..20 {
            let mut rng = crate::utils::create_rng(seed);
            assert_eq!(
                pick_one(&rod, &registry, &rules, &mut rng),
                Some(id("luck_of_the_sea"))
            );
        }
    }

    #[test]
    fn test_can_generate_enchantment() {
        let registry = EnchantmentRegistry::vanilla().unwrap();
        let rules = RuleConfig::default();
        let mut rod = ItemStack::new("minecraft:fishing_rod", ItemKind::FishingRod);
        assert!(can_generate_enchantment(&rod, &registry, &rules));

        for path in ["lure", "luck_of_the_sea", "unbreaking"] {
            rod = rod.with_enchantment(id(path), 1);
        }
        assert!(!can_generate_enchantment(&rod, &registry, &rules));
        assert!(pick_one(&rod, &registry, &rules, &mut ScriptedRandom::default()).is_none());
    }
}
