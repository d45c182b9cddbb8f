//! Property tests for slot generation invariants.

use enchant_slots::{
    candidate_pool, generate, generate_for_item, present_in, EnchantmentId, EnchantmentRegistry,
    EnchantmentSet, EnchantmentSlots, Generator, ItemKind, ItemStack, RuleConfig, ScriptedRandom,
    SlotGenerator, SlotPosition,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn pool_of(size: usize) -> EnchantmentSet {
    (0..size)
        .map(|i| EnchantmentId::new("test", &format!("e{}", i)).unwrap())
        .collect()
}

fn item_kinds() -> impl Strategy<Value = ItemKind> {
    prop::sample::select(vec![
        ItemKind::Sword,
        ItemKind::Axe,
        ItemKind::Pickaxe,
        ItemKind::Bow,
        ItemKind::Crossbow,
        ItemKind::Trident,
        ItemKind::FishingRod,
        ItemKind::Helmet,
        ItemKind::Boots,
        ItemKind::Elytra,
        ItemKind::Book,
    ])
}

fn assert_lock_holds(slots: &EnchantmentSlots) {
    let mut two_seen = false;
    for slot in slots.iter() {
        assert!(!(two_seen && slot.len() == 3), "three choices after a two-choice slot");
        two_seen |= slot.len() == 2;
    }
}

proptest! {
    #[test]
    fn prop_slots_obey_invariants(size in 0usize..20, seed in any::<u64>()) {
        let pool = pool_of(size);
        let mut rng = StdRng::seed_from_u64(seed);
        let slots = generate(&pool, &mut rng);

        prop_assert_eq!(slots.choice_ids().len(), slots.choice_count());
        prop_assert!(slots.choice_count() <= size);
        prop_assert!(slots.choice_ids().is_subset(&pool));
        prop_assert!(slots.get(SlotPosition::Third).is_none() || slots.get(SlotPosition::Second).is_some());
        prop_assert_eq!(slots.is_empty(), size == 0);
        assert_lock_holds(&slots);
        prop_assert!(SlotGenerator::default().validate(&slots, &pool).is_ok());
    }

    #[test]
    fn prop_scripted_draws_obey_invariants(
        size in 0usize..12,
        floats in prop::collection::vec(0.0f32..1.0, 0..6),
        ints in prop::collection::vec(0usize..12, 0..12),
    ) {
        let pool = pool_of(size);
        let mut random = ScriptedRandom::new(floats, ints);
        let slots = generate(&pool, &mut random);

        prop_assert!(SlotGenerator::default().validate(&slots, &pool).is_ok());
        prop_assert!(random.float_draws() <= 5);
    }

    #[test]
    fn prop_generation_is_deterministic(size in 0usize..15, seed in any::<u64>()) {
        let pool = pool_of(size);
        let first = generate(&pool, &mut StdRng::seed_from_u64(seed));
        let second = generate(&pool, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_single_candidate_gives_single_slot(seed in any::<u64>()) {
        let pool = pool_of(1);
        let slots = generate(&pool, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(slots.len(), 1);
        prop_assert_eq!(slots.get(SlotPosition::First).map(|s| s.len()), Some(1));
    }

    #[test]
    fn prop_offers_never_repeat_present(
        kind in item_kinds(),
        weapon in any::<bool>(),
        applied in prop::collection::vec(0usize..39, 0..5),
        seed in any::<u64>(),
    ) {
        let registry = EnchantmentRegistry::vanilla().unwrap();
        let rules = RuleConfig::permissive();
        let ids: Vec<EnchantmentId> = registry.ids().cloned().collect();

        let mut item = ItemStack::new("minecraft:test_item", kind);
        if weapon {
            item = item.as_weapon();
        }
        for index in applied {
            item = item.with_enchantment(ids[index].clone(), 1);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let first = generate_for_item(&item, &registry, &rules, &mut rng);
        prop_assert!(first.choice_ids().is_disjoint(&present_in(&item)));

        first.write_to_item(&mut item).unwrap();
        let pool = candidate_pool(&item, &registry, &rules);
        let second = generate(&pool, &mut rng);
        prop_assert!(second.choice_ids().is_disjoint(&present_in(&item)));
        prop_assert!(second.choice_ids().is_disjoint(&first.choice_ids()));
    }
}
