//! Property tests for the draw engine.

use proptest::prelude::*;
use raffle_draw::domain::pool::WeightedPool;
use raffle_draw::domain::record::{Multiplier, TicketRecord};
use raffle_draw::domain::seed::SeedDeriver;
use raffle_draw::domain::selection::select;
use raffle_draw::domain::shuffle::shuffle;
use raffle_test_support::{EntropyStep, RecordingPacer, ScriptedEntropy};

fn pool_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..64)
}

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

proptest! {
    #[test]
    fn prop_shuffle_is_deterministic(seed in any::<i64>(), names in pool_strategy()) {
        let a = shuffle(seed, WeightedPool::from(names.clone()));
        let b = shuffle(seed, WeightedPool::from(names));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_shuffle_conserves_multiset(seed in any::<i64>(), names in pool_strategy()) {
        let shuffled = shuffle(seed, WeightedPool::from(names.clone())).into_vec();
        prop_assert_eq!(shuffled.len(), names.len());
        prop_assert_eq!(sorted(shuffled), sorted(names));
    }

    #[test]
    fn prop_select_truncates_to_pool(seed in any::<i64>(), names in pool_strategy(), n in 0usize..128) {
        let shuffled = shuffle(seed, WeightedPool::from(names.clone()));
        let expected: Vec<String> = shuffled.as_slice().iter().take(n).cloned().collect();
        let result = select(shuffled, n);
        prop_assert_eq!(result.len(), n.min(names.len()));
        prop_assert_eq!(result.into_vec(), expected);
    }

    #[test]
    fn prop_pool_size_is_sum_of_rounded_counts(
        weights in prop::collection::vec(0.0f64..50.0, 0..16),
        m in 1i64..=10_000,
    ) {
        let multiplier = Multiplier::new(m).unwrap();
        let records: Vec<TicketRecord> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| TicketRecord::new(format!("p{i}"), w).unwrap())
            .collect();
        let expected: u64 = records
            .iter()
            .map(|r| u64::from(r.ticket_count(multiplier).unwrap()))
            .sum();
        let pool = WeightedPool::expand(&records, multiplier).unwrap();
        prop_assert_eq!(pool.len() as u64, expected);
    }

    #[test]
    fn prop_derived_seed_is_never_zero(chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..10), 4)) {
        let steps = chunks.into_iter().map(EntropyStep::Bytes).collect();
        let mut source = ScriptedEntropy::new(steps);
        let pacer = RecordingPacer::new();
        if let Ok(seed) = SeedDeriver::default().derive(0, &mut source, &pacer) {
            prop_assert!(seed.from_entropy);
            prop_assert_ne!(seed.value, 0);
        }
    }

    #[test]
    fn prop_out_of_range_multiplier_is_rejected(m in prop_oneof![i64::MIN..1, 10_001i64..]) {
        prop_assert!(Multiplier::new(m).is_err());
    }
}
