//! Property-based tests for the arrangement search.
//!
//! Cross-checks the search against an independent recursive brute-force
//! oracle on small forces, and checks determinism and agreement between
//! the sequential and parallel drivers.

use std::sync::atomic::AtomicBool;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use battleplan::board::{Force, Group, ALL_CLASSES, STANDARD_RULES};
use battleplan::resolve::{compare, MatchupResult};
use battleplan::search::{search, search_with, SearchConfig, Verdict};

fn arb_group() -> impl Strategy<Value = Group> {
    (0..ALL_CLASSES.len(), 1u32..12).prop_map(|(c, n)| Group::new(ALL_CLASSES[c], n).unwrap())
}

fn arb_force(max: usize) -> impl Strategy<Value = Force> {
    prop::collection::vec(arb_group(), 0..=max).prop_map(Force::new)
}

fn wins(own: &Force, order: &[usize], opponent: &Force) -> usize {
    order
        .iter()
        .zip(opponent.iter())
        .filter(|&(&i, opp)| compare(&own[i], opp) == MatchupResult::Win)
        .count()
}

/// Depth-first over unused indices in ascending order, which visits
/// orderings lexicographically. Returns the first qualifying ordering.
fn oracle(own: &Force, opponent: &Force) -> Option<Vec<usize>> {
    fn visit(
        own: &Force,
        opponent: &Force,
        threshold: usize,
        prefix: &mut Vec<usize>,
        used: &mut Vec<bool>,
    ) -> Option<Vec<usize>> {
        if prefix.len() == own.len() {
            return (wins(own, prefix, opponent) >= threshold).then(|| prefix.clone());
        }
        for i in 0..own.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            prefix.push(i);
            let found = visit(own, opponent, threshold, prefix, used);
            prefix.pop();
            used[i] = false;
            if found.is_some() {
                return found;
            }
        }
        None
    }

    let positions = own.len().min(opponent.len());
    if positions == 0 {
        return None;
    }
    visit(
        own,
        opponent,
        positions / 2 + 1,
        &mut Vec::new(),
        &mut vec![false; own.len()],
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The search returns exactly the oracle's first qualifying ordering,
    /// or certifies that none exists.
    #[test]
    fn prop_matches_brute_force_oracle(own in arb_force(6), opponent in arb_force(6)) {
        let outcome = search(&own, &opponent);
        match (outcome.verdict, oracle(&own, &opponent)) {
            (Verdict::Found(a), Some(expected)) => {
                prop_assert_eq!(&a.order, &expected);
                prop_assert!(a.tally.wins >= outcome.pairing.threshold());
                prop_assert_eq!(a.tally.wins, wins(&own, &a.order, &opponent));
                prop_assert_eq!(a.tally.total(), outcome.pairing.positions());
            }
            (Verdict::NoSolution, None) => {}
            (verdict, expected) => {
                prop_assert!(false, "search gave {:?}, oracle gave {:?}", verdict, expected);
            }
        }
    }

    /// Identical inputs always produce the identical arrangement.
    #[test]
    fn prop_deterministic(own in arb_force(6), opponent in arb_force(6)) {
        let first = search(&own, &opponent);
        let second = search(&own, &opponent);
        prop_assert_eq!(first.verdict, second.verdict);
        prop_assert_eq!(first.pairing, second.pairing);
    }

    /// The parallel driver agrees with the sequential one.
    #[test]
    fn prop_parallel_matches_sequential(
        own in arb_force(6),
        opponent in arb_force(6),
        threads in 2usize..5,
    ) {
        let sequential = search(&own, &opponent);
        let config = SearchConfig { threads, ..SearchConfig::default() };
        let parallel = search_with(&own, &opponent, &STANDARD_RULES, &config, &AtomicBool::new(false));
        prop_assert_eq!(parallel.verdict, sequential.verdict);
    }

    /// The accepted ordering's rank equals the number of orderings the
    /// sequential driver evaluated before it.
    #[test]
    fn prop_rank_counts_prior_orderings(own in arb_force(5), opponent in arb_force(5)) {
        let outcome = search(&own, &opponent);
        if let Verdict::Found(a) = &outcome.verdict {
            prop_assert_eq!(a.rank + 1, outcome.stats.orderings);
        }
    }
}

/// Seeded random forces with seven groups per side, beyond the proptest
/// range, still agree with the oracle.
#[test]
fn seeded_seven_group_forces_match_oracle() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let mut random_force = |len: usize| -> Force {
            (0..len)
                .map(|_| {
                    let class = ALL_CLASSES[rng.gen_range(0..ALL_CLASSES.len())];
                    Group::new(class, rng.gen_range(1..20)).unwrap()
                })
                .collect()
        };
        let own = random_force(7);
        let opponent = random_force(7);
        let outcome = search(&own, &opponent);
        assert_eq!(
            outcome.arrangement().map(|a| a.order.clone()),
            oracle(&own, &opponent)
        );
    }
}
