use gamealloc::{
    is_pareto_efficient, manipulation, pareto_efficient_allocations, sequential_priority, top_trading_cycles,
    Allocation, Mechanism, Object, Permutations, Preference,
};
use proptest::prelude::*;

fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
}

/// A complete profile of `n` agents together with one extra permutation
/// (used as an order or an endowment).
fn profile_with_input(max: usize) -> impl Strategy<Value = (Vec<Vec<Object>>, Vec<usize>)> {
    (1..=max).prop_flat_map(|n| (prop::collection::vec(permutation(n), n), permutation(n)))
}

fn is_bijection(v: &[Object]) -> bool {
    let mut sorted = v.to_vec();
    sorted.sort_unstable();
    sorted == (0..v.len()).collect::<Vec<_>>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sp_is_efficient_bijection((rankings, order) in profile_with_input(6)) {
        let prefs = Preference::from_rankings(rankings).unwrap().into_inner();
        let alloc = sequential_priority(&order, &prefs).unwrap();
        prop_assert!(is_bijection(alloc.as_slice()));
        prop_assert!(is_pareto_efficient(&alloc, &prefs).unwrap());
        // The first agent in the order always gets its top choice.
        prop_assert_eq!(Some(alloc.object_of(order[0])), prefs.top_choice(order[0]));
    }

    #[test]
    fn ttc_is_efficient_and_individually_rational((rankings, endowment) in profile_with_input(6)) {
        let prefs = Preference::from_rankings(rankings).unwrap().into_inner();
        let alloc = top_trading_cycles(&endowment, &prefs).unwrap();
        prop_assert!(is_bijection(alloc.as_slice()));
        prop_assert!(is_pareto_efficient(&alloc, &prefs).unwrap());
        for ag in prefs.agent_ids() {
            prop_assert!(prefs.rank_of(ag, alloc.object_of(ag)) <= prefs.rank_of(ag, endowment[ag]));
        }
    }

    #[test]
    fn efficient_set_contains_sp_outcomes((rankings, order) in profile_with_input(5)) {
        let prefs = Preference::from_rankings(rankings).unwrap().into_inner();
        let efficient = pareto_efficient_allocations(&prefs);
        let sp = sequential_priority(&order, &prefs).unwrap();
        prop_assert!(efficient.contains(&sp));
        for alloc in &efficient {
            prop_assert!(is_pareto_efficient(alloc, &prefs).unwrap());
        }
    }

    #[test]
    fn sp_and_ttc_are_strategy_proof((rankings, input) in profile_with_input(4), agent in 0usize..4) {
        let prefs = Preference::from_rankings(rankings).unwrap().into_inner();
        let agent = agent % prefs.len();
        let report = manipulation(agent, &prefs, Some(input.as_slice()), Some(input.as_slice())).unwrap();
        prop_assert_eq!(report.len(), 2);
        prop_assert!(report.values().all(|found| found.is_empty()));
    }

    #[test]
    fn top_choice_means_no_search((rankings, order) in profile_with_input(5)) {
        let prefs = Preference::from_rankings(rankings).unwrap().into_inner();
        let first = order[0];
        let report = manipulation(first, &prefs, Some(order.as_slice()), None).unwrap();
        prop_assert_eq!(report.get(&Mechanism::SequentialPriority).map(|m| m.len()), Some(0));
    }
}

#[test]
fn empty_profile() {
    let prefs = Preference::from_rankings(vec![]).unwrap().into_inner();
    assert!(sequential_priority(&[], &prefs).unwrap().is_empty());
    assert!(top_trading_cycles(&[], &prefs).unwrap().is_empty());
    let alloc = Allocation::from_vec(vec![]).unwrap().into_inner();
    assert!(is_pareto_efficient(&alloc, &prefs).unwrap());
    assert!(pareto_efficient_allocations(&prefs).is_empty());
}

fn names(v: &[&str]) -> Option<Vec<String>> {
    Some(v.iter().map(|s| s.to_string()).collect())
}

#[test]
fn walkthrough_scenarios() {
    let prefs = Preference::new(
        vec![vec![0, 1, 2], vec![2, 0, 1], vec![2, 1, 0]],
        names(&["Alice", "Bob", "Carol"]),
        names(&["A", "B", "C"]),
    )
    .unwrap()
    .into_inner();

    let sp = sequential_priority(&[2, 0, 1], &prefs).unwrap();
    assert_eq!(
        sp.to_pairs(),
        [("Alice".to_string(), "A".to_string()), ("Bob".into(), "B".into()), ("Carol".into(), "C".into())]
    );

    let ttc = top_trading_cycles(&[1, 2, 0], &prefs).unwrap();
    assert_eq!(
        ttc.to_pairs(),
        [("Alice".to_string(), "A".to_string()), ("Bob".into(), "C".into()), ("Carol".into(), "B".into())]
    );
}

#[test]
fn unanimous_profile_makes_every_allocation_efficient() {
    let prefs = Preference::from_rankings(vec![vec![0, 1, 2]; 3]).unwrap().into_inner();
    let efficient = pareto_efficient_allocations(&prefs);
    assert_eq!(efficient.len(), 6);
    assert_eq!(
        efficient.iter().map(Allocation::to_list).collect::<Vec<_>>(),
        Permutations::new(3).collect::<Vec<_>>()
    );
}
