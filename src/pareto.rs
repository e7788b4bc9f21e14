use super::*;
use super::error::default_names;

/// Profiles at least this large make the exhaustive search expensive.
pub const LARGE_PROFILE: usize = 7;

/// Returns `true` if no other allocation makes some agent better off without
/// making another worse off.
///
/// The allocation must be named like the profile, or carry the default
/// `agent_i` / `object_i` names, and must have one entry per agent.
///
/// # Errors
///
/// [`Error::Mismatch`] if names or lengths disagree.
pub fn is_pareto_efficient(allocation: &Allocation, preferences: &Preference) -> Result<bool> {
    let n = allocation.len();
    if n == 0 {
        tracing::warn!("no agents exist; the allocation is trivially Pareto-efficient");
    }
    if allocation.agents() != preferences.agents() && allocation.agents() != default_names("agent", n) {
        return Err(Error::Mismatch(
            "agents in allocation should be the same as agents in preference".into(),
        ));
    }
    if allocation.objects() != preferences.objects() && allocation.objects() != default_names("object", n) {
        return Err(Error::Mismatch(
            "objects in allocation should be the same as objects in preference".into(),
        ));
    }
    if preferences.len() != n {
        return Err(Error::Mismatch(format!(
            "preference profile has {} rankings for an allocation of {n} agents",
            preferences.len()
        )));
    }
    Ok(!ImprovementGraph::new(allocation.as_slice(), preferences).has_cycle())
}

/// All Pareto-efficient allocations, in lexicographic order of assignments.
///
/// Every permutation of the objects is tested, so this takes `O(n! n^2)`
/// time; a warning is logged for profiles of [`LARGE_PROFILE`] agents or more.
/// An empty profile yields no allocations.
pub fn pareto_efficient_allocations(preferences: &Preference) -> Vec<Allocation> {
    let n = preferences.len();
    if n >= LARGE_PROFILE {
        tracing::warn!(
            agents = n,
            candidates = Permutations::total(n),
            "the time complexity of this search is O(n!); use it carefully with large profiles"
        );
    }
    let mut res = Vec::new();
    if n == 0 {
        return res;
    }
    let mut candidates = Permutations::new(n);
    while let Some(assignment) = candidates.next_lending() {
        if !ImprovementGraph::new(assignment, preferences).has_cycle() {
            res.push(Allocation::for_profile(assignment.to_vec(), preferences));
        }
    }
    tracing::debug!(agents = n, found = res.len(), "pareto-efficient allocations enumerated");
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static PREF1: LazyLock<Preference> = LazyLock::new(|| {
        Preference::new(
            vec![vec![0, 1, 2], vec![1, 0, 2], vec![2, 0, 1]],
            Some(vec!["Alice".into(), "Bob".into(), "Carol".into()]),
            Some(vec!["A".into(), "B".into(), "C".into()]),
        )
        .unwrap()
        .into_inner()
    });

    fn alloc(v: Vec<Object>, agents: &[&str], objects: &[&str]) -> Allocation {
        Allocation::new(
            v,
            Some(agents.iter().map(|s| s.to_string()).collect()),
            Some(objects.iter().map(|s| s.to_string()).collect()),
        )
        .unwrap()
        .into_inner()
    }

    fn lists(allocations: &[Allocation]) -> Vec<Vec<Object>> {
        allocations.iter().map(|a| a.to_list()).collect()
    }

    #[test]
    fn test_is_pareto_efficient() {
        let a = alloc(vec![0, 1, 2], &["Alice", "Bob", "Carol"], &["A", "B", "C"]);
        assert!(is_pareto_efficient(&a, &PREF1).unwrap());
        let a = Allocation::from_vec(vec![0, 2, 1]).unwrap().into_inner();
        assert!(!is_pareto_efficient(&a, &PREF1).unwrap());

        let pref = Preference::from_rankings(vec![vec![1, 0, 2], vec![1, 2, 0], vec![2, 0, 1]])
            .unwrap()
            .into_inner();
        let a = Allocation::from_vec(vec![0, 1, 2]).unwrap().into_inner();
        assert!(is_pareto_efficient(&a, &pref).unwrap());
        let a = Allocation::from_vec(vec![2, 0, 1]).unwrap().into_inner();
        assert!(!is_pareto_efficient(&a, &pref).unwrap());
    }

    #[test]
    fn test_improving_swaps_are_rejected() {
        // Two agents holding each other's top choice.
        let pref = Preference::from_rankings(vec![vec![1, 0], vec![0, 1]]).unwrap().into_inner();
        let a = Allocation::from_vec(vec![0, 1]).unwrap().into_inner();
        assert!(!is_pareto_efficient(&a, &pref).unwrap());
        let a = Allocation::from_vec(vec![1, 0]).unwrap().into_inner();
        assert!(is_pareto_efficient(&a, &pref).unwrap());

        // Three agents in a rotation.
        let pref = Preference::from_rankings(vec![vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]])
            .unwrap()
            .into_inner();
        let a = Allocation::from_vec(vec![0, 1, 2]).unwrap().into_inner();
        assert!(!is_pareto_efficient(&a, &pref).unwrap());
        let a = Allocation::from_vec(vec![1, 2, 0]).unwrap().into_inner();
        assert!(is_pareto_efficient(&a, &pref).unwrap());
    }

    #[test]
    fn test_agents_mismatch() {
        let a = alloc(vec![0, 1, 2], &["Alice", "Bob", "David"], &["A", "B", "C"]);
        let err = is_pareto_efficient(&a, &PREF1).unwrap_err();
        assert!(matches!(err, Error::Mismatch(_)));
        assert!(err.to_string().contains("agents in preference"));
    }

    #[test]
    fn test_objects_mismatch() {
        let a = alloc(vec![0, 1, 2], &["Alice", "Bob", "Carol"], &["A", "B", "D"]);
        let err = is_pareto_efficient(&a, &PREF1).unwrap_err();
        assert!(err.to_string().contains("objects in preference"));
    }

    #[test]
    fn test_length_mismatch() {
        let v = Preference::from_rankings(vec![vec![0, 1], vec![]]).unwrap();
        assert!(!v.is_clean());
        let a = Allocation::from_vec(vec![0, 1, 2]).unwrap().into_inner();
        let err = is_pareto_efficient(&a, &v.value).unwrap_err();
        assert!(err.to_string().contains("rankings"));
    }

    #[test]
    fn test_empty_is_efficient() {
        let pref = Preference::from_rankings(vec![]).unwrap().into_inner();
        let a = Allocation::from_vec(vec![]).unwrap().into_inner();
        assert!(is_pareto_efficient(&a, &pref).unwrap());
    }

    #[test]
    fn test_pareto_efficient_allocations() {
        let pref = Preference::from_rankings(vec![vec![0, 1, 2], vec![1, 2, 0], vec![0, 1, 2]])
            .unwrap()
            .into_inner();
        assert_eq!(
            lists(&pareto_efficient_allocations(&pref)),
            [[0, 1, 2], [0, 2, 1], [1, 2, 0], [2, 1, 0]]
        );
        assert_eq!(lists(&pref.pareto_efficient_allocations()), lists(&pareto_efficient_allocations(&pref)));
    }

    #[test]
    fn test_pareto_efficient_allocations_keep_names() {
        let res = pareto_efficient_allocations(&PREF1);
        assert!(!res.is_empty());
        for a in &res {
            assert_eq!(a.agents(), PREF1.agents());
            assert_eq!(a.objects(), PREF1.objects());
            assert!(is_pareto_efficient(a, &PREF1).unwrap());
        }
    }

    #[test]
    fn test_same_preference_all_efficient() {
        let pref = Preference::from_rankings(vec![vec![1, 2, 0]; 3]).unwrap().into_inner();
        assert_eq!(
            lists(&pareto_efficient_allocations(&pref)),
            Permutations::new(3).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_pareto_efficient_allocations_empty() {
        let pref = Preference::from_rankings(vec![]).unwrap().into_inner();
        assert!(pareto_efficient_allocations(&pref).is_empty());
    }

    #[test]
    fn test_pareto_efficient_allocations_large() {
        let pref = Preference::from_rankings(vec![(0..7).collect::<Vec<_>>(); 7]).unwrap().into_inner();
        assert_eq!(pareto_efficient_allocations(&pref).len(), 5040);
    }
}
