use super::*;
use super::preference::is_permutation;

/// Sequential priority (serial dictatorship).
///
/// Agents pick in `order`, each taking its most preferred object that is
/// still unclaimed. `order[0]` picks first. The result is always
/// Pareto-efficient.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `order` is not a permutation of the agents.
pub fn sequential_priority(order: &[Agent], preferences: &Preference) -> Result<Allocation> {
    let n = preferences.len();
    if !is_permutation(order, n) {
        return Err(Error::invalid_input(
            "order",
            format!("{order:?} is not a permutation of 0..{n}"),
        ));
    }

    let mut claimed = vec![false; n];
    let mut assignment = vec![0; n];
    for &ag in order {
        // Rankings are complete, so some object is always left.
        if let Some(&obj) = preferences.ranking(ag).iter().find(|&&o| !claimed[o]) {
            claimed[obj] = true;
            assignment[ag] = obj;
            tracing::trace!(agent = ag, object = obj, "sequential priority pick");
        }
    }
    Ok(Allocation::for_profile(assignment, preferences))
}
