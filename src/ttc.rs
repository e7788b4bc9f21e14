use super::*;
use super::preference::is_permutation;

/// Top trading cycles.
///
/// `endowment[i]` is the object initially owned by agent `i`. Every round,
/// each unassigned agent points to the owner of its top remaining object;
/// following the pointers from the lowest-indexed unassigned agent closes a
/// cycle, whose agents all receive the object they point to and leave the
/// market. The result is Pareto-efficient and individually rational.
///
/// # Errors
///
/// [`Error::InvalidInput`] if `endowment` is not a permutation of the objects
/// with one entry per agent.
pub fn top_trading_cycles(endowment: &[Object], preferences: &Preference) -> Result<Allocation> {
    let n = preferences.len();
    if endowment.len() != n {
        return Err(Error::invalid_input(
            "endowment",
            format!("{} entries for {n} agents", endowment.len()),
        ));
    }
    if !is_permutation(endowment, n) {
        return Err(Error::invalid_input(
            "endowment",
            format!("{endowment:?} is not a permutation of 0..{n}"),
        ));
    }

    let mut owner = vec![0; n];
    for (ag, &obj) in endowment.iter().enumerate() {
        owner[obj] = ag;
    }

    let mut assignment: Vec<Option<Object>> = vec![None; n];
    let mut remaining = vec![true; n];
    let mut top_choices = vec![0; n];
    let mut round = 0;

    while let Some(start) = (0..n).find(|&ag| assignment[ag].is_none()) {
        round += 1;
        for ag in 0..n {
            if assignment[ag].is_none()
                && let Some(&obj) = preferences.ranking(ag).iter().find(|&&o| remaining[o])
            {
                top_choices[ag] = obj;
            }
        }

        // Every agent points to exactly one agent, so the walk must revisit one.
        let mut chain = Vec::new();
        let mut position = vec![None; n];
        let mut ag = start;
        while position[ag].is_none() {
            position[ag] = Some(chain.len());
            chain.push(ag);
            ag = owner[top_choices[ag]];
        }
        let cycle = &chain[position[ag].unwrap_or(0)..];
        tracing::debug!(round, ?cycle, "trading cycle found");

        for &ag in cycle {
            let obj = top_choices[ag];
            assignment[ag] = Some(obj);
            remaining[obj] = false;
        }
    }

    let assignment = assignment.into_iter().map(|o| o.unwrap_or_default()).collect();
    Ok(Allocation::for_profile(assignment, preferences))
}
