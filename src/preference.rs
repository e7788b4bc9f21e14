use std::ops::Index;

use super::*;
use super::error::{complete_names, Warning};

/// A preference profile: one strict ranking over objects per agent.
///
/// With `n` agents there are exactly `n` objects, and every ranking is a
/// permutation of `0..n`, most preferred first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preference {
    rankings: Vec<Vec<Object>>,
    agents: Vec<String>,
    objects: Vec<String>,
}

impl Preference {
    /// Validates a profile, completing partial rankings and name lists.
    ///
    /// Rankings may omit objects; the missing ones are appended in ascending
    /// order and reported as [`Warning::PartialRanking`]. Name lists shorter
    /// than `n` are filled with `agent_i` / `object_i` defaults.
    pub fn new(
        rankings: Vec<Vec<Object>>,
        agents: Option<Vec<String>>,
        objects: Option<Vec<String>>,
    ) -> Result<Validated<Self>> {
        let n = rankings.len();
        let mut warnings = Vec::new();

        for (ag, ranking) in rankings.iter().enumerate() {
            let mut seen = vec![false; n];
            for &obj in ranking {
                if obj >= n {
                    return Err(Error::invariant(
                        "preference",
                        format!("ranking of agent {ag} mentions object {obj}, but there are only {n} objects"),
                    ));
                }
                if seen[obj] {
                    return Err(Error::invariant(
                        "preference",
                        format!("ranking of agent {ag} mentions object {obj} more than once"),
                    ));
                }
                seen[obj] = true;
            }
        }

        let (agents, partial) = complete_names(agents, n, "agent", "preference")?;
        if let Some(given) = partial {
            warnings.push(Warning::PartialAgentNames { given, expected: n });
        }
        let (objects, partial) = complete_names(objects, n, "object", "preference")?;
        if let Some(given) = partial {
            warnings.push(Warning::PartialObjectNames { given, expected: n });
        }

        let mut rankings = rankings;
        for (ag, ranking) in rankings.iter_mut().enumerate() {
            if ranking.len() == n {
                continue;
            }
            let missing: Vec<Object> = (0..n).filter(|o| !ranking.contains(o)).collect();
            ranking.extend_from_slice(&missing);
            warnings.push(Warning::PartialRanking { agent: agents[ag].clone(), missing });
        }

        Ok(Validated::new(Self::new_unchecked(rankings, agents, objects), warnings))
    }

    /// Builds a profile with default names from complete rankings.
    pub fn from_rankings(rankings: Vec<Vec<Object>>) -> Result<Validated<Self>> {
        Self::new(rankings, None, None)
    }

    pub(crate) fn new_unchecked(rankings: Vec<Vec<Object>>, agents: Vec<String>, objects: Vec<String>) -> Self {
        debug_assert_eq!(agents.len(), rankings.len(), "One name per agent.");
        debug_assert_eq!(objects.len(), rankings.len(), "One name per object.");
        debug_assert!(
            rankings.iter().all(|r| is_permutation(r, rankings.len())),
            "Every ranking is a permutation of the objects."
        );
        Preference { rankings, agents, objects }
    }

    /// Number of agents (and objects).
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    pub fn rankings(&self) -> &[Vec<Object>] {
        &self.rankings
    }

    pub fn ranking(&self, ag: Agent) -> &[Object] {
        &self.rankings[ag]
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    /// Iterator over agent identifiers.
    pub fn agent_ids(&self) -> impl Iterator<Item = Agent> {
        0..self.len()
    }

    /// Looks up an agent by name.
    pub fn agent_index(&self, name: &str) -> Option<Agent> {
        self.agents.iter().position(|a| a == name)
    }

    /// Position of `obj` in the ranking of `ag` (0 is the top choice).
    pub fn rank_of(&self, ag: Agent, obj: Object) -> usize {
        debug_assert!(ag < self.len(), "Agent number out of range.");
        self.rankings[ag]
            .iter()
            .position(|&o| o == obj)
            .unwrap_or(self.len())
    }

    /// Returns `true` if `ag` strictly prefers `a` over `b`.
    pub fn prefers(&self, ag: Agent, a: Object, b: Object) -> bool {
        self.rank_of(ag, a) < self.rank_of(ag, b)
    }

    /// Most preferred object of `ag`.
    pub fn top_choice(&self, ag: Agent) -> Option<Object> {
        self.rankings[ag].first().copied()
    }

    /// Copy of this profile where only the ranking of `ag` is replaced.
    pub(crate) fn with_ranking(&self, ag: Agent, ranking: Vec<Object>) -> Self {
        let mut rankings = self.rankings.clone();
        rankings[ag] = ranking;
        Self::new_unchecked(rankings, self.agents.clone(), self.objects.clone())
    }

    /// All Pareto-efficient allocations for this profile.
    pub fn pareto_efficient_allocations(&self) -> Vec<Allocation> {
        pareto::pareto_efficient_allocations(self)
    }
}

impl Index<Agent> for Preference {
    type Output = [Object];

    fn index(&self, ag: Agent) -> &Self::Output {
        &self.rankings[ag]
    }
}

/// Returns `true` if `v` contains every integer of `0..n` exactly once.
pub(crate) fn is_permutation(v: &[usize], n: usize) -> bool {
    if v.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &x in v {
        if x >= n || seen[x] {
            return false;
        }
        seen[x] = true;
    }
    true
}
