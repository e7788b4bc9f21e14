use std::collections::BTreeMap;
use std::fmt;

use super::*;

/// Allocation mechanisms that can be checked for manipulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mechanism {
    SequentialPriority,
    TopTradingCycles,
}

use Mechanism::*;

impl Mechanism {
    pub fn name(&self) -> &'static str {
        match self {
            SequentialPriority => "Sequential Priority",
            TopTradingCycles => "TTC",
        }
    }

    /// Runs the mechanism; `input` is the order for SP and the endowment for TTC.
    pub fn allocate(&self, input: &[usize], preferences: &Preference) -> Result<Allocation> {
        match self {
            SequentialPriority => sequential_priority(input, preferences),
            TopTradingCycles => top_trading_cycles(input, preferences),
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful misreports of one mechanism, keyed by the object they obtain.
pub type Manipulations = BTreeMap<Object, Vec<Vec<Object>>>;

/// Successful misreports per checked mechanism.
pub type ManipulationReport = BTreeMap<Mechanism, Manipulations>;

/// An agent referenced by index or by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgentRef<'a> {
    Index(Agent),
    Name(&'a str),
}

impl From<Agent> for AgentRef<'_> {
    fn from(ag: Agent) -> Self {
        AgentRef::Index(ag)
    }
}

impl<'a> From<&'a str> for AgentRef<'a> {
    fn from(name: &'a str) -> Self {
        AgentRef::Name(name)
    }
}

impl AgentRef<'_> {
    fn resolve(self, preferences: &Preference) -> Result<Agent> {
        match self {
            AgentRef::Index(ag) if ag < preferences.len() => Ok(ag),
            AgentRef::Index(ag) => Err(Error::invalid_input(
                "agent",
                format!("agent {ag} is out of range for {} agents", preferences.len()),
            )),
            AgentRef::Name(name) => preferences
                .agent_index(name)
                .ok_or_else(|| Error::invalid_input("agent", format!("unknown agent '{name}'"))),
        }
    }
}

/// Enumerates every ranking `agent` could report instead of its true one
/// that gets it a strictly better object, under SP with `order` and/or TTC
/// with `endowment`.
///
/// All `n!` rankings are tried for each mechanism, so this is only practical
/// for small profiles. An agent that already receives its top choice cannot
/// gain and gets an empty entry without any search. `preferences` is never
/// modified; each misreport is evaluated on a copy.
///
/// # Errors
///
/// [`Error::InvalidInput`] if neither `order` nor `endowment` is given, the
/// agent is unknown, or the order/endowment is malformed.
pub fn manipulation<'a>(
    agent: impl Into<AgentRef<'a>>,
    preferences: &Preference,
    order: Option<&[Agent]>,
    endowment: Option<&[Object]>,
) -> Result<ManipulationReport> {
    if order.is_none() && endowment.is_none() {
        return Err(Error::invalid_input("mechanism input", "neither order nor endowment is given"));
    }
    let agent = agent.into().resolve(preferences)?;

    let mut report = ManipulationReport::new();
    for (mechanism, input) in [(SequentialPriority, order), (TopTradingCycles, endowment)] {
        if let Some(input) = input {
            report.insert(mechanism, manipulations_for(mechanism, agent, preferences, input)?);
        }
    }
    Ok(report)
}

fn manipulations_for(
    mechanism: Mechanism,
    agent: Agent,
    preferences: &Preference,
    input: &[usize],
) -> Result<Manipulations> {
    let mut result = Manipulations::new();
    let truthful = mechanism.allocate(input, preferences)?.object_of(agent);
    if preferences.top_choice(agent) == Some(truthful) {
        tracing::debug!(%mechanism, agent, "agent already receives its top choice");
        return Ok(result);
    }

    let truthful_rank = preferences.rank_of(agent, truthful);
    let mut misreports = Permutations::new(preferences.len());
    while let Some(misreport) = misreports.next_lending() {
        let reported = preferences.with_ranking(agent, misreport.to_vec());
        let obtained = mechanism.allocate(input, &reported)?.object_of(agent);
        if preferences.rank_of(agent, obtained) < truthful_rank {
            result.entry(obtained).or_default().push(misreport.to_vec());
        }
    }
    if !result.is_empty() {
        tracing::info!(%mechanism, agent, objects = result.len(), "profitable misreports found");
    }
    Ok(result)
}
