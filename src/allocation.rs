use std::collections::HashMap;
use std::fmt;

use super::*;
use super::error::{check_unique, complete_names, default_names, Warning};

/// Assignment of exactly one object to each agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    assignment: Vec<Object>,
    agents: Vec<String>,
    objects: Vec<String>,
}

impl Allocation {
    /// Validates an assignment, where `assignment[i]` is the object of agent `i`.
    pub fn new(
        assignment: Vec<Object>,
        agents: Option<Vec<String>>,
        objects: Option<Vec<String>>,
    ) -> Result<Validated<Self>> {
        let n = assignment.len();
        let mut warnings = Vec::new();

        let mut seen = std::collections::HashSet::with_capacity(n);
        if let Some(&obj) = assignment.iter().find(|&&obj| !seen.insert(obj)) {
            return Err(Error::invariant(
                "allocation",
                format!("object {obj} cannot be assigned to more than one agent"),
            ));
        }

        let (agents, partial) = complete_names(agents, n, "agent", "allocation")?;
        if let Some(given) = partial {
            warnings.push(Warning::PartialAgentNames { given, expected: n });
        }

        let objects = match objects {
            None => default_names("object", n),
            Some(objects) => {
                check_unique(&objects, "allocation")?;
                if objects.len() < n {
                    return Err(Error::invariant(
                        "allocation",
                        format!("{} object names for {n} agents; number of objects must not be less than number of agents", objects.len()),
                    ));
                }
                objects
            }
        };
        if let Some(&obj) = assignment.iter().find(|&&obj| obj >= objects.len()) {
            return Err(Error::invariant(
                "allocation",
                format!("object index {obj} is out of range for {} objects", objects.len()),
            ));
        }

        Ok(Validated::new(Self::new_unchecked(assignment, agents, objects), warnings))
    }

    /// Builds an allocation with default names.
    pub fn from_vec(assignment: Vec<Object>) -> Result<Validated<Self>> {
        Self::new(assignment, None, None)
    }

    pub(crate) fn new_unchecked(assignment: Vec<Object>, agents: Vec<String>, objects: Vec<String>) -> Self {
        debug_assert_eq!(assignment.len(), agents.len(), "One name per agent.");
        debug_assert!(
            assignment.iter().all(|&o| o < objects.len()),
            "Object numbers should be less than the number of objects."
        );
        Allocation { assignment, agents, objects }
    }

    /// Wraps a mechanism's output with the names of the profile it was computed from.
    pub(crate) fn for_profile(assignment: Vec<Object>, preferences: &Preference) -> Self {
        Self::new_unchecked(assignment, preferences.agents().to_vec(), preferences.objects().to_vec())
    }

    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    pub fn object_of(&self, ag: Agent) -> Object {
        debug_assert!(ag < self.len(), "Agent number out of range.");
        self.assignment[ag]
    }

    pub fn as_slice(&self) -> &[Object] {
        &self.assignment
    }

    /// The assigned object indices.
    pub fn to_list(&self) -> Vec<Object> {
        self.assignment.clone()
    }

    /// Agent name to object name.
    pub fn to_map(&self) -> HashMap<&str, &str> {
        self.pairs().collect()
    }

    /// `(agent name, object name)` pairs in agent order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.pairs().map(|(a, o)| (a.to_string(), o.to_string())).collect()
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignment
            .iter()
            .enumerate()
            .map(|(ag, &obj)| (self.agents[ag].as_str(), self.objects[obj].as_str()))
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bar = "=".repeat(15);
        writeln!(f)?;
        writeln!(f, "{bar} Allocation {bar}")?;
        for (agent, object) in self.pairs() {
            writeln!(f, "{agent} \u{2192} {object}")?;
        }
        write!(f, "{}", "=".repeat(42))
    }
}
