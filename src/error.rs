//! Error and warning types for gamealloc

use std::fmt;

use thiserror::Error;

use super::*;

/// Result type alias using gamealloc's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by constructors and mechanisms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed mechanism input (order, endowment, agent reference, size).
    #[error("invalid {arg}: {reason}")]
    InvalidInput {
        /// The offending argument
        arg: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Allocation and preference profile disagree on names or length.
    #[error("mismatch: {0}")]
    Mismatch(String),

    /// A preference profile or allocation breaks a structural invariant.
    #[error("invalid {what}: {reason}")]
    InvariantViolation {
        /// The value being constructed
        what: &'static str,
        /// The violated invariant
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_input(arg: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidInput { arg, reason: reason.into() }
    }

    pub(crate) fn invariant(what: &'static str, reason: impl Into<String>) -> Self {
        Error::InvariantViolation { what, reason: reason.into() }
    }
}

/// Non-fatal conditions repaired during construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// Fewer agent names than agents; `agent_i` defaults were appended.
    PartialAgentNames { given: usize, expected: usize },
    /// Fewer object names than objects; `object_i` defaults were appended.
    PartialObjectNames { given: usize, expected: usize },
    /// A ranking did not mention every object; the missing ones were appended.
    PartialRanking { agent: String, missing: Vec<Object> },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::PartialAgentNames { given, expected } => write!(
                f,
                "list of agents is partial ({given} of {expected}); missing names appended as \"agent_i\""
            ),
            Warning::PartialObjectNames { given, expected } => write!(
                f,
                "list of objects is partial ({given} of {expected}); missing names appended as \"object_i\""
            ),
            Warning::PartialRanking { agent, missing } => {
                write!(f, "preference for agent {agent} is partial; missing {missing:?} appended to the end")
            }
        }
    }
}

/// A successfully constructed value together with the repairs applied to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Validated<T> {
    pub(crate) fn new(value: T, warnings: Vec<Warning>) -> Self {
        for w in &warnings {
            tracing::warn!(warning = %w, "input repaired during validation");
        }
        Validated { value, warnings }
    }

    /// Returns `true` when no repair was needed.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Drops the warnings and returns the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Checks that names are unique and no more numerous than `n`, then fills
/// missing names with `{prefix}_i`. Returns the number of names given when
/// defaults had to be appended.
pub(crate) fn complete_names(
    names: Option<Vec<String>>,
    n: usize,
    prefix: &str,
    what: &'static str,
) -> Result<(Vec<String>, Option<usize>)> {
    let Some(mut names) = names else {
        return Ok((default_names(prefix, n), None));
    };
    check_unique(&names, what)?;
    if names.len() > n {
        return Err(Error::invariant(
            what,
            format!("{} {prefix} names given for {n} {prefix}s", names.len()),
        ));
    }
    let given = names.len();
    let partial = (given < n).then_some(given);
    names.extend((names.len()..n).map(|i| format!("{prefix}_{i}")));
    // Defaults may collide with user-supplied names.
    check_unique(&names, what)?;
    Ok((names, partial))
}

pub(crate) fn check_unique(names: &[String], what: &'static str) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(Error::invariant(what, format!("name '{name}' appears more than once")));
        }
    }
    Ok(())
}

pub(crate) fn default_names(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}_{i}")).collect()
}
