use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{ConstructionError, Result, ValidationError},
    model::{constraint::Transition, variable::VariableElement},
};

/// A constraint requiring the values of the variables in `list`, read in
/// order, to trace an accepting path through a deterministic finite
/// automaton.
///
/// The automaton's state set is implicit: it is the union of both endpoints
/// of every transition, and its alphabet is the union of the transition
/// values. Validation runs once, at construction; a built `RegularConstraint`
/// is always a well-formed DFA. Unreachable or dead states are not errors —
/// no reachability or language-emptiness analysis is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegularConstraint {
    id: String,
    list: Vec<VariableElement>,
    transitions: Vec<Transition>,
    start: String,
    final_states: Vec<String>,
}

/// The named-configuration form of a regular constraint. The accepting states
/// arrive under the exchange format's `final` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegularOptions {
    pub id: Option<String>,
    pub list: Vec<VariableElement>,
    pub transitions: Vec<Transition>,
    pub start: String,
    #[serde(rename = "final")]
    pub final_states: Vec<String>,
}

impl RegularConstraint {
    /// Creates a regular constraint, validating the automaton.
    ///
    /// Fails with a [`ConstructionError`] when `list`, `transitions` or
    /// `final_states` is empty, and with a [`ValidationError`] when `start`
    /// or a final state is not an endpoint of any transition, or when two
    /// transitions leave the same state on the same value.
    pub fn new(
        id: Option<String>,
        list: Vec<VariableElement>,
        transitions: Vec<Transition>,
        start: impl Into<String>,
        final_states: Vec<String>,
    ) -> Result<Self> {
        let start = start.into();

        if list.is_empty() {
            return Err(ConstructionError::EmptyField {
                entity: "regular",
                field: "list",
            }
            .into());
        }
        if transitions.is_empty() {
            return Err(ConstructionError::EmptyField {
                entity: "regular",
                field: "transitions",
            }
            .into());
        }
        if final_states.is_empty() {
            return Err(ConstructionError::EmptyField {
                entity: "regular",
                field: "final",
            }
            .into());
        }

        let states: HashSet<&str> = transitions
            .iter()
            .flat_map(|t| [t.from.as_str(), t.to.as_str()])
            .collect();

        if !states.contains(start.as_str()) {
            return Err(ValidationError::UnknownStartState {
                state: start.clone(),
            }
            .into());
        }
        for state in &final_states {
            if !states.contains(state.as_str()) {
                return Err(ValidationError::UnknownFinalState {
                    state: state.clone(),
                }
                .into());
            }
        }

        // Determinism is a property of the (source, value) pair alone; where
        // the duplicate transition leads is irrelevant.
        let mut seen: HashSet<(&str, i64)> = HashSet::new();
        for transition in &transitions {
            if !seen.insert((transition.from.as_str(), transition.value)) {
                return Err(ValidationError::NondeterministicTransition {
                    state: transition.from.clone(),
                    value: transition.value,
                }
                .into());
            }
        }

        debug!(
            states = states.len(),
            transitions = transitions.len(),
            "validated regular automaton"
        );

        Ok(Self {
            id: id.unwrap_or_default(),
            list,
            transitions,
            start,
            final_states,
        })
    }

    pub fn from_options(options: RegularOptions) -> Result<Self> {
        Self::new(
            options.id,
            options.list,
            options.transitions,
            options.start,
            options.final_states,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn list(&self) -> &[VariableElement] {
        &self.list
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn final_states(&self) -> &[String] {
        &self.final_states
    }

    /// The automaton's state set: every endpoint of every transition.
    pub fn states(&self) -> HashSet<&str> {
        self.transitions
            .iter()
            .flat_map(|t| [t.from.as_str(), t.to.as_str()])
            .collect()
    }
}
