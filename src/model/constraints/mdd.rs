use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{ConstructionError, Result, ValidationError},
    model::{constraint::Transition, variable::VariableElement},
};

/// A constraint requiring the values of the variables in `list`, read in
/// order, to trace a root-to-terminal path through a layered multi-valued
/// decision diagram.
///
/// The diagram's node set is implicit in the transitions. Validation runs
/// once, at construction, and checks three things: the root is a pure source
/// (nothing points back to it), the terminal is a pure destination (it is
/// absorbing), and the diagram is layered — every node at a given depth
/// offers exactly the same set of outgoing values, matching one variable's
/// domain. Reachability of the terminal from every node is *not* checked.
///
/// Layering is established by breadth-first expansion from the root. A
/// transition relation containing a cycle among inner nodes violates the
/// producer contract; it is rejected once expansion exceeds the transition
/// count, since an acyclic diagram can never have more levels than
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MddConstraint {
    id: String,
    list: Vec<VariableElement>,
    transitions: Vec<Transition>,
    root: String,
    terminal: String,
    level_count: usize,
}

/// The named-configuration form of an mdd constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MddOptions {
    pub id: Option<String>,
    pub list: Vec<VariableElement>,
    pub transitions: Vec<Transition>,
    pub root: String,
    pub terminal: String,
}

impl MddConstraint {
    /// Creates an mdd constraint, validating the diagram.
    ///
    /// Fails with a [`ConstructionError`] when `list` or `transitions` is
    /// empty, and with a [`ValidationError`] when the root/terminal polarity
    /// rules are violated or a level's nodes disagree on their outgoing
    /// values.
    pub fn new(
        id: Option<String>,
        list: Vec<VariableElement>,
        transitions: Vec<Transition>,
        root: impl Into<String>,
        terminal: impl Into<String>,
    ) -> Result<Self> {
        let root = root.into();
        let terminal = terminal.into();

        if list.is_empty() {
            return Err(ConstructionError::EmptyField {
                entity: "mdd",
                field: "list",
            }
            .into());
        }
        if transitions.is_empty() {
            return Err(ConstructionError::EmptyField {
                entity: "mdd",
                field: "transitions",
            }
            .into());
        }

        let sources: HashSet<&str> = transitions.iter().map(|t| t.from.as_str()).collect();
        let destinations: HashSet<&str> = transitions.iter().map(|t| t.to.as_str()).collect();

        if !sources.contains(root.as_str()) {
            return Err(ValidationError::UnknownRoot { node: root.clone() }.into());
        }
        if destinations.contains(root.as_str()) {
            return Err(ValidationError::RootHasIncoming { node: root.clone() }.into());
        }
        if !destinations.contains(terminal.as_str()) {
            return Err(ValidationError::UnknownTerminal {
                node: terminal.clone(),
            }
            .into());
        }
        if sources.contains(terminal.as_str()) {
            return Err(ValidationError::TerminalHasOutgoing {
                node: terminal.clone(),
            }
            .into());
        }

        let level_count = check_levels(&transitions, &root, &terminal)?;

        debug!(
            nodes = sources.union(&destinations).count(),
            transitions = transitions.len(),
            levels = level_count,
            "validated mdd"
        );

        Ok(Self {
            id: id.unwrap_or_default(),
            list,
            transitions,
            root,
            terminal,
            level_count,
        })
    }

    pub fn from_options(options: MddOptions) -> Result<Self> {
        Self::new(
            options.id,
            options.list,
            options.transitions,
            options.root,
            options.terminal,
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

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    /// The number of levels found by the breadth-first expansion; for a
    /// well-formed diagram this equals the length of `list`.
    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// The diagram's node set: every endpoint of every transition.
    pub fn nodes(&self) -> HashSet<&str> {
        self.transitions
            .iter()
            .flat_map(|t| [t.from.as_str(), t.to.as_str()])
            .collect()
    }
}

/// Partitions the nodes into levels from the root and checks that every node
/// of a level offers exactly the union of its level's outgoing values.
///
/// Returns the number of levels expanded. Edges into the terminal do not
/// generate new levels; expansion stops at the first empty level. A single
/// `O(E)` sweep over the adjacency map.
fn check_levels(transitions: &[Transition], root: &str, terminal: &str) -> Result<usize> {
    let mut outgoing: HashMap<&str, Vec<(i64, &str)>> = HashMap::new();
    for transition in transitions {
        outgoing
            .entry(transition.from.as_str())
            .or_default()
            .push((transition.value, transition.to.as_str()));
    }

    let mut level: Vec<&str> = vec![root];
    let mut level_index = 0;

    while !level.is_empty() {
        // An acyclic diagram reaches at most one level per transition, so
        // running past that bound means the relation loops.
        if level_index > transitions.len() {
            return Err(ValidationError::CyclicDiagram {
                limit: transitions.len(),
            }
            .into());
        }

        let mut level_values: HashSet<i64> = HashSet::new();
        for node in &level {
            if let Some(edges) = outgoing.get(node) {
                level_values.extend(edges.iter().map(|&(value, _)| value));
            }
        }

        // Equality against the union, not subset: a node missing a value its
        // siblings offer (or offering none at all) breaks the layering.
        for node in &level {
            let own: HashSet<i64> = outgoing
                .get(node)
                .map(|edges| edges.iter().map(|&(value, _)| value).collect())
                .unwrap_or_default();
            if own != level_values {
                return Err(ValidationError::InconsistentLevel {
                    node: (*node).to_owned(),
                    level: level_index,
                }
                .into());
            }
        }

        let mut next: Vec<&str> = Vec::new();
        let mut queued: HashSet<&str> = HashSet::new();
        for node in &level {
            if let Some(edges) = outgoing.get(node) {
                for &(_, to) in edges {
                    if to != terminal && queued.insert(to) {
                        next.push(to);
                    }
                }
            }
        }

        level = next;
        level_index += 1;
    }

    Ok(level_index)
}
