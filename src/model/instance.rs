use std::fmt::Display;

use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{constraint::Constraint, objective::Objective, variable::Variable};

/// The default value of an instance's `format` tag.
pub const FORMAT: &str = "XCSP3";

/// Whether the instance is a satisfaction or an optimization problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Framework {
    #[default]
    #[serde(rename = "CSP")]
    Csp,
    #[serde(rename = "COP")]
    Cop,
}

impl Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framework::Csp => write!(f, "CSP"),
            Framework::Cop => write!(f, "COP"),
        }
    }
}

/// Free-form string-keyed metadata attached to an instance.
pub type Annotations = HashMap<String, serde_json::Value>;

/// The named-configuration form of an instance, mirroring the `<instance>`
/// element: the framework tag arrives under the exchange format's `type` key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstanceOptions {
    pub format: Option<String>,
    #[serde(rename = "type")]
    pub framework: Framework,
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    pub objectives: Option<Vec<Objective>>,
    pub annotations: Option<Annotations>,
}

/// A complete problem description: variables, constraints, optional
/// objectives and optional annotations.
///
/// An instance owns every entity it aggregates and is built exactly once,
/// fully populated, by a parser; afterwards it is only read. No cross-entity
/// validation happens here — whether every identifier a constraint mentions
/// is declared in `variables` is the parser/consumer's contract. Absent
/// `objectives` means a satisfaction problem, which is distinct from an
/// optimization problem with an empty objective list.
#[derive(Debug, Clone, Serialize)]
pub struct Instance {
    format: String,
    framework: Framework,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objectives: Option<Vec<Objective>>,
    annotations: Option<Annotations>,
}

impl Instance {
    /// Creates a satisfaction instance with the default `XCSP3` format tag
    /// and no objectives or annotations.
    pub fn new(
        framework: Framework,
        variables: Vec<Variable>,
        constraints: Vec<Constraint>,
    ) -> Self {
        Self {
            format: FORMAT.to_owned(),
            framework,
            variables,
            constraints,
            objectives: None,
            annotations: None,
        }
    }

    /// Builds from the named-configuration form.
    pub fn from_options(options: InstanceOptions) -> Self {
        Self {
            format: options.format.unwrap_or_else(|| FORMAT.to_owned()),
            framework: options.framework,
            variables: options.variables,
            constraints: options.constraints,
            objectives: options.objectives,
            annotations: options.annotations,
        }
    }

    /// Replaces the format tag. Construction-time only; a built instance is
    /// never mutated.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_objectives(mut self, objectives: Vec<Objective>) -> Self {
        self.objectives = Some(objectives);
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objectives(&self) -> Option<&[Objective]> {
        self.objectives.as_deref()
    }

    pub fn annotations(&self) -> Option<&Annotations> {
        self.annotations.as_ref()
    }

    /// `true` when objectives are present, even if the list is empty.
    pub fn is_optimization(&self) -> bool {
        self.objectives.is_some()
    }
}
