use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::model::variable::VariableElement;

/// One position of an extension tuple: a concrete value, or the wildcard `*`
/// that matches any value at that position (only "short" tables use it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TupleEntry {
    Value(i64),
    Star,
}

impl From<i64> for TupleEntry {
    fn from(value: i64) -> Self {
        TupleEntry::Value(value)
    }
}

impl Display for TupleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TupleEntry::Value(v) => write!(f, "{}", v),
            TupleEntry::Star => write!(f, "*"),
        }
    }
}

/// One row of an extension table, parallel to the constraint's `list`.
pub type Tuple = Vec<TupleEntry>;

/// A constraint defined by an explicit table of allowed (`supports`) or
/// forbidden (`conflicts`) tuples over the variables in `list`.
///
/// Tuples keep their declaration order and are never deduplicated. The model
/// deliberately performs no structural validation here: tuple arity is not
/// checked against `list`, and nothing stops both tables from being populated
/// at once, even though a well-formed instance fills exactly one. Both checks
/// are left to the producing parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionConstraint {
    pub id: String,
    pub list: Vec<VariableElement>,
    pub supports: Vec<Tuple>,
    pub conflicts: Vec<Tuple>,
}

/// The named-configuration form of an extension constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionOptions {
    pub id: Option<String>,
    pub list: Vec<VariableElement>,
    pub supports: Vec<Tuple>,
    pub conflicts: Vec<Tuple>,
}

impl ExtensionConstraint {
    /// Creates an extension constraint. An absent identifier normalizes to
    /// `""`. All collections may be empty.
    pub fn new(
        id: Option<String>,
        list: Vec<VariableElement>,
        supports: Vec<Tuple>,
        conflicts: Vec<Tuple>,
    ) -> Self {
        Self {
            id: id.unwrap_or_default(),
            list,
            supports,
            conflicts,
        }
    }

    pub fn from_options(options: ExtensionOptions) -> Self {
        Self::new(
            options.id,
            options.list,
            options.supports,
            options.conflicts,
        )
    }
}
