use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single entry in a variable's domain declaration.
///
/// XCSP3 domains mix standalone integers with closed intervals written as
/// `lo..hi`. Both forms are kept as declared; an interval is never expanded
/// into its members at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainValue {
    /// A single integer value.
    Int(i64),
    /// A closed integer interval `[lo, hi]`.
    ///
    /// The producing parser is responsible for `lo <= hi`; the model stores
    /// the bounds as given.
    Range { lo: i64, hi: i64 },
}

impl DomainValue {
    /// The number of concrete integers this entry denotes. Always at least 1.
    pub fn cardinality(&self) -> usize {
        match self {
            DomainValue::Int(_) => 1,
            DomainValue::Range { lo, hi } => hi.abs_diff(*lo) as usize + 1,
        }
    }

    /// Returns `true` if `value` is denoted by this entry.
    pub fn contains(&self, value: i64) -> bool {
        match self {
            DomainValue::Int(v) => *v == value,
            DomainValue::Range { lo, hi } => (*lo..=*hi).contains(&value),
        }
    }
}

impl From<i64> for DomainValue {
    fn from(value: i64) -> Self {
        DomainValue::Int(value)
    }
}

impl From<(i64, i64)> for DomainValue {
    fn from((lo, hi): (i64, i64)) -> Self {
        DomainValue::Range { lo, hi }
    }
}

impl Display for DomainValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainValue::Int(v) => write!(f, "{}", v),
            DomainValue::Range { lo, hi } => write!(f, "{}..{}", lo, hi),
        }
    }
}

/// The declared domain of an integer variable.
///
/// Entries keep their declaration order; duplicates are permitted (though
/// discouraged) and are not merged. An empty domain stands for a variable
/// whose domain has not been declared yet, e.g. an array cell waiting for the
/// array's default domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain(pub Vec<DomainValue>);

impl Domain {
    pub fn new(values: Vec<DomainValue>) -> Self {
        Self(values)
    }

    /// A domain with no entries, standing for "not declared yet".
    pub fn undeclared() -> Self {
        Self(Vec::new())
    }

    pub fn is_undeclared(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries as declared, without expanding intervals.
    pub fn iter(&self) -> std::slice::Iter<'_, DomainValue> {
        self.0.iter()
    }

    /// Iterates over every concrete integer the domain denotes, expanding
    /// intervals in place. Duplicate entries yield duplicate values.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().flat_map(|entry| match entry {
            DomainValue::Int(v) => *v..=*v,
            DomainValue::Range { lo, hi } => *lo..=*hi,
        })
    }
}

impl FromIterator<DomainValue> for Domain {
    fn from_iter<T: IntoIterator<Item = DomainValue>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<i64> for Domain {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self(iter.into_iter().map(DomainValue::Int).collect())
    }
}
