use serde::{Deserialize, Serialize};

use crate::model::constraints::{
    extension::ExtensionConstraint, intension::IntensionConstraint, mdd::MddConstraint,
    regular::RegularConstraint,
};

/// A human-readable summary of a constraint, for diagnostics and tooling.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// One labelled edge of a graph-based constraint encoding.
///
/// For a `regular` constraint this is a DFA transition; for an `mdd`
/// constraint it is an edge between two nodes of the diagram. The label is
/// always a concrete integer value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub value: i64,
    pub to: String,
}

impl Transition {
    pub fn new(from: impl Into<String>, value: i64, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            value,
            to: to.into(),
        }
    }
}

/// Any constraint an instance can hold.
///
/// The variant set is fixed by the exchange format, so this is a closed sum
/// type dispatched by pattern match rather than an open trait. All variants
/// share the identifier contract: the empty string means "unnamed", never
/// "missing".
#[derive(Debug, Clone, Serialize)]
pub enum Constraint {
    Intension(IntensionConstraint),
    Extension(ExtensionConstraint),
    Regular(RegularConstraint),
    Mdd(MddConstraint),
}

impl Constraint {
    pub fn id(&self) -> &str {
        match self {
            Constraint::Intension(c) => c.id(),
            Constraint::Extension(c) => &c.id,
            Constraint::Regular(c) => c.id(),
            Constraint::Mdd(c) => c.id(),
        }
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        match self {
            Constraint::Intension(c) => ConstraintDescriptor {
                name: "IntensionConstraint".to_owned(),
                description: c.function().to_owned(),
            },
            Constraint::Extension(c) => ConstraintDescriptor {
                name: "ExtensionConstraint".to_owned(),
                description: format!(
                    "{} supports, {} conflicts over {} variables",
                    c.supports.len(),
                    c.conflicts.len(),
                    c.list.len()
                ),
            },
            Constraint::Regular(c) => ConstraintDescriptor {
                name: "RegularConstraint".to_owned(),
                description: format!(
                    "automaton with {} transitions over {} variables",
                    c.transitions().len(),
                    c.list().len()
                ),
            },
            Constraint::Mdd(c) => ConstraintDescriptor {
                name: "MddConstraint".to_owned(),
                description: format!(
                    "diagram with {} transitions and {} levels",
                    c.transitions().len(),
                    c.level_count()
                ),
            },
        }
    }
}

impl From<IntensionConstraint> for Constraint {
    fn from(c: IntensionConstraint) -> Self {
        Constraint::Intension(c)
    }
}

impl From<ExtensionConstraint> for Constraint {
    fn from(c: ExtensionConstraint) -> Self {
        Constraint::Extension(c)
    }
}

impl From<RegularConstraint> for Constraint {
    fn from(c: RegularConstraint) -> Self {
        Constraint::Regular(c)
    }
}

impl From<MddConstraint> for Constraint {
    fn from(c: MddConstraint) -> Self {
        Constraint::Mdd(c)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{
        constraints::extension::TupleEntry,
        variable::VariableElement,
    };

    fn scope(names: &[&str]) -> Vec<VariableElement> {
        names.iter().copied().map(VariableElement::from).collect()
    }

    #[test]
    fn id_dispatches_over_every_variant() {
        let intension: Constraint = IntensionConstraint::new(Some("c1".to_owned()), "lt(x,y)")
            .unwrap()
            .into();
        let extension: Constraint =
            ExtensionConstraint::new(Some("c2".to_owned()), scope(&["x"]), vec![], vec![]).into();
        let regular: Constraint = RegularConstraint::new(
            Some("c3".to_owned()),
            scope(&["x"]),
            vec![Transition::new("a", 0, "a")],
            "a",
            vec!["a".to_owned()],
        )
        .unwrap()
        .into();
        let mdd: Constraint = MddConstraint::new(
            None,
            scope(&["x"]),
            vec![Transition::new("r", 0, "t")],
            "r",
            "t",
        )
        .unwrap()
        .into();

        assert_eq!(intension.id(), "c1");
        assert_eq!(extension.id(), "c2");
        assert_eq!(regular.id(), "c3");
        // Absent identifiers read back as the empty string.
        assert_eq!(mdd.id(), "");
    }

    #[test]
    fn descriptors_summarize_each_encoding() {
        let intension: Constraint = IntensionConstraint::new(None, "lt(x,y)").unwrap().into();
        let descriptor = intension.descriptor();
        assert_eq!(descriptor.name, "IntensionConstraint");
        assert_eq!(descriptor.description, "lt(x,y)");

        let extension: Constraint = ExtensionConstraint::new(
            None,
            scope(&["x", "y"]),
            vec![vec![TupleEntry::Value(0), TupleEntry::Star]],
            vec![],
        )
        .into();
        assert_eq!(
            extension.descriptor().description,
            "1 supports, 0 conflicts over 2 variables"
        );

        let regular: Constraint = RegularConstraint::new(
            None,
            scope(&["x", "y"]),
            vec![Transition::new("a", 0, "b"), Transition::new("b", 0, "a")],
            "a",
            vec!["a".to_owned()],
        )
        .unwrap()
        .into();
        assert_eq!(
            regular.descriptor().description,
            "automaton with 2 transitions over 2 variables"
        );

        let mdd: Constraint = MddConstraint::new(
            None,
            scope(&["x"]),
            vec![Transition::new("r", 0, "t"), Transition::new("r", 1, "t")],
            "r",
            "t",
        )
        .unwrap()
        .into();
        let descriptor = mdd.descriptor();
        assert_eq!(descriptor.name, "MddConstraint");
        assert_eq!(
            descriptor.description,
            "diagram with 2 transitions and 1 levels"
        );
    }
}
