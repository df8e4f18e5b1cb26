use serde::{Deserialize, Serialize};

use crate::error::{ConstructionError, Result};

/// A constraint defined by a boolean expression over variables, written in
/// prefix functional notation, e.g. `lt(add(x,y),z)`.
///
/// The expression is opaque to the model: it is stored verbatim and never
/// parsed or evaluated here. A downstream solver interprets the operator
/// vocabulary (`eq`, `ne`, `lt`, `le`, `gt`, `ge`, `not`, `and`, `or`, `xor`,
/// `iff`, `imp`) and function vocabulary (`add`, `sub`, `mul`, `div`, `mod`,
/// `sqr`, `neg`, `abs`, `min`, `max`, `dist`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntensionConstraint {
    id: String,
    function: String,
}

/// The named-configuration form of an intension constraint. The expression
/// text arrives under the exchange format's `_function` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensionOptions {
    pub id: Option<String>,
    #[serde(rename = "_function")]
    pub function: String,
}

impl IntensionConstraint {
    /// Creates an intension constraint. An absent identifier normalizes to
    /// `""`; an empty expression is a construction error.
    pub fn new(id: Option<String>, function: impl Into<String>) -> Result<Self> {
        let function = function.into();
        if function.is_empty() {
            return Err(ConstructionError::EmptyField {
                entity: "intension",
                field: "function",
            }
            .into());
        }

        Ok(Self {
            id: id.unwrap_or_default(),
            function,
        })
    }

    pub fn from_options(options: IntensionOptions) -> Result<Self> {
        Self::new(options.id, options.function)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The expression text, exactly as constructed.
    pub fn function(&self) -> &str {
        &self.function
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{ConstructionError, ModelError};

    #[test]
    fn stores_the_expression_verbatim() {
        let constraint = IntensionConstraint::new(Some("c1".to_owned()), "lt(x,y)").unwrap();

        assert_eq!(constraint.id(), "c1");
        assert_eq!(constraint.function(), "lt(x,y)");
    }

    #[test]
    fn rejects_an_empty_expression() {
        let err = IntensionConstraint::new(None, "").unwrap_err();

        assert!(matches!(
            err.model_error(),
            ModelError::Construction(ConstructionError::EmptyField {
                entity: "intension",
                field: "function",
            })
        ));
    }

    #[test]
    fn absent_id_reads_as_the_empty_string() {
        let absent = IntensionConstraint::new(None, "eq(x,y)").unwrap();
        let empty = IntensionConstraint::new(Some(String::new()), "eq(x,y)").unwrap();

        assert_eq!(absent, empty);
        assert_eq!(absent.id(), "");
    }

    #[test]
    fn options_form_mirrors_the_positional_form() {
        let constraint = IntensionConstraint::from_options(IntensionOptions {
            id: None,
            function: "ge(y,x)".to_owned(),
        })
        .unwrap();

        assert_eq!(constraint, IntensionConstraint::new(None, "ge(y,x)").unwrap());
    }
}
