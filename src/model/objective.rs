use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::model::variable::VariableElement;

/// The aggregate an objective minimizes or maximizes.
///
/// `Expression` objectives carry a functional expression string; every other
/// type aggregates a list of variables (optionally weighted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectiveType {
    #[default]
    Expression,
    Sum,
    Minimum,
    Maximum,
    NValues,
    Lex,
}

impl Display for ObjectiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ObjectiveType::Expression => "expression",
            ObjectiveType::Sum => "sum",
            ObjectiveType::Minimum => "minimum",
            ObjectiveType::Maximum => "maximum",
            ObjectiveType::NValues => "nValues",
            ObjectiveType::Lex => "lex",
        };
        write!(f, "{}", name)
    }
}

/// The named-configuration form of an objective, mirroring the attributes and
/// child elements of a `<minimize>`/`<maximize>` element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveOptions {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub objective_type: ObjectiveType,
    pub variables: Vec<VariableElement>,
    pub coefficients: Vec<i64>,
    pub expression: String,
}

/// The payload shared by [`Objective::Minimize`] and [`Objective::Maximize`].
///
/// Exactly one of two shapes is ever populated:
/// - expression form: `objective_type == Expression`, non-empty `expression`,
///   empty `variables` and `coefficients`;
/// - structural form: any other `objective_type`, empty `expression`, with
///   `variables` (and optionally parallel `coefficients`; empty means every
///   coefficient is 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveBody {
    pub id: String,
    pub objective_type: ObjectiveType,
    pub variables: Vec<VariableElement>,
    pub coefficients: Vec<i64>,
    pub expression: String,
}

impl ObjectiveBody {
    /// Builds the expression form. An absent identifier normalizes to `""`.
    pub fn expression(id: Option<String>, expression: impl Into<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            objective_type: ObjectiveType::Expression,
            variables: Vec::new(),
            coefficients: Vec::new(),
            expression: expression.into(),
        }
    }

    /// Builds the structural form. An absent identifier normalizes to `""`.
    pub fn structural(
        id: Option<String>,
        objective_type: ObjectiveType,
        variables: Vec<VariableElement>,
        coefficients: Vec<i64>,
    ) -> Self {
        Self {
            id: id.unwrap_or_default(),
            objective_type,
            variables,
            coefficients,
            expression: String::new(),
        }
    }

    /// Builds from the named-configuration form.
    ///
    /// The expression branch is taken only when the declared type is
    /// `Expression` *and* the expression text is non-empty; everything else
    /// falls through to the structural branch. Ambiguous inputs (an
    /// `Expression` type arriving together with variables) are not rejected;
    /// whichever branch is taken enforces its own emptiness guarantees.
    pub fn from_options(options: ObjectiveOptions) -> Self {
        if options.objective_type == ObjectiveType::Expression && !options.expression.is_empty() {
            Self::expression(options.id, options.expression)
        } else {
            Self::structural(
                options.id,
                options.objective_type,
                options.variables,
                options.coefficients,
            )
        }
    }
}

/// An optimization goal: minimize or maximize an [`ObjectiveBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    Minimize(ObjectiveBody),
    Maximize(ObjectiveBody),
}

impl Objective {
    pub fn minimize_expression(id: Option<String>, expression: impl Into<String>) -> Self {
        Objective::Minimize(ObjectiveBody::expression(id, expression))
    }

    pub fn maximize_expression(id: Option<String>, expression: impl Into<String>) -> Self {
        Objective::Maximize(ObjectiveBody::expression(id, expression))
    }

    pub fn minimize(
        id: Option<String>,
        objective_type: ObjectiveType,
        variables: Vec<VariableElement>,
        coefficients: Vec<i64>,
    ) -> Self {
        Objective::Minimize(ObjectiveBody::structural(
            id,
            objective_type,
            variables,
            coefficients,
        ))
    }

    pub fn maximize(
        id: Option<String>,
        objective_type: ObjectiveType,
        variables: Vec<VariableElement>,
        coefficients: Vec<i64>,
    ) -> Self {
        Objective::Maximize(ObjectiveBody::structural(
            id,
            objective_type,
            variables,
            coefficients,
        ))
    }

    pub fn minimize_with(options: ObjectiveOptions) -> Self {
        Objective::Minimize(ObjectiveBody::from_options(options))
    }

    pub fn maximize_with(options: ObjectiveOptions) -> Self {
        Objective::Maximize(ObjectiveBody::from_options(options))
    }

    pub fn body(&self) -> &ObjectiveBody {
        match self {
            Objective::Minimize(body) | Objective::Maximize(body) => body,
        }
    }

    pub fn id(&self) -> &str {
        &self.body().id
    }

    pub fn is_minimize(&self) -> bool {
        matches!(self, Objective::Minimize(_))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expression_form_keeps_structural_fields_empty() {
        let objective = Objective::minimize_expression(Some("obj".to_owned()), "add(x,y)");

        let body = objective.body();
        assert_eq!(body.id, "obj");
        assert_eq!(body.objective_type, ObjectiveType::Expression);
        assert_eq!(body.expression, "add(x,y)");
        assert!(body.variables.is_empty());
        assert!(body.coefficients.is_empty());
    }

    #[test]
    fn structural_form_keeps_expression_empty() {
        let objective = Objective::maximize(
            None,
            ObjectiveType::Sum,
            vec!["x".into(), "y".into()],
            vec![2, 3],
        );

        let body = objective.body();
        assert_eq!(body.id, "");
        assert_eq!(body.objective_type, ObjectiveType::Sum);
        assert!(body.expression.is_empty());
        assert_eq!(body.variables.len(), 2);
        assert_eq!(body.coefficients, vec![2, 3]);
    }

    #[test]
    fn options_pick_the_expression_branch_only_when_expression_is_present() {
        let taken = ObjectiveBody::from_options(ObjectiveOptions {
            objective_type: ObjectiveType::Expression,
            expression: "mul(x,y)".to_owned(),
            // Ambiguous input: variables are provided too. The expression
            // branch wins and drops them.
            variables: vec!["x".into()],
            ..Default::default()
        });
        assert_eq!(taken.expression, "mul(x,y)");
        assert!(taken.variables.is_empty());

        let fallthrough = ObjectiveBody::from_options(ObjectiveOptions {
            objective_type: ObjectiveType::Expression,
            variables: vec!["x".into()],
            ..Default::default()
        });
        assert_eq!(fallthrough.objective_type, ObjectiveType::Expression);
        assert!(fallthrough.expression.is_empty());
        assert_eq!(fallthrough.variables, vec![VariableElement::from("x")]);
    }

    #[test]
    fn direction_constructors_wrap_the_options_branch() {
        let options = ObjectiveOptions {
            objective_type: ObjectiveType::Expression,
            expression: "mul(x,y)".to_owned(),
            ..Default::default()
        };

        let minimize = Objective::minimize_with(options.clone());
        let maximize = Objective::maximize_with(options.clone());

        assert!(minimize.is_minimize());
        assert!(!maximize.is_minimize());
        // Both directions carry the same body, built by the same branch rule.
        assert_eq!(minimize.body(), maximize.body());
        assert_eq!(minimize.body(), &ObjectiveBody::from_options(options));
    }

    #[test]
    fn absent_id_is_indistinguishable_from_the_empty_string() {
        let absent = Objective::minimize(None, ObjectiveType::Minimum, vec!["x".into()], vec![]);
        let empty = Objective::minimize(
            Some(String::new()),
            ObjectiveType::Minimum,
            vec!["x".into()],
            vec![],
        );

        assert_eq!(absent, empty);
    }

    #[test]
    fn objective_type_displays_exchange_format_names() {
        assert_eq!(ObjectiveType::NValues.to_string(), "nValues");
        assert_eq!(ObjectiveType::Lex.to_string(), "lex");
    }
}
