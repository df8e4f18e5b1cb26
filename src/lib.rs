//! A structured data model for constraint satisfaction problem instances in
//! the XCSP3 exchange format.
//!
//! The crate represents problems; it does not solve them. A parser constructs
//! entities bottom-up (variables, then constraints, then objectives) and
//! assembles them into an [`Instance`](model::instance::Instance); a solver
//! or writer consumes the instance read-only. The two graph-based constraint
//! encodings — the DFA behind the `regular` constraint and the decision
//! diagram behind the `mdd` constraint — are validated while they are
//! constructed, so a malformed encoding never enters the model.
//!
//! # Core Concepts
//!
//! - **[`Variable`](model::variable::Variable)**: integer variables, variable
//!   arrays and array-cell references, with interval-based
//!   [`Domain`](model::domain::Domain)s.
//! - **[`Constraint`](model::constraint::Constraint)**: the closed family of
//!   constraint encodings — intension expressions, extension tables, regular
//!   automata and mdd diagrams.
//! - **[`Objective`](model::objective::Objective)**: minimize/maximize goals
//!   over an expression or a structural aggregate of variables.
//!
//! # Example: A Two-Variable Instance
//!
//! Here is a satisfaction instance over `x` and `y`, both ranging over
//! `{0, 1, 2}`, constrained by `x < y`.
//!
//! ```
//! use xcsp3_model::model::constraints::intension::IntensionConstraint;
//! use xcsp3_model::model::domain::Domain;
//! use xcsp3_model::model::instance::{Framework, Instance};
//! use xcsp3_model::model::variable::IntegerVariable;
//!
//! // 1. Declare the variables.
//! let domain: Domain = [0i64, 1, 2].into_iter().collect();
//! let x = IntegerVariable::new("x", domain.clone());
//! let y = IntegerVariable::new("y", domain);
//!
//! // 2. Declare the constraints. Construction validates where there is
//! //    anything to validate; an intension expression must be non-empty.
//! let lt = IntensionConstraint::new(None, "lt(x,y)").unwrap();
//!
//! // 3. Assemble the instance.
//! let instance = Instance::new(
//!     Framework::Csp,
//!     vec![x.into(), y.into()],
//!     vec![lt.into()],
//! );
//!
//! assert_eq!(instance.variables().len(), 2);
//! assert_eq!(instance.constraints().len(), 1);
//! assert!(!instance.is_optimization());
//! ```
pub mod error;
pub mod model;
