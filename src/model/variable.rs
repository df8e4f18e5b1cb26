use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::model::domain::Domain;

/// A single integer decision variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerVariable {
    /// The variable's identifier. Non-empty and unique within an instance,
    /// both by parser contract.
    pub id: String,
    pub domain: Domain,
}

impl IntegerVariable {
    pub fn new(id: impl Into<String>, domain: Domain) -> Self {
        Self {
            id: id.into(),
            domain,
        }
    }
}

/// A multi-dimensional array of integer variables.
///
/// Cells need not share a domain: `domains` maps index-pattern specifiers
/// (e.g. `x[0][]` or `x[2..4][0]`) to the domain of the cells they cover, in
/// declaration order, and `default_domain` applies to every cell no specifier
/// covers. Specifier syntax is not checked here; a parser producing the array
/// is expected to emit patterns valid for `sizes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableArray {
    pub id: String,
    /// The size of each dimension, outermost first. All sizes are positive.
    pub sizes: Vec<usize>,
    /// Specifier-to-domain assignments in declaration order.
    pub domains: Vec<(String, Domain)>,
    pub default_domain: Option<Domain>,
}

impl VariableArray {
    pub fn new(
        id: impl Into<String>,
        sizes: Vec<usize>,
        domains: Vec<(String, Domain)>,
        default_domain: Option<Domain>,
    ) -> Self {
        Self {
            id: id.into(),
            sizes,
            domains,
            default_domain,
        }
    }

    /// An array whose cells all share one domain.
    pub fn uniform(id: impl Into<String>, sizes: Vec<usize>, domain: Domain) -> Self {
        Self::new(id, sizes, Vec::new(), Some(domain))
    }

    /// The total number of cells.
    pub fn cell_count(&self) -> usize {
        self.sizes.iter().product()
    }
}

/// A reference to one cell of a [`VariableArray`], e.g. `xs[2][0]`.
///
/// A reference never owns the array it points into; it is a named lookup to
/// be resolved against the instance's variable list by a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableRef {
    pub array_id: String,
    /// One concrete index per dimension of the referenced array.
    pub indices: Vec<usize>,
}

impl VariableRef {
    pub fn new(array_id: impl Into<String>, indices: Vec<usize>) -> Self {
        Self {
            array_id: array_id.into(),
            indices,
        }
    }
}

impl Display for VariableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.array_id)?;
        for index in &self.indices {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

/// Any variable declaration an instance can hold.
///
/// The variant set is fixed by the exchange format, so this is a closed sum
/// type dispatched by pattern match rather than an open trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variable {
    Integer(IntegerVariable),
    Array(VariableArray),
    Ref(VariableRef),
}

impl Variable {
    /// The identifier this declaration introduces or refers to.
    pub fn id(&self) -> &str {
        match self {
            Variable::Integer(var) => &var.id,
            Variable::Array(array) => &array.id,
            Variable::Ref(var_ref) => &var_ref.array_id,
        }
    }
}

impl From<IntegerVariable> for Variable {
    fn from(var: IntegerVariable) -> Self {
        Variable::Integer(var)
    }
}

impl From<VariableArray> for Variable {
    fn from(array: VariableArray) -> Self {
        Variable::Array(array)
    }
}

impl From<VariableRef> for Variable {
    fn from(var_ref: VariableRef) -> Self {
        Variable::Ref(var_ref)
    }
}

/// A variable occurring in a constraint or objective scope: either a plain
/// identifier or a reference into a variable array.
///
/// These are the only two element representations the exchange format
/// produces, so the "nameable element" capability is monomorphized into one
/// enum instead of a generic parameter on every constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableElement {
    Id(String),
    ArrayRef(VariableRef),
}

impl VariableElement {
    /// The identifier the element resolves against: the variable's own id, or
    /// the id of the referenced array.
    pub fn name(&self) -> &str {
        match self {
            VariableElement::Id(id) => id,
            VariableElement::ArrayRef(var_ref) => &var_ref.array_id,
        }
    }
}

impl From<&str> for VariableElement {
    fn from(id: &str) -> Self {
        VariableElement::Id(id.to_owned())
    }
}

impl From<String> for VariableElement {
    fn from(id: String) -> Self {
        VariableElement::Id(id)
    }
}

impl From<VariableRef> for VariableElement {
    fn from(var_ref: VariableRef) -> Self {
        VariableElement::ArrayRef(var_ref)
    }
}

impl Display for VariableElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableElement::Id(id) => write!(f, "{}", id),
            VariableElement::ArrayRef(var_ref) => write!(f, "{}", var_ref),
        }
    }
}
