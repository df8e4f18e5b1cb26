use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A required field was missing or empty when an entity was constructed.
///
/// Construction errors are always fatal to the single construction call that
/// raised them; the entity is never partially built.
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    #[error("`{entity}` requires a non-empty `{field}`")]
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

/// A graph-based constraint encoding was structurally inconsistent.
///
/// These are raised by the validators of the `regular` and `mdd` constraints.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("start state `{state}` does not appear in any transition")]
    UnknownStartState { state: String },

    #[error("final state `{state}` does not appear in any transition")]
    UnknownFinalState { state: String },

    #[error("automaton is not deterministic: state `{state}` has two transitions on value {value}")]
    NondeterministicTransition { state: String, value: i64 },

    #[error("root node `{node}` is not the source of any transition")]
    UnknownRoot { node: String },

    #[error("root node `{node}` is the destination of a transition")]
    RootHasIncoming { node: String },

    #[error("terminal node `{node}` is not the destination of any transition")]
    UnknownTerminal { node: String },

    #[error("terminal node `{node}` is the source of a transition")]
    TerminalHasOutgoing { node: String },

    #[error("node `{node}` at level {level} does not offer the same values as its siblings")]
    InconsistentLevel { node: String, level: usize },

    #[error("level expansion exceeded {limit} levels; the transition relation contains a cycle")]
    CyclicDiagram { limit: usize },
}

/// Every way building a model entity can fail.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<ModelError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The underlying [`ModelError`], for callers that branch on the kind of
    /// failure rather than its message.
    pub fn model_error(&self) -> &ModelError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<ModelError> for Error {
    fn from(inner: ModelError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl From<ConstructionError> for Error {
    fn from(inner: ConstructionError) -> Self {
        ModelError::from(inner).into()
    }
}

impl From<ValidationError> for Error {
    fn from(inner: ValidationError) -> Self {
        ModelError::from(inner).into()
    }
}
