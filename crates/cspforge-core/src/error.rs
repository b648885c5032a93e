//! Error types for CspForge

use thiserror::Error;

/// Model-building and assignment errors.
///
/// These are precondition violations detected while a CSP is being
/// assembled or driven. Propagation failures are never reported here:
/// a dead end is a normal outcome carried by the propagation result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CspError {
    /// Two variables registered under the same name
    #[error("Duplicate variable name: {0}")]
    DuplicateVariable(String),

    /// A variable was declared with no values
    #[error("Variable {0} has an empty domain")]
    EmptyDomain(String),

    /// A domain lists the same value twice
    #[error("Variable {variable} lists value {value} twice in its domain")]
    DuplicateDomainValue { variable: String, value: String },

    /// A constraint scope refers to a variable that is not in the CSP
    #[error("Constraint {constraint} refers to unknown variable #{index}")]
    UnknownVariable { constraint: String, index: usize },

    /// The same variable appears twice in one scope
    #[error("Constraint {constraint} lists variable {variable} twice in its scope")]
    DuplicateScopeVariable { constraint: String, variable: String },

    /// A constraint was added before a satisfying-tuple table was attached
    #[error("Constraint {0} has no satisfying-tuple table")]
    MissingTable(String),

    /// A second table was attached to a constraint
    #[error("Constraint {0} already has a satisfying-tuple table")]
    TableAlreadyAttached(String),

    /// Tuple or table arity does not match the scope length
    #[error("Arity mismatch for {context}: expected {expected}, found {found}")]
    ArityMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    /// Assigning a variable that already holds a value
    #[error("Variable {0} is already assigned")]
    AlreadyAssigned(String),

    /// Assigning a value outside the current domain
    #[error("Value {value} is not in the current domain of {variable}")]
    ValueNotInDomain { variable: String, value: String },
}

/// Result type alias for CspForge operations
pub type Result<T> = std::result::Result<T, CspError>;
