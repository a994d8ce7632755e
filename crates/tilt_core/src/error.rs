use thiserror::Error;

/// Errors raised by fuzzy-system configuration and inference.
///
/// Configuration problems (malformed rule text, bad membership parameters,
/// duplicate names) surface when the offending item is added. Reference
/// problems — a rule naming a variable or term absent from the registry —
/// surface at the first [`compute`](crate::fis::Fis::compute) call, since
/// rule text is deliberately not validated against any particular variable
/// set at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzyError {
    /// Rule text lacks a required keyword (`If` or `Then`).
    #[error("rule `{rule}` is missing the `{keyword}` keyword")]
    MissingKeyword { rule: String, keyword: &'static str },

    /// Rule text does not match
    /// `If <clause> {(and|or) <clause>} Then <clause>`.
    #[error("malformed rule `{rule}`: {reason}")]
    MalformedRule { rule: String, reason: String },

    /// A rule was submitted with no antecedent clauses.
    #[error("rule `{rule}` has no antecedent clauses")]
    EmptyAntecedents { rule: String },

    /// Generalized bell curves require a nonzero width.
    #[error("membership function `{0}` has zero bell width")]
    ZeroBellWidth(String),

    /// Membership function names must be unique within their variable.
    #[error("variable `{variable}` already has a membership function `{term}`")]
    DuplicateTerm { variable: String, term: String },

    /// Variable names must be unique among the inputs, and among the
    /// outputs.
    #[error("a variable named `{0}` is already registered")]
    DuplicateVariable(String),

    /// A rule referenced a variable absent from the input registry.
    #[error("rule references unknown input variable `{0}`")]
    UnknownVariable(String),

    /// A rule referenced a term absent from its variable.
    #[error("variable `{variable}` has no membership function `{term}`")]
    UnknownTerm { variable: String, term: String },

    /// `compute` was called with the wrong number of input values.
    #[error("expected {expected} input values, got {got}")]
    InputArity { expected: usize, got: usize },
}
