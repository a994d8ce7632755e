use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;
use crate::membership::{Curve, MembershipFunction};

/// A named input or output variable: a numeric range plus an ordered set
/// of membership functions.
///
/// Insertion order defines the index used by rule resolution and by the
/// positional defuzzification contract, so terms are added explicitly —
/// there are no placeholder defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticVariable {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub terms: Vec<MembershipFunction>,
}

impl LinguisticVariable {
    /// A variable with an empty term set spanning `[min, max]`.
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            terms: Vec::new(),
        }
    }

    /// Appends a named membership function. Term names must be unique
    /// within the variable since rules resolve them by name.
    pub fn add_term(&mut self, name: impl Into<String>, curve: Curve) -> Result<(), FuzzyError> {
        let term = MembershipFunction::new(name, curve)?;
        if self.terms.iter().any(|t| t.name == term.name) {
            return Err(FuzzyError::DuplicateTerm {
                variable: self.name.clone(),
                term: term.name,
            });
        }
        self.terms.push(term);
        Ok(())
    }

    /// Index of the term named `name`, if present.
    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name == name)
    }

    /// Evaluates every membership function at `x`, in declaration order.
    pub fn fuzzify(&self, x: f64) -> Vec<f64> {
        self.terms.iter().map(|t| t.curve.value(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_keep_declaration_order() {
        let mut v = LinguisticVariable::new("Theta", -1.0, 1.0);
        v.add_term("Negative", Curve::Z { a: -0.5, b: 0.5 }).unwrap();
        v.add_term("Positive", Curve::S { a: -0.5, b: 0.5 }).unwrap();
        assert_eq!(v.term_index("Negative"), Some(0));
        assert_eq!(v.term_index("Positive"), Some(1));
        assert_eq!(v.term_index("Zero"), None);
    }

    #[test]
    fn duplicate_term_names_are_rejected() {
        let mut v = LinguisticVariable::new("Theta", -1.0, 1.0);
        v.add_term("Negative", Curve::Z { a: -0.5, b: 0.5 }).unwrap();
        let err = v
            .add_term("Negative", Curve::S { a: -0.5, b: 0.5 })
            .unwrap_err();
        assert_eq!(
            err,
            FuzzyError::DuplicateTerm {
                variable: "Theta".to_string(),
                term: "Negative".to_string(),
            }
        );
        assert_eq!(v.terms.len(), 1);
    }

    #[test]
    fn fuzzify_evaluates_every_term_in_order() {
        let mut v = LinguisticVariable::new("Theta", -1.0, 1.0);
        v.add_term("Negative", Curve::Z { a: -0.5, b: 0.5 }).unwrap();
        v.add_term("Positive", Curve::S { a: -0.5, b: 0.5 }).unwrap();
        let values = v.fuzzify(-1.0);
        assert_eq!(values, vec![1.0, 0.0]);
    }
}
