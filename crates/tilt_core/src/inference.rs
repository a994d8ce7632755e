use crate::error::FuzzyError;
use crate::rule::{Connective, Rule};
use crate::variable::LinguisticVariable;

/// Algebraic product t-norm used for `and`.
fn fuzzy_and(x: f64, y: f64) -> f64 {
    x * y
}

/// Maximum t-conorm used for `or`.
fn fuzzy_or(x: f64, y: f64) -> f64 {
    x.max(y)
}

/// Fuzzy complement used for `is not`.
fn fuzzy_not(x: f64) -> f64 {
    1.0 - x
}

/// Firing strength of one rule given the fuzzified input table.
///
/// `table[i][j]` holds the membership value of input variable `i`, term
/// `j`, as produced by [`LinguisticVariable::fuzzify`] in declaration
/// order. Clause names resolve against `inputs`; a miss is a fatal
/// reference error naming the missing identifier.
///
/// Antecedent combination uses the algebraic product for `and` (not the
/// minimum) and the maximum for `or`. A single-clause rule is its clause
/// value and ignores the connective list. With several clauses, each
/// connective is applied in rule-text order as a reduction over every
/// clause value after the first. That full-list rescan is a compatibility
/// contract for rules mixing `and` and `or`; it is intentionally not
/// collapsed into a pairwise left fold.
pub fn rule_strength(
    rule: &Rule,
    inputs: &[LinguisticVariable],
    table: &[Vec<f64>],
) -> Result<f64, FuzzyError> {
    let mut values = Vec::with_capacity(rule.antecedents.len());
    for clause in &rule.antecedents {
        let var_idx = inputs
            .iter()
            .position(|v| v.name == clause.variable)
            .ok_or_else(|| FuzzyError::UnknownVariable(clause.variable.clone()))?;
        let term_idx = inputs[var_idx]
            .term_index(&clause.term)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: clause.variable.clone(),
                term: clause.term.clone(),
            })?;
        let mut value = table[var_idx][term_idx];
        if clause.negated {
            value = fuzzy_not(value);
        }
        values.push(value);
    }

    let Some(mut strength) = values.first().copied() else {
        return Err(FuzzyError::EmptyAntecedents {
            rule: rule.text.clone(),
        });
    };
    if values.len() > 1 {
        for connective in &rule.connectives {
            match connective {
                Connective::And => {
                    for &v in &values[1..] {
                        strength = fuzzy_and(strength, v);
                    }
                }
                Connective::Or => {
                    for &v in &values[1..] {
                        strength = fuzzy_or(strength, v);
                    }
                }
            }
        }
    }
    Ok(strength)
}
