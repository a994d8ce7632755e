use serde::{Deserialize, Serialize};

use crate::defuzz;
use crate::error::FuzzyError;
use crate::inference;
use crate::rule::Rule;
use crate::variable::LinguisticVariable;

/// A complete fuzzy inference system: ordered input and output variables
/// plus an ordered rule list.
///
/// Configuration happens up front through the `add_*` methods; once built,
/// [`compute`](Fis::compute) never mutates the system, so a finished `Fis`
/// can be shared read-only across threads.
///
/// Rule order is load-bearing: during defuzzification, rule `i` drives
/// output term `i` of every output variable. Rules are therefore declared
/// in the same order as the output terms they target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fis {
    pub name: String,
    pub inputs: Vec<LinguisticVariable>,
    pub outputs: Vec<LinguisticVariable>,
    pub rules: Vec<Rule>,
}

impl Fis {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Registers an input variable. Names must be unique among the inputs.
    pub fn add_input(&mut self, variable: LinguisticVariable) -> Result<(), FuzzyError> {
        if self.inputs.iter().any(|v| v.name == variable.name) {
            return Err(FuzzyError::DuplicateVariable(variable.name));
        }
        self.inputs.push(variable);
        Ok(())
    }

    /// Registers an output variable. Names must be unique among the
    /// outputs.
    pub fn add_output(&mut self, variable: LinguisticVariable) -> Result<(), FuzzyError> {
        if self.outputs.iter().any(|v| v.name == variable.name) {
            return Err(FuzzyError::DuplicateVariable(variable.name));
        }
        self.outputs.push(variable);
        Ok(())
    }

    /// Parses one rule string and appends it to the rule list.
    ///
    /// Variable and term names are resolved lazily: a rule naming an
    /// unregistered identifier is accepted here and fails at the first
    /// [`compute`](Fis::compute).
    pub fn add_rule(&mut self, text: &str) -> Result<(), FuzzyError> {
        let rule = Rule::parse(text)?;
        self.push_rule(rule)
    }

    /// Parses and appends rules in order, stopping at the first failure.
    pub fn add_rules<'a, I>(&mut self, texts: I) -> Result<(), FuzzyError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for text in texts {
            self.add_rule(text)?;
        }
        Ok(())
    }

    /// Appends an already-built rule after validating its structure.
    pub fn push_rule(&mut self, rule: Rule) -> Result<(), FuzzyError> {
        if rule.antecedents.is_empty() {
            return Err(FuzzyError::EmptyAntecedents { rule: rule.text });
        }
        if rule.connectives.len() + 1 != rule.antecedents.len() {
            let reason = format!(
                "{} antecedents joined by {} connectives",
                rule.antecedents.len(),
                rule.connectives.len()
            );
            return Err(FuzzyError::MalformedRule {
                rule: rule.text,
                reason,
            });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Runs one inference pass: fuzzification, rule firing, then
    /// defuzzification.
    ///
    /// `inputs` supplies one crisp value per input variable in declaration
    /// order; the result holds one crisp value per output variable in
    /// declaration order. The call is referentially transparent for a
    /// fixed configuration.
    pub fn compute(&self, inputs: &[f64]) -> Result<Vec<f64>, FuzzyError> {
        if inputs.len() != self.inputs.len() {
            return Err(FuzzyError::InputArity {
                expected: self.inputs.len(),
                got: inputs.len(),
            });
        }

        let table: Vec<Vec<f64>> = self
            .inputs
            .iter()
            .zip(inputs)
            .map(|(variable, &x)| variable.fuzzify(x))
            .collect();

        let mut strengths = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            strengths.push(inference::rule_strength(rule, &self.inputs, &table)?);
        }

        Ok(self
            .outputs
            .iter()
            .map(|output| defuzz::centroid(output, &strengths))
            .collect())
    }
}
