use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;

/// Connectives joining antecedent clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connective {
    And,
    Or,
}

/// One `<variable> is [not] <term>` atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub variable: String,
    pub term: String,
    pub negated: bool,
}

/// A parsed conditional rule.
///
/// `connectives[i]` joins `antecedents[i]` and `antecedents[i + 1]`, so
/// `connectives.len() == antecedents.len() - 1`. Consequent clauses are
/// retained as written; defuzzification pairs rules with output terms by
/// declaration position, not by consequent name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub text: String,
    pub antecedents: Vec<Clause>,
    pub connectives: Vec<Connective>,
    pub consequents: Vec<Clause>,
}

impl Rule {
    /// Parses `If <clause> {(and|or) <clause>} Then <clause> {(and|or) <clause>}`.
    ///
    /// Keywords (`If`, `Then`, `is`, `not`, `and`, `or`) are matched
    /// case-insensitively; variable and term names are word tokens
    /// (`[A-Za-z0-9_]+`). Names are not checked against any variable
    /// registry here — resolution happens at inference time, so the same
    /// rule text can be attached to different variable sets.
    pub fn parse(text: &str) -> Result<Self, FuzzyError> {
        let mut parser = Parser {
            text,
            tokens: tokenize(text),
            pos: 0,
        };

        match parser.consume() {
            Some(Token::If) => {}
            _ => return Err(parser.missing("If")),
        }

        let mut antecedents = vec![parser.clause()?];
        let mut connectives = Vec::new();
        loop {
            match parser.consume() {
                Some(Token::And) => {
                    connectives.push(Connective::And);
                    antecedents.push(parser.clause()?);
                }
                Some(Token::Or) => {
                    connectives.push(Connective::Or);
                    antecedents.push(parser.clause()?);
                }
                Some(Token::Then) => break,
                Some(other) => {
                    return Err(parser.malformed(format!(
                        "expected `and`, `or`, or `Then` after a clause, found {}",
                        other.describe()
                    )))
                }
                None => return Err(parser.missing("Then")),
            }
        }

        let mut consequents = vec![parser.clause()?];
        loop {
            match parser.consume() {
                Some(Token::And) | Some(Token::Or) => consequents.push(parser.clause()?),
                Some(other) => {
                    return Err(parser.malformed(format!(
                        "unexpected {} after the consequent",
                        other.describe()
                    )))
                }
                None => break,
            }
        }

        Ok(Self {
            text: text.to_string(),
            antecedents,
            connectives,
            consequents,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    If,
    Then,
    Is,
    Not,
    And,
    Or,
    Word(String),
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::If => "`If`".to_string(),
            Token::Then => "`Then`".to_string(),
            Token::Is => "`is`".to_string(),
            Token::Not => "`not`".to_string(),
            Token::And => "`and`".to_string(),
            Token::Or => "`or`".to_string(),
            Token::Word(w) => format!("`{w}`"),
        }
    }
}

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '_' {
            let mut word = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_alphanumeric() || d == '_' {
                    word.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(keyword(&word).unwrap_or(Token::Word(word)));
        } else {
            // Whitespace and punctuation carry no meaning in the grammar.
            chars.next();
        }
    }
    tokens
}

fn keyword(word: &str) -> Option<Token> {
    if word.eq_ignore_ascii_case("if") {
        Some(Token::If)
    } else if word.eq_ignore_ascii_case("then") {
        Some(Token::Then)
    } else if word.eq_ignore_ascii_case("is") {
        Some(Token::Is)
    } else if word.eq_ignore_ascii_case("not") {
        Some(Token::Not)
    } else if word.eq_ignore_ascii_case("and") {
        Some(Token::And)
    } else if word.eq_ignore_ascii_case("or") {
        Some(Token::Or)
    } else {
        None
    }
}

struct Parser<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn missing(&self, keyword: &'static str) -> FuzzyError {
        FuzzyError::MissingKeyword {
            rule: self.text.to_string(),
            keyword,
        }
    }

    fn malformed(&self, reason: impl Into<String>) -> FuzzyError {
        FuzzyError::MalformedRule {
            rule: self.text.to_string(),
            reason: reason.into(),
        }
    }

    fn word(&mut self, role: &str) -> Result<String, FuzzyError> {
        match self.consume() {
            Some(Token::Word(w)) => Ok(w),
            Some(other) => Err(self.malformed(format!(
                "expected a {role} name, found {}",
                other.describe()
            ))),
            None => Err(self.malformed(format!("expected a {role} name, found end of rule"))),
        }
    }

    /// `<variable> is [not] <term>`.
    fn clause(&mut self) -> Result<Clause, FuzzyError> {
        let variable = self.word("variable")?;
        match self.consume() {
            Some(Token::Is) => {}
            Some(other) => {
                return Err(self.malformed(format!(
                    "expected `is` after `{variable}`, found {}",
                    other.describe()
                )))
            }
            None => return Err(self.malformed(format!("expected `is` after `{variable}`"))),
        }
        let negated = if self.peek() == Some(&Token::Not) {
            self.consume();
            true
        } else {
            false
        };
        let term = self.word("term")?;
        Ok(Clause {
            variable,
            term,
            negated,
        })
    }
}
