use std::f64::consts::PI;

use anyhow::{Context, Result};

use crate::fis::Fis;
use crate::membership::Curve;
use crate::variable::LinguisticVariable;

/// `Force` terms of the balance controller: name, bell width, slope and
/// center. Declaration order matters — rule `i` drives term `i`.
const FORCE_TERMS: [(&str, f64, f64, f64); 8] = [
    ("NM", 5.0, 2.0, -12.0),
    ("PM", 5.0, 2.0, 12.0),
    ("NL", 5.0, 2.0, -20.0),
    ("PL", 5.0, 2.0, 20.0),
    ("NS", 2.0, 2.0, -2.0),
    ("PS", 2.0, 2.0, 2.0),
    ("NM1", 3.0, 2.0, -6.0),
    ("PM1", 3.0, 2.0, 6.0),
];

/// Balance rules, declared in the same order as the [`FORCE_TERMS`] they
/// drive.
const BALANCE_RULES: [&str; 8] = [
    "If Theta is Negative Then Force is NM",
    "If Theta is Positive Then Force is PM",
    "If Theta_dot is Negative Then Force is NL",
    "If Theta_dot is Positive Then Force is PL",
    "If Cart_Position is Positive Then Force is NS",
    "If Cart_Position is Negative Then Force is PS",
    "If Cart_Velocity is Negative Then Force is NM1",
    "If Cart_Velocity is Positive Then Force is PM1",
];

/// Builds the stock cart-pole balance controller.
///
/// Inputs, in the order [`Fis::compute`] expects their crisp values:
/// 1. `Theta` — pole angle in `[-π, π]` radians;
/// 2. `Theta_dot` — pole angular velocity;
/// 3. `Cart_Position` — distance from the cart to its target position;
/// 4. `Cart_Velocity` — cart linear velocity.
///
/// The single output `Force` spans `[-20, 20]`. Every input splits into a
/// `Negative`/`Positive` Z/S pair crossing at zero, so an exactly balanced
/// state defuzzifies to zero force.
pub fn cartpole_controller() -> Result<Fis> {
    let mut fis = Fis::new("cartpole-balance");

    fis.add_input(split_input("Theta", -PI, PI, 0.5)?)?;
    fis.add_input(split_input("Theta_dot", -10.0, 10.0, 5.0)?)?;
    fis.add_input(split_input("Cart_Position", -5.0, 5.0, 1.0)?)?;
    fis.add_input(split_input("Cart_Velocity", -5.0, 5.0, 5.0)?)?;

    let mut force = LinguisticVariable::new("Force", -20.0, 20.0);
    for (name, width, slope, center) in FORCE_TERMS {
        force
            .add_term(
                name,
                Curve::Bell {
                    width,
                    slope,
                    center,
                },
            )
            .with_context(|| format!("building output term `{name}`"))?;
    }
    fis.add_output(force)?;

    fis.add_rules(BALANCE_RULES)
        .context("building the balance rules")?;

    Ok(fis)
}

/// A `Negative`/`Positive` Z/S pair over `[min, max]`, with both splines
/// running from `-crossover` to `+crossover`.
fn split_input(name: &str, min: f64, max: f64, crossover: f64) -> Result<LinguisticVariable> {
    let mut variable = LinguisticVariable::new(name, min, max);
    variable
        .add_term(
            "Negative",
            Curve::Z {
                a: -crossover,
                b: crossover,
            },
        )
        .with_context(|| format!("building input `{name}`"))?;
    variable
        .add_term(
            "Positive",
            Curve::S {
                a: -crossover,
                b: crossover,
            },
        )
        .with_context(|| format!("building input `{name}`"))?;
    Ok(variable)
}
