//! Core library for Tilt: rule-based balance control of a cart-and-pole
//! plant.
//!
//! Key components:
//! - **Traits**: [`traits::Scalar`] (numeric type abstraction),
//!   [`traits::VectorField`] (ODE right-hand sides), [`traits::Stepper`]
//!   (integrators).
//! - **Fuzzy engine**: linguistic variables with Z/S/bell membership
//!   functions, a textual rule parser, product/max inference and centroid
//!   defuzzification, composed by [`fis::Fis`].
//! - **Plant**: the nonlinear cart-pole dynamics in [`plant`], driven by
//!   the controller's force output.
//! - **Solvers**: the classical fixed-step RK4 integrator in [`solvers`].

pub mod controller;
pub mod defuzz;
pub mod error;
pub mod fis;
pub mod inference;
pub mod membership;
pub mod plant;
pub mod rule;
pub mod solvers;
pub mod traits;
pub mod variable;
