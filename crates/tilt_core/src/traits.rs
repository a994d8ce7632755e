use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Numeric types the integrator can step with.
/// Must support floating-point arithmetic, debug printing, and conversion
/// from `f64`.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// The right-hand side of an ODE system, `dx/dt = f(t, x)`.
pub trait VectorField<T: Scalar> {
    /// Dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the field at time `t` and state `x`, writing `dx/dt`
    /// into `out`.
    fn eval(&self, t: T, x: &[T], out: &mut [T]);
}

/// Fixed-step integrators that advance a system one step at a time.
pub trait Stepper<T: Scalar> {
    /// Performs one step of size `dt`, updating `t` and `state` in place.
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T);
}
