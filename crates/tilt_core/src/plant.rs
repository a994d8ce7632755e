use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::traits::VectorField;

/// Flat plant state:
/// `[cart_velocity, cart_position, pole_angular_velocity, pole_angle]`.
pub type PlantState = [f64; 4];

/// Physical constants of the single-pole cart.
///
/// Both masses must be positive: the angular-acceleration denominator
/// `l·(4/3 - pole_mass·cos²θ/total_mass)` vanishes only when
/// `pole_mass >= 4/3·total_mass`, which no positive mass pair can reach.
/// The precondition is on the caller; no runtime guard is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartPole {
    pub cart_mass: f64,
    pub pole_mass: f64,
    pub pole_length: f64,
}

impl CartPole {
    /// Masses in kilograms, pole length in metres.
    pub fn new(cart_mass: f64, pole_mass: f64, pole_length: f64) -> Self {
        Self {
            cart_mass,
            pole_mass,
            pole_length,
        }
    }

    /// Distance from the pivot to the pole's centre of mass.
    pub fn half_length(&self) -> f64 {
        self.pole_length / 2.0
    }

    /// State derivative under an applied horizontal `force`, from the
    /// Lagrangian cart-pole equations: the pole's angular acceleration
    /// first, then the cart's linear acceleration from it.
    pub fn derivative(&self, state: &PlantState, force: f64, gravity: f64) -> PlantState {
        let [x_dot, _, w_dot, w] = *state;
        let (sin_t, cos_t) = w.sin_cos();
        let total_mass = self.cart_mass + self.pole_mass;
        let half = self.half_length();

        let inner = (-force - self.pole_mass * half * w_dot * w_dot * sin_t) / total_mass;
        let w_ddot = (gravity * sin_t + cos_t * inner)
            / (half * (4.0 / 3.0 - self.pole_mass * cos_t * cos_t / total_mass));
        let x_ddot =
            (force + self.pole_mass * half * (w_dot * w_dot * sin_t - w_ddot * cos_t)) / total_mass;

        [x_ddot, x_dot, w_ddot, w_dot]
    }

    /// Binds an applied force and gravity so the plant can be driven by a
    /// [`Stepper`](crate::traits::Stepper). The control loop rebuilds this
    /// every tick with the freshly computed force.
    pub fn forced(&self, force: f64, gravity: f64) -> ForcedCartPole {
        ForcedCartPole {
            plant: *self,
            force,
            gravity,
        }
    }
}

/// A cart-pole with a fixed applied force, usable as an ODE right-hand
/// side.
#[derive(Debug, Clone, Copy)]
pub struct ForcedCartPole {
    plant: CartPole,
    force: f64,
    gravity: f64,
}

impl VectorField<f64> for ForcedCartPole {
    fn dimension(&self) -> usize {
        4
    }

    fn eval(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        let state = [x[0], x[1], x[2], x[3]];
        out.copy_from_slice(&self.plant.derivative(&state, self.force, self.gravity));
    }
}

/// Maps an angle to `[-π, π)`. The control loop applies this to the pole
/// angle between ticks so the controller always sees a normalized tilt.
pub fn wrap_angle(theta: f64) -> f64 {
    (theta + PI).rem_euclid(2.0 * PI) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f64 = 9.8;

    fn bench_plant() -> CartPole {
        CartPole::new(1.0, 0.1, 1.0)
    }

    #[test]
    fn rest_state_with_no_force_stays_at_rest() {
        let d = bench_plant().derivative(&[0.0; 4], 0.0, G);
        assert_eq!(d, [0.0; 4]);
    }

    #[test]
    fn upright_equilibrium_is_unstable() {
        // A small unforced tilt accelerates the pole further over.
        let d = bench_plant().derivative(&[0.0, 0.0, 0.0, 0.05], 0.0, G);
        assert!(d[2] > 0.0);
        let d = bench_plant().derivative(&[0.0, 0.0, 0.0, -0.05], 0.0, G);
        assert!(d[2] < 0.0);
    }

    #[test]
    fn force_accelerates_the_cart_and_kicks_the_pole_back() {
        let d = bench_plant().derivative(&[0.0; 4], 10.0, G);
        assert!(d[0] > 0.0, "cart accelerates along the force");
        assert!(d[2] < 0.0, "pole reacts against the push");
    }

    #[test]
    fn velocities_pass_through_as_position_derivatives() {
        let d = bench_plant().derivative(&[1.5, 0.0, -2.0, 0.3], 0.0, G);
        assert_eq!(d[1], 1.5);
        assert_eq!(d[3], -2.0);
    }

    #[test]
    fn forced_field_matches_the_raw_derivative() {
        let plant = bench_plant();
        let state = [0.4, -0.2, 1.0, 0.3];
        let expected = plant.derivative(&state, 2.0, G);
        let field = plant.forced(2.0, G);
        let mut out = [0.0; 4];
        field.eval(0.0, &state, &mut out);
        assert_eq!(out, expected);
        assert_eq!(field.dimension(), 4);
    }

    #[test]
    fn wrap_angle_maps_into_the_pi_range() {
        assert!((wrap_angle(PI + 0.1) - (-PI + 0.1)).abs() < 1e-12);
        assert!((wrap_angle(-PI - 0.1) - (PI - 0.1)).abs() < 1e-12);
        assert!((wrap_angle(3.0 * PI) - (-PI)).abs() < 1e-12);
        assert!((wrap_angle(0.3) - 0.3).abs() < 1e-12);
        assert!((wrap_angle(-PI) - (-PI)).abs() < 1e-12);
    }
}
