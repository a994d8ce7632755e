use crate::traits::{Scalar, Stepper, VectorField};

/// Classic Runge-Kutta 4th order integrator with a fixed step.
///
/// Stage buffers are allocated once for the given dimension and reused on
/// every step. There is no error estimate and no stability check — the
/// step size is the caller's responsibility.
pub struct Rk4<T: Scalar> {
    k1: Vec<T>,
    k2: Vec<T>,
    k3: Vec<T>,
    k4: Vec<T>,
    tmp: Vec<T>,
}

impl<T: Scalar> Rk4<T> {
    pub fn new(dim: usize) -> Self {
        let zero = T::from_f64(0.0).unwrap();
        Self {
            k1: vec![zero; dim],
            k2: vec![zero; dim],
            k3: vec![zero; dim],
            k4: vec![zero; dim],
            tmp: vec![zero; dim],
        }
    }
}

impl<T: Scalar> Stepper<T> for Rk4<T> {
    /// `y' = y + dt·(k1 + 2k2 + 2k3 + k4)/6` with the classical stage
    /// evaluations at `t`, `t + dt/2`, `t + dt/2` and `t + dt`.
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T) {
        let half = T::from_f64(0.5).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();
        let two = T::from_f64(2.0).unwrap();

        let t0 = *t;

        field.eval(t0, state, &mut self.k1);

        for i in 0..state.len() {
            self.tmp[i] = state[i] + dt * self.k1[i] * half;
        }
        field.eval(t0 + dt * half, &self.tmp, &mut self.k2);

        for i in 0..state.len() {
            self.tmp[i] = state[i] + dt * self.k2[i] * half;
        }
        field.eval(t0 + dt * half, &self.tmp, &mut self.k3);

        for i in 0..state.len() {
            self.tmp[i] = state[i] + dt * self.k3[i];
        }
        field.eval(t0 + dt, &self.tmp, &mut self.k4);

        for i in 0..state.len() {
            state[i] = state[i]
                + dt * sixth * (self.k1[i] + two * self.k2[i] + two * self.k3[i] + self.k4[i]);
        }

        *t = t0 + dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Decay {
        rate: f64,
    }

    impl VectorField<f64> for Decay {
        fn dimension(&self) -> usize {
            1
        }

        fn eval(&self, _t: f64, x: &[f64], out: &mut [f64]) {
            out[0] = -self.rate * x[0];
        }
    }

    struct Oscillator;

    impl VectorField<f64> for Oscillator {
        fn dimension(&self) -> usize {
            2
        }

        fn eval(&self, _t: f64, x: &[f64], out: &mut [f64]) {
            out[0] = x[1];
            out[1] = -x[0];
        }
    }

    fn one_decay_step(dt: f64) -> f64 {
        let field = Decay { rate: 1.0 };
        let mut stepper = Rk4::new(1);
        let mut t = 0.0;
        let mut state = [1.0];
        stepper.step(&field, &mut t, &mut state, dt);
        state[0]
    }

    #[test]
    fn one_step_matches_the_exponential_to_fourth_order() {
        let dt = 0.1;
        let err = (one_decay_step(dt) - (-dt).exp()).abs();
        assert!(err < 1e-7, "error {err} too large for dt={dt}");
    }

    #[test]
    fn halving_the_step_shrinks_the_error_fifth_order() {
        let coarse = (one_decay_step(0.1) - (-0.1f64).exp()).abs();
        let fine = (one_decay_step(0.05) - (-0.05f64).exp()).abs();
        // One-step (local) error scales like dt^5, so halving dt should
        // shrink it by about 32.
        assert!(
            coarse / fine > 20.0,
            "expected ~32x reduction, got {}",
            coarse / fine
        );
    }

    #[test]
    fn time_advances_by_dt() {
        let field = Decay { rate: 1.0 };
        let mut stepper = Rk4::new(1);
        let mut t = 1.0;
        let mut state = [1.0];
        stepper.step(&field, &mut t, &mut state, 0.25);
        assert!((t - 1.25).abs() < 1e-15);
    }

    #[test]
    fn oscillator_energy_is_conserved_over_many_steps() {
        let mut stepper = Rk4::new(2);
        let mut t = 0.0;
        let mut state = [1.0, 0.0];
        for _ in 0..100 {
            stepper.step(&Oscillator, &mut t, &mut state, 0.01);
        }
        let energy = state[0] * state[0] + state[1] * state[1];
        assert!((energy - 1.0).abs() < 1e-9, "energy drifted to {energy}");
    }
}
