use serde::{Deserialize, Serialize};

use crate::error::FuzzyError;

/// A membership curve shape together with its parameters.
///
/// Each variant carries exactly the parameters its shape needs, so a curve
/// with the wrong parameter count cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Curve {
    /// Falling quadratic spline: `1` left of `a`, `0` right of `b`.
    Z { a: f64, b: f64 },
    /// Rising quadratic spline, the mirror of [`Curve::Z`].
    S { a: f64, b: f64 },
    /// Generalized bell `1 / (1 + |(x - center)/width|^(2·slope))`.
    Bell { width: f64, slope: f64, center: f64 },
}

impl Curve {
    /// Degree of membership of `x`, in `[0, 1]`.
    ///
    /// The Z and S splines meet their midpoint `(a + b)/2` with a
    /// continuous derivative. Bell evaluation assumes a nonzero width,
    /// which [`MembershipFunction::new`] enforces.
    pub fn value(&self, x: f64) -> f64 {
        match *self {
            Curve::Z { a, b } => {
                let mid = (a + b) / 2.0;
                if x <= a {
                    1.0
                } else if x <= mid {
                    let r = (x - a) / (b - a);
                    1.0 - 2.0 * r * r
                } else if x < b {
                    let r = (x - b) / (b - a);
                    2.0 * r * r
                } else {
                    0.0
                }
            }
            Curve::S { a, b } => {
                let mid = (a + b) / 2.0;
                if x <= a {
                    0.0
                } else if x <= mid {
                    let r = (x - a) / (b - a);
                    2.0 * r * r
                } else if x < b {
                    let r = (x - b) / (b - a);
                    1.0 - 2.0 * r * r
                } else {
                    1.0
                }
            }
            Curve::Bell {
                width,
                slope,
                center,
            } => 1.0 / (1.0 + ((x - center) / width).abs().powf(2.0 * slope)),
        }
    }
}

/// A named membership function, owned by a linguistic variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipFunction {
    pub name: String,
    pub curve: Curve,
}

impl MembershipFunction {
    /// Builds a named membership function, rejecting a zero-width bell
    /// (its evaluation would divide by zero).
    pub fn new(name: impl Into<String>, curve: Curve) -> Result<Self, FuzzyError> {
        let name = name.into();
        if let Curve::Bell { width, .. } = curve {
            if width == 0.0 {
                return Err(FuzzyError::ZeroBellWidth(name));
            }
        }
        Ok(Self { name, curve })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep(min: f64, max: f64, n: usize) -> impl Iterator<Item = f64> {
        (0..=n).map(move |i| min + (max - min) * i as f64 / n as f64)
    }

    #[test]
    fn all_curves_stay_within_the_unit_interval() {
        let curves = [
            Curve::Z { a: -0.5, b: 0.5 },
            Curve::S { a: -0.5, b: 0.5 },
            Curve::Bell {
                width: 5.0,
                slope: 2.0,
                center: -12.0,
            },
        ];
        for curve in curves {
            for x in sweep(-20.0, 20.0, 4000) {
                let v = curve.value(x);
                assert!((0.0..=1.0).contains(&v), "{curve:?} at {x} gave {v}");
            }
        }
    }

    #[test]
    fn z_spline_matches_its_regions() {
        let z = Curve::Z { a: -0.5, b: 0.5 };
        assert_eq!(z.value(-1.0), 1.0);
        assert_eq!(z.value(-0.5), 1.0);
        assert!((z.value(0.0) - 0.5).abs() < 1e-12);
        assert!((z.value(0.25) - 0.125).abs() < 1e-12);
        assert_eq!(z.value(0.5), 0.0);
        assert_eq!(z.value(2.0), 0.0);
    }

    #[test]
    fn z_is_non_increasing_and_s_is_non_decreasing() {
        let z = Curve::Z { a: -0.5, b: 0.5 };
        let s = Curve::S { a: -0.5, b: 0.5 };
        let mut prev_z = f64::INFINITY;
        let mut prev_s = f64::NEG_INFINITY;
        for x in sweep(-2.0, 2.0, 400) {
            let vz = z.value(x);
            let vs = s.value(x);
            assert!(vz <= prev_z, "Z rose at {x}");
            assert!(vs >= prev_s, "S fell at {x}");
            prev_z = vz;
            prev_s = vs;
        }
    }

    #[test]
    fn z_and_s_are_complementary() {
        let z = Curve::Z { a: -0.5, b: 0.5 };
        let s = Curve::S { a: -0.5, b: 0.5 };
        for x in sweep(-1.0, 1.0, 1000) {
            assert!((z.value(x) - (1.0 - s.value(x))).abs() < 1e-12, "at {x}");
        }
    }

    #[test]
    fn bell_peaks_at_its_center_and_is_symmetric() {
        let bell = Curve::Bell {
            width: 5.0,
            slope: 2.0,
            center: 12.0,
        };
        assert!((bell.value(12.0) - 1.0).abs() < 1e-12);
        let mut prev = bell.value(12.0);
        for i in 1..=100 {
            let v = bell.value(12.0 + i as f64 * 0.2);
            assert!(v <= prev, "bell rose away from its center");
            prev = v;
        }
        for i in 0..=100 {
            let d = i as f64 * 0.2;
            assert!((bell.value(12.0 + d) - bell.value(12.0 - d)).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_width_bell_is_rejected_at_construction() {
        let err = MembershipFunction::new(
            "NM",
            Curve::Bell {
                width: 0.0,
                slope: 2.0,
                center: 0.0,
            },
        )
        .unwrap_err();
        assert_eq!(err, FuzzyError::ZeroBellWidth("NM".to_string()));
    }
}
