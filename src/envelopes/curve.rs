//! Shaping curves for envelope phases.
//!
//! A curve turns a sample count and a pair of levels into the sequence of
//! amplitudes an envelope phase walks through. Every kind is a closed-form
//! formula over a parameter swept uniformly across the phase, so calls are
//! independent and hold no state.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// Smallest level the logarithmic curve will take the log of.
pub const LOG_FLOOR: f64 = 1e-5;

/// Shaping function used to move amplitude across an envelope phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CurveKind {
    /// Uniform interpolation
    #[default]
    Linear,

    /// The linear ramp, squared
    ///
    /// This is not a textbook exponential: `shape` squares every value of
    /// the linear ramp between `start` and `end`.
    Exponential,

    /// Log-spaced interpolation between `max(start, 1e-5)` and `end`
    Logarithmic,

    /// Ease in and out along the rising half of a sine cycle
    Sine,

    /// `start + (end - start) * u^2`
    Quadratic,

    /// `start + (end - start) * u^3`
    Cubic,

    /// Logistic S-curve over [-6, 6]; endpoints are approached, never reached
    Sigmoid,

    /// `1 - e^-u` over [0, 5]
    ///
    /// Ignores `start` and `end`: always rises from 0 toward ~0.993.
    InverseExponential,

    /// Hyperbolic tangent S-curve over [-3, 3]
    Tanh,
}

impl CurveKind {
    /// Every curve kind, in declaration order.
    pub const ALL: [CurveKind; 9] = [
        CurveKind::Linear,
        CurveKind::Exponential,
        CurveKind::Logarithmic,
        CurveKind::Sine,
        CurveKind::Quadratic,
        CurveKind::Cubic,
        CurveKind::Sigmoid,
        CurveKind::InverseExponential,
        CurveKind::Tanh,
    ];

    /// Canonical snake_case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::Exponential => "exponential",
            CurveKind::Logarithmic => "logarithmic",
            CurveKind::Sine => "sine",
            CurveKind::Quadratic => "quadratic",
            CurveKind::Cubic => "cubic",
            CurveKind::Sigmoid => "sigmoid",
            CurveKind::InverseExponential => "inverse_exponential",
            CurveKind::Tanh => "tanh",
        }
    }

    /// Shapes `length` samples moving from `start` to `end`.
    ///
    /// See [`shape`].
    pub fn shape(self, length: usize, start: f64, end: f64) -> Vec<f64> {
        shape(self, length, start, end)
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = SynthError;

    /// Parses a curve name, ignoring case and accepting `-` or spaces in place of `_`.
    ///
    /// ```
    /// use toneforge::CurveKind;
    ///
    /// assert_eq!("SINE".parse::<CurveKind>().unwrap(), CurveKind::Sine);
    /// assert_eq!(
    ///     "inverse-exponential".parse::<CurveKind>().unwrap(),
    ///     CurveKind::InverseExponential
    /// );
    /// assert!("wobble".parse::<CurveKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        CurveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| SynthError::InvalidCurveKind(s.to_string()))
    }
}

impl TryFrom<&str> for CurveKind {
    type Error = SynthError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// A single value is `start`; the last of several is exactly `end`.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Generates `length` samples of the curve `kind` running from `start` to `end`.
///
/// A `length` of zero yields an empty vector.
///
/// # Examples
///
/// ```
/// use toneforge::envelopes::{shape, CurveKind};
///
/// let ramp = shape(CurveKind::Linear, 5, 0.0, 1.0);
/// assert_eq!(ramp, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// let eased = shape(CurveKind::Sine, 4, 0.0, 1.0);
/// assert!((eased[1] - 0.25).abs() < 1e-12);
/// assert!((eased[2] - 0.75).abs() < 1e-12);
/// ```
pub fn shape(kind: CurveKind, length: usize, start: f64, end: f64) -> Vec<f64> {
    let span = end - start;
    match kind {
        CurveKind::Linear => linspace(start, end, length).collect(),
        CurveKind::Exponential => linspace(start, end, length).map(|v| v * v).collect(),
        CurveKind::Logarithmic => {
            let from = start.max(LOG_FLOOR).log10();
            let to = end.max(LOG_FLOOR).log10();
            linspace(from, to, length).map(|e| 10f64.powf(e)).collect()
        }
        CurveKind::Sine => linspace(-FRAC_PI_2, FRAC_PI_2, length)
            .map(|u| start + span * (u.sin() + 1.0) / 2.0)
            .collect(),
        CurveKind::Quadratic => linspace(0.0, 1.0, length)
            .map(|u| start + span * u * u)
            .collect(),
        CurveKind::Cubic => linspace(0.0, 1.0, length)
            .map(|u| start + span * u.powi(3))
            .collect(),
        CurveKind::Sigmoid => linspace(-6.0, 6.0, length)
            .map(|u| start + span / (1.0 + (-u).exp()))
            .collect(),
        CurveKind::InverseExponential => linspace(0.0, 5.0, length)
            .map(|u| 1.0 - (-u).exp())
            .collect(),
        CurveKind::Tanh => linspace(-3.0, 3.0, length)
            .map(|u| start + span * (u.tanh() + 1.0) / 2.0)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(approx_eq(*a, *e), "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn test_linspace() {
        let values: Vec<f64> = linspace(0.0, 1.0, 3).collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0]);

        let single: Vec<f64> = linspace(2.0, 7.0, 1).collect();
        assert_eq!(single, vec![2.0]);

        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
    }

    #[test]
    fn test_every_kind_honours_length() {
        for kind in CurveKind::ALL {
            for length in [0, 1, 2, 7, 64] {
                assert_eq!(shape(kind, length, 0.0, 1.0).len(), length, "{kind}");
            }
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        for kind in CurveKind::ALL {
            assert!(shape(kind, 0, 0.3, 0.9).is_empty());
        }
    }

    #[test]
    fn test_linear_curve() {
        assert_all_close(&shape(CurveKind::Linear, 3, 1.0, 0.5), &[1.0, 0.75, 0.5]);
    }

    #[test]
    fn test_exponential_is_squared_ramp() {
        assert_all_close(
            &shape(CurveKind::Exponential, 3, 0.0, 1.0),
            &[0.0, 0.25, 1.0],
        );
        // Squaring a ramp that crosses zero folds it back up
        assert_all_close(
            &shape(CurveKind::Exponential, 3, -1.0, 1.0),
            &[1.0, 0.0, 1.0],
        );
    }

    #[test]
    fn test_quadratic_and_cubic() {
        let quadratic = shape(CurveKind::Quadratic, 3, 0.0, 4.0);
        assert_all_close(&quadratic, &[0.0, 1.0, 4.0]);
        assert_all_close(&shape(CurveKind::Cubic, 3, 0.0, 8.0), &[0.0, 1.0, 8.0]);
        assert_all_close(&shape(CurveKind::Cubic, 3, 1.0, 0.0), &[1.0, 0.875, 0.0]);
    }

    #[test]
    fn test_sine_quarter_points() {
        let curve = shape(CurveKind::Sine, 4, 0.0, 1.0);
        assert_all_close(&curve, &[0.0, 0.25, 0.75, 1.0]);
    }

    #[test]
    fn test_sine_endpoints_exact() {
        let curve = shape(CurveKind::Sine, 16, 0.7, 0.0);
        assert!(approx_eq(curve[0], 0.7));
        assert!(approx_eq(curve[15], 0.0));
    }

    #[test]
    fn test_logarithmic_clamps_start() {
        let curve = shape(CurveKind::Logarithmic, 6, 0.0, 1.0);
        assert!(curve.iter().all(|v| v.is_finite()));
        assert!(approx_eq(curve[0], LOG_FLOOR));
        assert!(approx_eq(curve[5], 1.0));
        // Each step multiplies by the same ratio
        let ratio = curve[1] / curve[0];
        for pair in curve.windows(2) {
            assert!((pair[1] / pair[0] - ratio).abs() < 1e-9);
        }
    }

    #[test]
    fn test_logarithmic_to_zero_stays_finite() {
        let curve = shape(CurveKind::Logarithmic, 5, 0.7, 0.0);
        assert!(curve.iter().all(|v| v.is_finite()));
        assert!(approx_eq(curve[0], 0.7));
        assert!(approx_eq(curve[4], LOG_FLOOR));
    }

    #[test]
    fn test_sigmoid_approaches_endpoints() {
        let curve = shape(CurveKind::Sigmoid, 9, 0.0, 1.0);
        assert!(curve[0] > 0.0 && curve[0] < 0.01);
        assert!(curve[8] < 1.0 && curve[8] > 0.99);
        assert!(approx_eq(curve[4], 0.5));
    }

    #[test]
    fn test_tanh_approaches_endpoints() {
        let curve = shape(CurveKind::Tanh, 9, 0.0, 1.0);
        assert!(curve[0] > 0.0 && curve[0] < 0.01);
        assert!(curve[8] < 1.0 && curve[8] > 0.99);
        assert!(approx_eq(curve[4], 0.5));
    }

    #[test]
    fn test_inverse_exponential_ignores_levels() {
        for n in [1, 2, 10, 33] {
            assert_eq!(
                shape(CurveKind::InverseExponential, n, 5.0, -5.0),
                shape(CurveKind::InverseExponential, n, 0.0, 1.0)
            );
        }
        let curve = shape(CurveKind::InverseExponential, 11, 0.0, 1.0);
        assert_eq!(curve[0], 0.0);
        assert!(approx_eq(curve[10], 1.0 - (-5.0f64).exp()));
    }

    #[test]
    fn test_single_sample_curves() {
        assert_eq!(shape(CurveKind::Linear, 1, 0.4, 1.0), vec![0.4]);
        assert_eq!(shape(CurveKind::Quadratic, 1, 0.4, 1.0), vec![0.4]);
        assert_eq!(shape(CurveKind::InverseExponential, 1, 0.4, 1.0), vec![0.0]);
    }

    #[test]
    fn test_parse_names() {
        for kind in CurveKind::ALL {
            assert_eq!(kind.name().parse::<CurveKind>().unwrap(), kind);
            let shouted = kind.to_string().to_uppercase();
            assert_eq!(shouted.parse::<CurveKind>().unwrap(), kind);
        }
        assert_eq!(
            CurveKind::try_from("Inverse Exponential").unwrap(),
            CurveKind::InverseExponential
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "wobble".parse::<CurveKind>().unwrap_err();
        let SynthError::InvalidCurveKind(name) = &err else {
            panic!("expected InvalidCurveKind, got {err:?}");
        };
        assert_eq!(name, "wobble");
    }

    #[test]
    fn test_default() {
        assert_eq!(CurveKind::default(), CurveKind::Linear);
    }
}
