use crate::variable::LinguisticVariable;

/// Spacing of the discretized output domain, in domain units.
pub const RESOLUTION: f64 = 0.01;

/// Crisp output for one variable via centre-of-gravity aggregation.
///
/// The output range is sampled every [`RESOLUTION`] units, right edge
/// included. Each output term is clipped at the firing strength of the
/// rule sharing its declaration index, the clipped shapes are combined
/// with a pointwise maximum, and the centroid of the combined activation
/// is returned.
///
/// Rules and output terms correspond strictly by position — consequent
/// names play no part here. A strengths vector shorter than the term list
/// contributes zero activation for the missing indices; extra strengths
/// are ignored.
///
/// When nothing activates anywhere (all strengths zero), the result is a
/// deliberate `0.0` — "no rule fired" is a valid zero-force answer, not
/// an error.
pub fn centroid(output: &LinguisticVariable, strengths: &[f64]) -> f64 {
    let samples = ((output.max - output.min) / RESOLUTION).round() as usize;
    let mut weighted = 0.0;
    let mut total = 0.0;
    for i in 0..=samples {
        let x = output.min + i as f64 * RESOLUTION;
        let mut activation = 0.0f64;
        for (idx, term) in output.terms.iter().enumerate() {
            let strength = strengths.get(idx).copied().unwrap_or(0.0);
            activation = activation.max(term.curve.value(x).min(strength));
        }
        weighted += activation * x;
        total += activation;
    }
    if total == 0.0 {
        0.0
    } else {
        weighted / total
    }
}
