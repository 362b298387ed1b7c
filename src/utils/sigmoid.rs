/// Linear predictors beyond this magnitude saturate the logistic link to within
/// machine epsilon of 0 or 1.
const ETA_LIMIT: f64 = 36.04365338911715; // -ln(f64::EPSILON)

/// Logistic link `1 / (1 + e^-x)`, kept strictly inside `(0, 1)`.
pub fn sigmoid(x: f64) -> f64 {
    let x = x.clamp(-ETA_LIMIT, ETA_LIMIT);
    1.0 / (1.0 + (-x).exp())
}
