//! Magnitude / angle projection of attribute vectors onto a 2D plane.

use crate::error::SamplesError;

/// Euclidean length of `vector`. The empty vector has length `0.0`.
pub fn normalize_vector(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Angle between `v1` and `v2` in radians, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so that rounding on
/// (anti)parallel vectors cannot produce `NaN`.
pub fn angle_between_vectors(v1: &[f64], v2: &[f64]) -> Result<f64, SamplesError> {
    if v1.len() != v2.len() {
        return Err(SamplesError::DimensionMismatch {
            left: v1.len(),
            right: v2.len(),
        });
    }
    let norms = normalize_vector(v1) * normalize_vector(v2);
    if norms == 0.0 {
        return Err(SamplesError::ZeroVector);
    }
    let cosine = (dot(v1, v2) / norms).clamp(-1.0, 1.0);
    Ok(cosine.acos())
}

/// Project `attributes` to `(magnitude, angle to the all-ones vector)`.
pub fn project(attributes: &[f64]) -> Result<(f64, f64), SamplesError> {
    let reference = vec![1.0; attributes.len()];
    let angle = angle_between_vectors(&reference, attributes)?;
    Ok((normalize_vector(attributes), angle))
}
