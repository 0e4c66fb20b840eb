use super::error::{VectorError, VectorResult};

#[inline]
fn check_dims(a: &[f64], b: &[f64]) -> VectorResult<()> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> VectorResult<f64> {
    check_dims(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

#[inline]
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity in `[-1, 1]`.
///
/// Returns exactly `0.0` when either side has zero magnitude, so all-zero
/// embeddings score as "unrelated" rather than producing NaN.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> VectorResult<f64> {
    check_dims(a, b)?;

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b)
        .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
            (dot + av * bv, na + av * av, nb + bv * bv)
        });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> VectorResult<f64> {
    check_dims(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt())
}

/// Component-wise mean of `vectors`.
///
/// An empty collection yields an empty vector ("no signal"). All rows must share
/// the first row's length.
pub fn mean_vector<V: AsRef<[f64]>>(vectors: &[V]) -> VectorResult<Vec<f64>> {
    let Some(first) = vectors.first() else {
        return Ok(Vec::new());
    };

    let mut sum = vec![0.0f64; first.as_ref().len()];
    for v in vectors {
        let v = v.as_ref();
        check_dims(&sum, v)?;
        for (acc, x) in sum.iter_mut().zip(v) {
            *acc += x;
        }
    }

    let n = vectors.len() as f64;
    for acc in &mut sum {
        *acc /= n;
    }
    Ok(sum)
}

/// Population variance (divides by N). Empty input yields `0.0`.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n
}

/// Scales `v` to unit length. A zero vector is returned unchanged; callers that
/// need unit length must check [`magnitude`] themselves.
pub fn normalize_vector(v: &[f64]) -> Vec<f64> {
    let norm = magnitude(v);
    if norm == 0.0 {
        return v.to_vec();
    }
    v.iter().map(|x| x / norm).collect()
}
