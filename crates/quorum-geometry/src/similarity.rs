//! Vector-space primitives for diagnostics
//!
//! Embeddings are read-only f32 vectors handed in from the embedding stage.
//! Accumulation happens in f64 so that per-claim statistics are stable
//! regardless of embedding dimension.

/// Calculate cosine similarity between two embedding vectors
///
/// Returns a value in [-1, 1]. A zero-norm input yields 0.0 - this function
/// never divides by zero. Vectors of unequal length are compared over their
/// common prefix; dimension mismatches are an upstream inconsistency and are
/// measured rather than rejected.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (dot / denominator).clamp(-1.0, 1.0)
}

/// Compute the centroid of a set of embedding vectors
///
/// Returns `None` for an empty set. The centroid takes the dimension of the
/// first vector; shorter vectors contribute only to the dimensions they have.
pub fn centroid(vectors: &[&[f32]]) -> Option<Vec<f32>> {
    let first = vectors.first()?;
    let mut sums = vec![0.0f64; first.len()];

    for vector in vectors {
        for (slot, value) in sums.iter_mut().zip(vector.iter()) {
            *slot += *value as f64;
        }
    }

    let count = vectors.len() as f64;
    Some(sums.into_iter().map(|s| (s / count) as f32).collect())
}

/// Arithmetic mean of a sample
///
/// Returns `None` for an empty sample so callers can distinguish "measured
/// as zero" from "could not measure".
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of a sample
///
/// Returns `None` for an empty sample.
pub fn population_stddev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let v = vec![0.3f32, -0.5, 0.8];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = vec![1.0f32, 0.0];
        let b = vec![0.0f32, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = vec![1.0f32, 0.0];
        let b = vec![-1.0f32, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_norm_yields_zero() {
        let zero = vec![0.0f32, 0.0];
        let v = vec![1.0f32, 2.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_centroid_of_two_vectors() {
        let a = vec![0.0f32, 2.0];
        let b = vec![2.0f32, 0.0];
        let c = centroid(&[&a, &b]).unwrap();
        assert_eq!(c, vec![1.0, 1.0]);
    }

    #[test]
    fn test_centroid_empty_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_mean_and_stddev_empty_are_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_stddev(&[]), None);
    }

    #[test]
    fn test_population_stddev() {
        // Population stddev of [1, 3] is 1.0
        let sd = population_stddev(&[1.0, 3.0]).unwrap();
        assert!((sd - 1.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: cosine similarity is symmetric
        #[test]
        fn test_cosine_symmetry(
            a in proptest::collection::vec(-10.0f32..10.0, 1..16),
            b in proptest::collection::vec(-10.0f32..10.0, 1..16),
        ) {
            let ab = cosine_similarity(&a, &b);
            let ba = cosine_similarity(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        /// Property: cosine similarity stays within [-1, 1]
        #[test]
        fn test_cosine_bounds(
            a in proptest::collection::vec(-10.0f32..10.0, 1..16),
            b in proptest::collection::vec(-10.0f32..10.0, 1..16),
        ) {
            let sim = cosine_similarity(&a, &b);
            prop_assert!((-1.0..=1.0).contains(&sim));
        }
    }
}
