/// Calculate cosine similarity between two vectors.
///
/// Returns `None` when either vector has zero magnitude, leaving the caller to decide how a
/// degenerate vector is scored.
pub fn cosine_similarity(v1: &[u32], v2: &[u32]) -> Option<f64> {
    debug_assert_eq!(
        v1.len(),
        v2.len(),
        "Vectors must have the same length for cosine similarity"
    );

    // Use iterators to reduce redundant passes through the vectors
    let (dot_product, magnitude_v1_sq, magnitude_v2_sq) =
        v1.iter()
            .zip(v2)
            .fold((0u64, 0u64, 0u64), |(dot, mag1, mag2), (&a, &b)| {
                (
                    dot + (a as u64 * b as u64),
                    mag1 + (a as u64 * a as u64),
                    mag2 + (b as u64 * b as u64),
                )
            });

    cosine_similarity_from_parts(dot_product, magnitude_v1_sq, magnitude_v2_sq)
}

/// Cosine similarity from a precomputed dot product and squared L2 magnitudes.
pub fn cosine_similarity_from_parts(
    dot_product: u64,
    magnitude_v1_sq: u64,
    magnitude_v2_sq: u64,
) -> Option<f64> {
    let magnitude_v1 = (magnitude_v1_sq as f64).sqrt();
    let magnitude_v2 = (magnitude_v2_sq as f64).sqrt();

    if magnitude_v1 == 0.0 || magnitude_v2 == 0.0 {
        return None;
    }

    Some(dot_product as f64 / (magnitude_v1 * magnitude_v2))
}

pub fn dot_product(v1: &[u32], v2: &[u32]) -> u64 {
    v1.iter().zip(v2).map(|(&a, &b)| a as u64 * b as u64).sum()
}

pub fn squared_magnitude(vector: &[u32]) -> u64 {
    vector.iter().map(|&a| a as u64 * a as u64).sum()
}
