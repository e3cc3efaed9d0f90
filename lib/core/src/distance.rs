// Euclidean distance kernel.
// Feature vectors here are short (2 + catalog size), below any width where
// platform SIMD pays off, so only the pipelined scalar path is kept.

/// Squared L2 distance with two accumulators for better pipelining.
/// Both slices must have the same length.
#[inline]
pub fn l2_distance_squared(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let mut sum0 = 0.0f32;
    let mut sum1 = 0.0f32;

    let chunks = a.chunks_exact(4);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(4);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        let d0 = a_chunk[0] - b_chunk[0];
        let d1 = a_chunk[1] - b_chunk[1];
        let d2 = a_chunk[2] - b_chunk[2];
        let d3 = a_chunk[3] - b_chunk[3];

        sum0 += d0 * d0 + d1 * d1;
        sum1 += d2 * d2 + d3 * d3;
    }

    let tail = a.len() - remainder.len();
    for (x, y) in remainder.iter().zip(&b[tail..]) {
        let diff = x - y;
        sum0 += diff * diff;
    }

    sum0 + sum1
}

/// L2 distance; slices of different length are infinitely far apart
#[inline]
pub fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return f32::INFINITY;
    }
    l2_distance_squared(a, b).sqrt()
}
