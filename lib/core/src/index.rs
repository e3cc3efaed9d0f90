//! Exact nearest-neighbor index
//!
//! A brute-force Euclidean scan over an immutable set of rows. Results are
//! ordered by ascending distance, ties broken by row position, so the output
//! is reproducible no matter how the scan is scheduled.

use crate::{Error, Result, Vector};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::Serialize;

/// Below this many rows the scan stays on the calling thread
const PARALLEL_SCAN_THRESHOLD: usize = 4096;

/// One query hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub distance: f32,
    pub row: usize,
}

impl Neighbor {
    #[inline]
    fn sort_key(&self) -> (OrderedFloat<f32>, usize) {
        (OrderedFloat(self.distance), self.row)
    }
}

/// Immutable index over row vectors of one shared dimension.
///
/// There is no insert or remove: a changed matrix means a new index.
#[derive(Debug, Clone, Default)]
pub struct NeighborIndex {
    rows: Vec<Vector>,
    dim: usize,
}

impl NeighborIndex {
    /// Build an index over `rows`. All rows must share one dimension.
    pub fn build(rows: Vec<Vector>) -> Result<Self> {
        let dim = rows.first().map(Vector::dim).unwrap_or(0);
        if let Some(bad) = rows.iter().find(|v| v.dim() != dim) {
            return Err(Error::InvalidDimension {
                expected: dim,
                actual: bad.dim(),
            });
        }
        tracing::debug!(rows = rows.len(), dim, "built neighbor index");
        Ok(Self { rows, dim })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get a row vector by position
    pub fn row(&self, row: usize) -> Option<&Vector> {
        self.rows.get(row)
    }

    /// The `m` rows nearest to an indexed row. The row itself is always
    /// among them at distance 0.
    pub fn query_row(&self, row: usize, m: usize) -> Result<Vec<Neighbor>> {
        let point = self.rows.get(row).ok_or(Error::RowOutOfRange {
            row,
            len: self.rows.len(),
        })?;
        Ok(self.nearest(point.as_slice(), m))
    }

    /// The `m` rows nearest to an arbitrary point. `m` is clamped to `len()`.
    pub fn query_vector(&self, point: &Vector, m: usize) -> Result<Vec<Neighbor>> {
        if !self.rows.is_empty() && point.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: point.dim(),
            });
        }
        Ok(self.nearest(point.as_slice(), m))
    }

    fn nearest(&self, point: &[f32], m: usize) -> Vec<Neighbor> {
        let m = m.min(self.rows.len());
        if m == 0 {
            return Vec::new();
        }

        let score = |(row, v): (usize, &Vector)| Neighbor {
            distance: crate::distance::l2_distance(point, v.as_slice()),
            row,
        };
        let mut hits: Vec<Neighbor> = if self.rows.len() >= PARALLEL_SCAN_THRESHOLD {
            self.rows.par_iter().enumerate().map(score).collect()
        } else {
            self.rows.iter().enumerate().map(score).collect()
        };

        // (distance, row) is a total order, so partial selection followed by
        // a sort of the prefix gives exactly the full-sort prefix.
        if m < hits.len() {
            hits.select_nth_unstable_by_key(m - 1, Neighbor::sort_key);
            hits.truncate(m);
        }
        hits.sort_unstable_by_key(Neighbor::sort_key);
        hits
    }
}
