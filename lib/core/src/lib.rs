//! # stylematch Core
//!
//! Numeric building blocks for opponent matching:
//!
//! - [`Vector`] - Dense feature vector
//! - [`NeighborIndex`] - Exact Euclidean nearest-neighbor index with a
//!   stable `(distance, row)` ordering
//!
//! ## Example
//!
//! ```rust
//! use stylematch_core::{NeighborIndex, Vector};
//!
//! let index = NeighborIndex::build(vec![
//!     Vector::new(vec![0.0, 0.0]),
//!     Vector::new(vec![1.0, 0.0]),
//!     Vector::new(vec![4.0, 3.0]),
//! ]).unwrap();
//!
//! let hits = index.query_row(0, 2).unwrap();
//! assert_eq!(hits[0].row, 0);
//! assert_eq!(hits[1].row, 1);
//! ```

pub mod distance;
pub mod error;
pub mod index;
pub mod vector;

pub use error::{Error, Result};
pub use index::{Neighbor, NeighborIndex};
pub use vector::Vector;
