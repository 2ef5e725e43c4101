//! # Sparse vectors with arithmetic and Pareto comparisons
//!
//! This crate provides [`SparseVector`], an ordered mapping from integer indices to numeric
//! values where every absent index reads as zero. It can be built from a dense slice, from an
//! index to value map, or from a compact text encoding, and supports element-wise arithmetic
//! and Pareto-style dominance tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsevec_core::SparseVec;
//!
//! let a: SparseVec = "{0:1,2:3}".parse().unwrap();
//! let b: SparseVec = "{2:3,5:1}".parse().unwrap();
//!
//! assert_eq!((&a + &b).to_string(), "{0:1,2:6,5:1}");
//! assert_eq!((&a - &b).to_string(), "{0:1,5:-1}");
//!
//! // coordinate 0: 1 <= 0 fails
//! assert!(!a.less_or_equal(&b));
//! assert_eq!(a.get(42), 0.0);
//! ```
//!
//! ## Text encoding
//!
//! Vectors render as `{i1:v1,i2:v2,...}` in ascending index order with zero entries left out.
//! Parsing ignores whitespace and braces anywhere in the input, so `"7:1, 3:5 , 4:6, 6:0"`
//! reads back as `{3:5,4:6,7:1}`.
//!
//! ## Features
//!
//! - `serde`: (de)serialize a vector as its index to value map.

/// Error types.
pub mod errors;

/// Std operator and conversion trait implementations.
pub mod ops;

/// The [`SparseVector`] type.
pub mod sparse_vector;

/// Element and index types.
pub mod traits;

#[cfg(feature = "serde")]
pub mod serialization;

// re-exports
pub use self::errors::ParseError;
pub use self::sparse_vector::{ISparseVec, Iter, SparseVec, SparseVector};
pub use self::traits::{Index, Value};
