//! Std trait adapters over the named [`SparseVector`] operations.
//!
//! `PartialOrd` is intentionally absent: `<` and `>` on sparse vectors are
//! element-wise strict tests that do not follow from a `partial_cmp`. Use
//! [`SparseVector::less_than`] and friends directly.
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::errors::ParseError;
use crate::sparse_vector::SparseVector;
use crate::traits::{Index, Value};

impl<V: Value> Display for SparseVector<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl<V: Value> FromStr for SparseVector<V> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SparseVector::from_text(s)
    }
}

impl<V: Value> PartialEq for SparseVector<V> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<V: Value> From<Vec<V>> for SparseVector<V> {
    fn from(value: Vec<V>) -> Self {
        SparseVector::from_dense(&value)
    }
}

impl<V: Value> From<&[V]> for SparseVector<V> {
    fn from(value: &[V]) -> Self {
        SparseVector::from_dense(value)
    }
}

impl<V: Value> From<BTreeMap<Index, V>> for SparseVector<V> {
    fn from(value: BTreeMap<Index, V>) -> Self {
        SparseVector::from_sparse_map(value)
    }
}

impl<V: Value> From<SparseVector<V>> for Vec<V> {
    fn from(value: SparseVector<V>) -> Self {
        value.to_dense()
    }
}

impl<V: Value> From<SparseVector<V>> for BTreeMap<Index, V> {
    fn from(value: SparseVector<V>) -> Self {
        value.to_sparse_map()
    }
}

// binary operators, owned and borrowed
macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $inplace:ident) => {
        impl<V: Value> $op<&SparseVector<V>> for &SparseVector<V> {
            type Output = SparseVector<V>;

            fn $method(self, rhs: &SparseVector<V>) -> SparseVector<V> {
                let mut result = self.clone();
                result.$inplace(rhs);
                result
            }
        }

        impl<V: Value> $op<&SparseVector<V>> for SparseVector<V> {
            type Output = SparseVector<V>;

            fn $method(mut self, rhs: &SparseVector<V>) -> SparseVector<V> {
                self.$inplace(rhs);
                self
            }
        }

        impl<V: Value> $op<SparseVector<V>> for SparseVector<V> {
            type Output = SparseVector<V>;

            fn $method(mut self, rhs: SparseVector<V>) -> SparseVector<V> {
                self.$inplace(&rhs);
                self
            }
        }

        impl<V: Value> $assign_op<&SparseVector<V>> for SparseVector<V> {
            fn $assign_method(&mut self, rhs: &SparseVector<V>) {
                self.$inplace(rhs);
            }
        }

        impl<V: Value> $assign_op<SparseVector<V>> for SparseVector<V> {
            fn $assign_method(&mut self, rhs: SparseVector<V>) {
                self.$inplace(&rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_assign_vec);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_assign_vec);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_assign_vec);
