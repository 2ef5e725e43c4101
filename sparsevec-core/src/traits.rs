use std::fmt::{Debug, Display};
use std::ops::{AddAssign, MulAssign, SubAssign};
use std::str::FromStr;

use num_traits::Zero;

/// Index type of a sparse vector. Negative keys are allowed but never
/// contribute to the dense form.
pub type Index = i64;

/// Numeric element type stored in a [`SparseVector`](crate::SparseVector).
///
/// Blanket-implemented for every type with the needed arithmetic, so all
/// primitive integers and floats qualify.
pub trait Value:
    Copy + Zero + PartialEq + PartialOrd + AddAssign + SubAssign + MulAssign + FromStr + Display + Debug
{
}

impl<V> Value for V where
    V: Copy
        + Zero
        + PartialEq
        + PartialOrd
        + AddAssign
        + SubAssign
        + MulAssign
        + FromStr
        + Display
        + Debug
{
}
