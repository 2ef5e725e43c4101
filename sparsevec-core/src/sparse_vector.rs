use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::errors::ParseError;
use crate::traits::{Index, Value};

/// A sparse vector: integer indices mapped to values, absent indices read as zero.
///
/// Entries are kept in a `BTreeMap`, so iteration and the text encoding are
/// always in ascending index order. Zero-valued entries may be stored (the
/// constructors and [`SparseVector::set`] keep them verbatim) and are dropped
/// after every arithmetic update and whenever the vector is serialized.
#[derive(Debug, Clone)]
pub struct SparseVector<V: Value> {
    entries: BTreeMap<Index, V>,
}

/// Single precision vector, the default element type.
pub type SparseVec = SparseVector<f32>;

/// Integer valued vector.
pub type ISparseVec = SparseVector<i32>;

impl<V: Value> Default for SparseVector<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Value> SparseVector<V> {
    /// Create an empty sparse vector.
    pub fn empty() -> Self {
        SparseVector {
            entries: BTreeMap::new(),
        }
    }

    pub fn new() -> Self {
        Self::empty()
    }

    /// Create a sparse vector from a dense slice. Position `i` becomes entry `i`,
    /// zeros included.
    pub fn from_dense(values: &[V]) -> Self {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as Index, *v))
            .collect()
    }

    /// Create a sparse vector from an index to value mapping, taken verbatim.
    pub fn from_sparse_map(entries: BTreeMap<Index, V>) -> Self {
        SparseVector { entries }
    }

    /// Create a sparse vector from parallel index and value arrays.
    ///
    /// # Panics
    /// Panics if `indices` and `values` have different lengths.
    pub fn from_parts(indices: &[Index], values: &[V]) -> Self {
        assert_eq!(
            indices.len(),
            values.len(),
            "indices and values must have the same length"
        );
        indices.iter().copied().zip(values.iter().copied()).collect()
    }

    /// Parse the text encoding `{i1:v1,i2:v2,...}`.
    ///
    /// Whitespace and braces are ignored anywhere in the string, so `""`, `"{}"`
    /// and `" { } "` all give an empty vector. Later duplicates of an index
    /// overwrite earlier ones.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let stripped: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '{' && *c != '}')
            .collect();

        let mut entries = BTreeMap::new();
        if stripped.is_empty() {
            return Ok(SparseVector { entries });
        }

        for token in stripped.split(',') {
            let (index, value) = token
                .split_once(':')
                .ok_or_else(|| ParseError::MissingSeparator(token.to_string()))?;
            let index = index
                .parse::<Index>()
                .map_err(|_| ParseError::InvalidIndex(token.to_string()))?;
            let value = value
                .parse::<V>()
                .map_err(|_| ParseError::InvalidValue(token.to_string()))?;
            entries.insert(index, value);
        }

        Ok(SparseVector { entries })
    }

    ///
    /// Value at `index`, or zero when nothing is stored there.
    ///
    pub fn get(&self, index: Index) -> V {
        self.entries.get(&index).copied().unwrap_or_else(V::zero)
    }

    ///
    /// Insert or overwrite the entry at `index`. Zero is stored as given.
    ///
    pub fn set(&mut self, index: Index, value: V) {
        self.entries.insert(index, value);
    }

    /// Remove the entry at `index`, returning the stored value if there was one.
    pub fn remove(&mut self, index: Index) -> Option<V> {
        self.entries.remove(&index)
    }

    pub fn contains(&self, index: Index) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of stored entries, explicit zeros included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.non_zero().count()
    }

    /// Returns true if the vector stores no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One past the highest stored index, or 0 for an empty vector.
    ///
    /// Stored zeros count: `from_dense(&[1, 0, 0]).dim() == 3`.
    pub fn dim(&self) -> usize {
        match self.entries.last_key_value() {
            Some((&max, _)) if max >= 0 => {
                usize::try_from(max).map_or(usize::MAX, |m| m.saturating_add(1))
            }
            _ => 0,
        }
    }

    /// Iterate over stored `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    fn non_zero(&self) -> impl Iterator<Item = (Index, V)> + '_ {
        self.iter().filter(|(_, v)| !v.is_zero())
    }

    /// The stored entries without the zero-valued ones. Does not touch `self`.
    pub fn normalized(&self) -> BTreeMap<Index, V> {
        self.non_zero().collect()
    }

    /// Drop every zero-valued entry in place.
    pub fn normalize(&mut self) {
        self.entries.retain(|_, v| !v.is_zero());
    }

    /// Render as `{i1:v1,i2:v2,...}`, zero entries omitted.
    pub fn to_text(&self) -> String {
        let body = self
            .non_zero()
            .map(|(i, v)| format!("{}:{}", i, v))
            .collect::<Vec<String>>()
            .join(",");
        format!("{{{}}}", body)
    }

    /// Dense form of length [`SparseVector::dim`].
    pub fn to_dense(&self) -> Vec<V> {
        (0..self.dim()).map(|i| self.get(i as Index)).collect()
    }

    /// Same as [`SparseVector::normalized`].
    pub fn to_sparse_map(&self) -> BTreeMap<Index, V> {
        self.normalized()
    }

    fn combine_assign<F>(&mut self, other: &SparseVector<V>, op: F)
    where
        F: Fn(&mut V, V),
    {
        for (&index, &value) in other.entries.iter() {
            op(self.entries.entry(index).or_insert_with(V::zero), value);
        }
        self.normalize();
    }

    ///
    /// In-place `self += other`, then normalize.
    ///
    pub fn add_assign_vec(&mut self, other: &SparseVector<V>) {
        self.combine_assign(other, |l, r| *l += r);
    }

    ///
    /// In-place `self -= other`, then normalize.
    ///
    pub fn sub_assign_vec(&mut self, other: &SparseVector<V>) {
        self.combine_assign(other, |l, r| *l -= r);
    }

    /// In-place `self *= other`, then normalize.
    ///
    /// Only indices stored in `other` are visited: an index present in `self`
    /// but absent from `other` keeps its value instead of becoming zero.
    pub fn mul_assign_vec(&mut self, other: &SparseVector<V>) {
        self.combine_assign(other, |l, r| *l *= r);
    }

    pub fn add(&self, other: &SparseVector<V>) -> SparseVector<V> {
        let mut result = self.clone();
        result.add_assign_vec(other);
        result
    }

    pub fn subtract(&self, other: &SparseVector<V>) -> SparseVector<V> {
        let mut result = self.clone();
        result.sub_assign_vec(other);
        result
    }

    /// Copying form of [`SparseVector::mul_assign_vec`], with the same
    /// left-only index behavior.
    pub fn multiply(&self, other: &SparseVector<V>) -> SparseVector<V> {
        let mut result = self.clone();
        result.mul_assign_vec(other);
        result
    }

    /// Test `predicate(self[i], other[i])` for every index `i` stored in `self`
    /// and every index holding a non-zero value in `other`, and AND the results.
    ///
    /// Zeros stored in `self` take part (so a stored `0` against an absent
    /// entry fails a strict test); zeros stored in `other` do not. An empty
    /// `self` against a vector with no non-zero entries compares true.
    pub fn compare<F>(&self, other: &SparseVector<V>, predicate: F) -> bool
    where
        F: Fn(V, V) -> bool,
    {
        self.iter()
            .all(|(index, value)| predicate(value, other.get(index)))
            && other
                .non_zero()
                .all(|(index, value)| predicate(self.get(index), value))
    }

    pub fn equals(&self, other: &SparseVector<V>) -> bool {
        self.compare(other, |l, r| l == r)
    }

    pub fn not_equals(&self, other: &SparseVector<V>) -> bool {
        !self.equals(other)
    }

    /// Pareto "dominated by": every coordinate of `self` is `<=` the one in `other`.
    pub fn less_or_equal(&self, other: &SparseVector<V>) -> bool {
        self.compare(other, |l, r| l <= r)
    }

    /// Pareto "dominates": every coordinate of `self` is `>=` the one in `other`.
    pub fn greater_or_equal(&self, other: &SparseVector<V>) -> bool {
        self.compare(other, |l, r| l >= r)
    }

    /// Strict `<` on every index stored in `self` and every non-zero index of `other`.
    ///
    /// A single tied coordinate makes this false, so it is stricter than
    /// Pareto strict dominance.
    pub fn less_than(&self, other: &SparseVector<V>) -> bool {
        self.compare(other, |l, r| l < r)
    }

    /// Strict `>` on every index stored in `self` and every non-zero index of `other`.
    pub fn greater_than(&self, other: &SparseVector<V>) -> bool {
        self.compare(other, |l, r| l > r)
    }
}

/// Iterator over the stored entries of a [`SparseVector`].
pub struct Iter<'a, V> {
    inner: btree_map::Iter<'a, Index, V>,
}

impl<V: Copy> Iterator for Iter<'_, V> {
    type Item = (Index, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, v)| (*i, *v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V: Value> FromIterator<(Index, V)> for SparseVector<V> {
    fn from_iter<T: IntoIterator<Item = (Index, V)>>(iter: T) -> Self {
        SparseVector {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, V: Value> IntoIterator for &'a SparseVector<V> {
    type Item = (Index, V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
