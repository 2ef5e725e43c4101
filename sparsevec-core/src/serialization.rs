use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sparse_vector::SparseVector;
use crate::traits::{Index, Value};

// A vector serializes as its normalized index -> value map.
impl<V> Serialize for SparseVector<V>
where
    V: Value + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_sparse_map().serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for SparseVector<V>
where
    V: Value + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<Index, V>::deserialize(deserializer)?;
        Ok(SparseVector::from_sparse_map(entries))
    }
}
