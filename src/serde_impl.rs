//! `serde` support: a tree is encoded as its ascending value sequence.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Tree;

impl<T: Serialize> Serialize for Tree<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.inorder())
    }
}

/// Any sequence is accepted; it is sorted and deduplicated on the way in.
impl<'de, T> Deserialize<'de> for Tree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Tree::from)
    }
}
