use crate::hex::Hex;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;

/// An ORDERED map of axial hex positions to some `T`. Iteration order is
/// insertion order, which keeps output derived from a grid reproducible.
pub type HexMap<T> = IndexMap<Hex, T, FnvBuildHasher>;
