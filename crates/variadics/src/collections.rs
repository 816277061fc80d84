//! Generic sequence/mapping conversions, fresh clones, and sequence equality.
//!
//! Every shape requirement is a trait bound (`IntoIterator`, `Item = (K, V)`),
//! so "not a sequence" or "not a map" cannot reach run time.
//!
//! - `to_generic_sequence` / `to_generic_mapping`: typed, order/size preserving.
//! - `unpack_array` / `unpack_map`: the same conversions into opaque `Arg`s.
//! - `sequences_equal`: length check, then positional `==`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::dynamic::{Arg, ArgKey};

/// Collect any ordered collection into a `Vec`, keeping length and order.
pub fn to_generic_sequence<I: IntoIterator>(seq: I) -> Vec<I::Item> {
    seq.into_iter().collect()
}

/// Collect any key/value collection into a `HashMap`. Later duplicates of a
/// key win, as with `HashMap::from_iter`.
pub fn to_generic_mapping<M, K, V>(map: M) -> HashMap<K, V>
where
    M: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
{
    map.into_iter().collect()
}

/// Convert any sequence into opaque values.
pub fn unpack_array<I>(seq: I) -> Vec<Arg>
where
    I: IntoIterator,
    I::Item: Any + PartialEq + Debug + Send + Sync,
{
    seq.into_iter().map(Arg::new).collect()
}

/// Convert any key/value collection into an opaque-keyed map.
pub fn unpack_map<M, K, V>(map: M) -> HashMap<ArgKey, Arg>
where
    M: IntoIterator<Item = (K, V)>,
    K: Any + Eq + Hash + Debug + Send + Sync,
    V: Any + PartialEq + Debug + Send + Sync,
{
    map.into_iter()
        .map(|(k, v)| (ArgKey::new(k), Arg::new(v)))
        .collect()
}

/// Split a mapping into its keys and values; `keys[i]` belongs to `vals[i]`.
pub fn keys_and_values<M, K, V>(map: M) -> (Vec<K>, Vec<V>)
where
    M: IntoIterator<Item = (K, V)>,
{
    map.into_iter().unzip()
}

/// A freshly allocated default ("zero") value of the referenced type.
///
/// Only the type of `_like` is used; its contents are not copied.
pub fn clone_by_reference<T: Default>(_like: &T) -> Box<T> {
    Box::new(T::default())
}

/// Element-wise equality of two sequences, possibly of different item types.
pub fn sequences_equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    let left = to_generic_sequence(a);
    let right = to_generic_sequence(b);
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(l, r)| l == r)
}
