//! Heterogeneous argument lists.
//!
//! Purpose
//! - Let a call site pass a mixed list such as `args!["Gerry", 20, 5.9]` and
//!   let the callee bind it positionally into `Option<Arg>` slots.
//! - Type assertions happen where a slot is read (`Arg::downcast_ref`,
//!   `slot_ref`), never at bind time.
//!
//! Code cross-refs: `binder::{bind, bind_array}`, `collections::{unpack_array, unpack_map}`

mod arg;

pub use arg::{Arg, ArgKey, Nil, NIL};

use std::any::Any;

use crate::error::Result;

/// Build a `Vec<Option<Arg>>` from a list of expressions.
///
/// `NIL` entries become `None`, everything else `Some(Arg)`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<::std::option::Option<$crate::dynamic::Arg>>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let list: ::std::vec::Vec<::std::option::Option<$crate::dynamic::Arg>> =
            ::std::vec![$($crate::dynamic::Arg::wrap($value)),+];
        list
    }};
}

/// Read a bound slot as `T`: absent gives `Ok(None)`, a value of another
/// type gives `TypeMismatch`.
pub fn slot_ref<T: Any>(slot: &Option<Arg>) -> Result<Option<&T>> {
    slot.as_ref().map(|arg| arg.downcast_ref::<T>()).transpose()
}
