//! Optional parameters, generic containers, and reference bindings.
//!
//! - `binder`: positional optional parameters (`bind`, `bind_array`).
//! - `dynamic`: opaque `Arg` values and the `args!` list builder.
//! - `collections`: generic sequence/mapping conversions and equality.
//! - `reference`: value-or-reference `Binding` helpers.
//!
//! All functions are stateless and synchronous.

pub mod binder;
mod cfg;
pub mod collections;
pub mod dynamic;
pub mod error;
pub mod reference;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::args;
    pub use crate::binder::{bind, bind_array};
    pub use crate::collections::{
        clone_by_reference, keys_and_values, sequences_equal, to_generic_mapping,
        to_generic_sequence, unpack_array, unpack_map,
    };
    pub use crate::dynamic::{slot_ref, Arg, ArgKey, Nil, NIL};
    pub use crate::reference::{
        assign_through_reference, dereference_or_default, is_reference, references_equal, Binding,
    };
    pub use crate::select_by_condition;
    pub use crate::{Error, Result};
}

/// `a` if `test` holds, else `b`. Both are already evaluated by the caller.
#[inline]
pub fn select_by_condition<T>(test: bool, a: T, b: T) -> T {
    if test {
        a
    } else {
        b
    }
}
