//! Values that may be held directly or through a mutable reference.
//!
//! `Binding` makes the "is it a reference?" question a pattern match. The
//! helpers below never fail: on a direct value they return `None`/`false`.

use crate::cfg;

/// A value held directly, or a mutable reference to one held elsewhere.
#[derive(Debug, PartialEq)]
pub enum Binding<'a, T> {
    Value(T),
    Ref(&'a mut T),
}

impl<'a, T> Binding<'a, T> {
    /// The bound value, wherever it lives.
    pub fn get(&self) -> &T {
        match self {
            Binding::Value(v) => v,
            Binding::Ref(r) => r,
        }
    }
}

/// True iff the binding is a reference. A reference to a reference counts.
#[inline]
pub fn is_reference<T>(binding: &Binding<'_, T>) -> bool {
    matches!(binding, Binding::Ref(_))
}

/// The referenced value for a `Ref`. For a direct value: the value itself when
/// `return_if_not_reference` is true, `None` when false. Omitted (`None`)
/// uses the default, which returns the value.
pub fn dereference_or_default<T: Clone>(
    binding: &Binding<'_, T>,
    return_if_not_reference: Option<bool>,
) -> Option<T> {
    match binding {
        Binding::Ref(r) => Some((**r).clone()),
        Binding::Value(v) => {
            let keep = return_if_not_reference.unwrap_or(cfg::RETURN_IF_NOT_REFERENCE);
            tracing::trace!(keep, "dereference of a direct value");
            keep.then(|| v.clone())
        }
    }
}

/// Overwrite the referenced value with `to` and hand the reference back.
/// A direct value is left untouched and yields `None`.
pub fn assign_through_reference<'a, T>(binding: Binding<'a, T>, to: T) -> Option<&'a mut T> {
    match binding {
        Binding::Ref(r) => {
            *r = to;
            Some(r)
        }
        Binding::Value(_) => None,
    }
}

/// True iff both bindings are references and their targets compare equal.
pub fn references_equal<T: PartialEq>(a: &Binding<'_, T>, b: &Binding<'_, T>) -> bool {
    match (a, b) {
        (Binding::Ref(x), Binding::Ref(y)) => **x == **y,
        _ => false,
    }
}
