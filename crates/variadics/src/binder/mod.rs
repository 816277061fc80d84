//! Positional optional parameters.
//!
//! Purpose
//! - Bind an ordered list of supplied values onto an ordered list of slots:
//!   slot `i` receives `supplied[i]`, or `None` when fewer values were given.
//! - `None` means "omitted", which is distinct from an explicitly supplied zero
//!   value. An explicitly supplied `None` is bound unchanged.
//!
//! Contract
//! - Exactly the slots are written; extra supplied values are dropped without
//!   being drained (infinite iterators are fine).
//! - No type checks at bind time. With `Arg` payloads the callee asserts types
//!   when reading a slot (see `dynamic::slot_ref`).
//!
//! Code cross-refs: `dynamic::{Arg, args!}`, `reference::dereference_or_default`

/// Bind `supplied` positionally into `slots`.
///
/// Items may be plain `T` or `Option<T>`; missing positions become `None`.
///
/// ```
/// use variadics::binder::bind;
/// let (mut name, mut age): (Option<&str>, Option<&str>) = (None, None);
/// bind(["Gerry"], &mut [&mut name, &mut age]);
/// assert_eq!((name, age), (Some("Gerry"), None));
/// ```
pub fn bind<T, I>(supplied: I, slots: &mut [&mut Option<T>])
where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
{
    let mut supplied = supplied.into_iter();
    for slot in slots.iter_mut() {
        **slot = supplied.next().and_then(|v| v.into());
    }
    if supplied.next().is_some() {
        tracing::trace!(slots = slots.len(), "extra arguments ignored");
    }
}

/// Same contract as [`bind`], returning the slots as an array for destructuring:
/// `let [name, age, height] = bind_array(args);`
pub fn bind_array<T, I, const N: usize>(supplied: I) -> [Option<T>; N]
where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
{
    let mut supplied = supplied.into_iter();
    let slots = std::array::from_fn(|_| supplied.next().and_then(|v| v.into()));
    if supplied.next().is_some() {
        tracing::trace!(slots = N, "extra arguments ignored");
    }
    slots
}

#[cfg(test)]
mod tests;
