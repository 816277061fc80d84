//! `Arg`: an immutable, type-erased value that still knows how to compare,
//! print, and (for keys) hash itself.
//!
//! - The concrete type is captured once at construction in a small table of
//!   function pointers (`Ops`), so no trait object beyond `dyn Any` is needed.
//! - Cloning is cheap (`Arc`), and `Arg` is `Send + Sync`.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Explicit absent marker for argument lists (`args!["a", NIL]`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// The single `Nil` value.
pub const NIL: Nil = Nil;

#[derive(Clone, Copy)]
struct Ops {
    type_id: TypeId,
    type_name: &'static str,
    eq: fn(&dyn Any, &dyn Any) -> bool,
    fmt: fn(&dyn Any, &mut fmt::Formatter<'_>) -> fmt::Result,
    hash: Option<fn(&dyn Any, &mut dyn Hasher)>,
}

impl Ops {
    fn of<T: Any + PartialEq + fmt::Debug>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            eq: eq_erased::<T>,
            fmt: fmt_erased::<T>,
            hash: None,
        }
    }
}

fn eq_erased<T: Any + PartialEq>(a: &dyn Any, b: &dyn Any) -> bool {
    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn fmt_erased<T: Any + fmt::Debug>(v: &dyn Any, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match v.downcast_ref::<T>() {
        Some(v) => v.fmt(f),
        None => f.write_str("<erased>"),
    }
}

fn hash_erased<T: Any + Hash>(v: &dyn Any, mut state: &mut dyn Hasher) {
    if let Some(v) = v.downcast_ref::<T>() {
        v.hash(&mut state);
    }
}

/// Opaque, dynamically typed argument value.
///
/// Two `Arg`s are equal iff they hold the same concrete type and the values
/// compare equal under that type's `PartialEq`.
#[derive(Clone)]
pub struct Arg {
    value: Arc<dyn Any + Send + Sync>,
    ops: Ops,
}

impl Arg {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + PartialEq + fmt::Debug + Send + Sync,
    {
        Self {
            value: Arc::new(value),
            ops: Ops::of::<T>(),
        }
    }

    /// Like [`Arg::new`], but `NIL` becomes `None` (an explicitly omitted argument).
    pub fn wrap<T>(value: T) -> Option<Self>
    where
        T: Any + PartialEq + fmt::Debug + Send + Sync,
    {
        if TypeId::of::<T>() == TypeId::of::<Nil>() {
            None
        } else {
            Some(Self::new(value))
        }
    }

    /// Name of the concrete type held, as reported by `std::any::type_name`.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ops.type_name
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ops.type_id == TypeId::of::<T>()
    }

    /// Assert the concrete type. Fails with `TypeMismatch` naming both types.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T> {
        self.value
            .downcast_ref::<T>()
            .ok_or_else(|| Error::TypeMismatch {
                expected: type_name::<T>(),
                found: self.ops.type_name,
            })
    }

    pub fn get<T: Any + Clone>(&self) -> Result<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        self.ops.type_id == other.ops.type_id && (self.ops.eq)(&*self.value, &*other.value)
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.ops.fmt)(&*self.value, f)
    }
}

/// An `Arg` whose concrete type is `Eq + Hash`, usable as a map key.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgKey(Arg);

impl ArgKey {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Eq + Hash + fmt::Debug + Send + Sync,
    {
        let mut arg = Arg::new(value);
        arg.ops.hash = Some(hash_erased::<T>);
        Self(arg)
    }

    pub fn into_arg(self) -> Arg {
        self.0
    }
}

// Only constructible from `T: Eq`, so equality is reflexive.
impl Eq for ArgKey {}

impl Hash for ArgKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.ops.type_id.hash(state);
        if let Some(hash) = self.0.ops.hash {
            hash(&*self.0.value, state);
        }
    }
}

impl Deref for ArgKey {
    type Target = Arg;

    fn deref(&self) -> &Arg {
        &self.0
    }
}

impl From<ArgKey> for Arg {
    fn from(key: ArgKey) -> Self {
        key.0
    }
}
