//! Default policies for optional parameters (internal).
//!
//! Policy
//! - Defaults are fixed constants. Callers override them per call by
//!   supplying the optional argument; there is no global switch.

/// `dereference_or_default` returns the input itself when it is not a
/// reference and the caller omitted the flag.
pub(crate) const RETURN_IF_NOT_REFERENCE: bool = true;
