use anyhow::{bail, Result};
use serde::Serialize;
use variadics::binder::bind;
use variadics::dynamic::Arg;

/// Token meaning "explicitly omitted".
pub const NIL_TOKEN: &str = "nil";

/// Parse a command-line token into an opaque argument.
/// Tries integer, finite float, and bool in that order, else keeps the string.
/// Tokens like `nan` or `inf` stay strings.
pub fn parse_token(raw: &str) -> Option<Arg> {
    if raw == NIL_TOKEN {
        return None;
    }
    let arg = if let Ok(i) = raw.parse::<i64>() {
        Arg::new(i)
    } else if let Some(f) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
        Arg::new(f)
    } else if let Ok(b) = raw.parse::<bool>() {
        Arg::new(b)
    } else {
        Arg::new(raw.to_string())
    };
    Some(arg)
}

/// Split a comma-separated list of slot names. Empty names are rejected.
pub fn parse_slot_names(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let names: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    if let Some(pos) = names.iter().position(|n| n.is_empty()) {
        bail!("slot name #{} is empty in {:?}", pos + 1, raw);
    }
    Ok(names)
}

/// Parse a comma-separated token list; an empty string is an empty list.
pub fn parse_token_list(raw: &str) -> Vec<Option<Arg>> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(|t| parse_token(t.trim())).collect()
    }
}

/// Bind parsed `values` onto `names` and describe each slot.
pub fn bind_report(names: Vec<String>, values: &[String]) -> Vec<SlotReport> {
    let mut bound: Vec<Option<Arg>> = vec![None; names.len()];
    {
        let mut refs: Vec<&mut Option<Arg>> = bound.iter_mut().collect();
        bind(values.iter().map(|v| parse_token(v)), &mut refs);
    }
    names
        .into_iter()
        .zip(bound.iter())
        .map(|(name, slot)| SlotReport::new(name, slot))
        .collect()
}

/// One bound slot, as printed by `variadics bind`.
#[derive(Debug, Serialize, PartialEq)]
pub struct SlotReport {
    pub slot: String,
    #[serde(rename = "type")]
    pub type_name: Option<&'static str>,
    pub value: Option<String>,
}

impl SlotReport {
    pub fn new(slot: String, bound: &Option<Arg>) -> Self {
        Self {
            slot,
            type_name: bound.as_ref().map(Arg::type_name),
            value: bound.as_ref().map(|a| format!("{:?}", a)),
        }
    }
}
