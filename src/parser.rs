//! Classification of raw parameter specifications.
//!
//! A raw specification is either an explicit `{name, args...}` mapping, a
//! shorthand candidate list, or a two-element numeric range. The parser
//! decides which distribution a shorthand denotes, normalizes it into
//! `{name, args...}` form, and asks the registry to build it.

use std::collections::BTreeMap;

use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::value::Value;

/// Builds a sampler from one raw parameter specification.
///
/// A mapping is handed verbatim to the registry. A list becomes an `enum`
/// over its elements, except that a two-element all-integer list denotes an
/// inclusive integer range (`quniform` at unit step) and any other
/// two-element numeric list denotes a continuous range (`uniform`).
///
/// # Errors
///
/// Returns [`Error::InvalidSpec`] if the specification is neither a mapping
/// nor a list, and any construction error from the registry.
///
/// # Examples
///
/// ```
/// use samplespec::{Value, parse_parameter};
///
/// let range = parse_parameter(&Value::List(vec![Value::Int(10), Value::Int(90)]))?;
/// assert_eq!(range.name(), "quniform");
/// # Ok::<(), samplespec::Error>(())
/// ```
pub fn parse_parameter(spec: &Value) -> Result<Distribution> {
    parse_parameter_in(Registry::global(), spec)
}

/// As [`parse_parameter`], against an explicit registry.
///
/// # Errors
///
/// See [`parse_parameter`].
pub fn parse_parameter_in(registry: &Registry, spec: &Value) -> Result<Distribution> {
    match spec {
        Value::Map(params) => registry.create(params),
        Value::List(items) => registry.create(&classify_list(items)),
        other => Err(Error::InvalidSpec {
            spec: other.to_string(),
        }),
    }
}

/// Builds a sampler for every named parameter, preserving the key set.
///
/// # Errors
///
/// Fails on the first unparsable entry, wrapping the cause as
/// [`Error::Parameter`] so the offending parameter is named.
pub fn parse_parameters(
    params: &BTreeMap<String, Value>,
) -> Result<BTreeMap<String, Distribution>> {
    parse_parameters_in(Registry::global(), params)
}

/// As [`parse_parameters`], against an explicit registry.
///
/// # Errors
///
/// See [`parse_parameters`].
pub fn parse_parameters_in(
    registry: &Registry,
    params: &BTreeMap<String, Value>,
) -> Result<BTreeMap<String, Distribution>> {
    params
        .iter()
        .map(|(name, spec)| {
            parse_parameter_in(registry, spec)
                .map(|sampler| (name.clone(), sampler))
                .map_err(|source| Error::Parameter {
                    name: name.clone(),
                    source: Box::new(source),
                })
        })
        .collect()
}

/// Normalizes a shorthand list into `{name, args...}` form.
fn classify_list(items: &[Value]) -> BTreeMap<String, Value> {
    if let [low, high] = items {
        if low.is_int() && high.is_int() {
            trace_debug!("classified two-integer shorthand as quniform");
            return spec_map(&[
                ("name", Value::from("quniform")),
                ("low", low.clone()),
                ("high", high.clone()),
                ("q", Value::Int(1)),
            ]);
        }
        // A mixed int/float pair lands here: the elements only need to be
        // numeric. `uniform` never reads `q`; the key is carried and ignored.
        if low.is_number() && high.is_number() {
            trace_debug!("classified two-number shorthand as uniform");
            return spec_map(&[
                ("name", Value::from("uniform")),
                ("low", low.clone()),
                ("high", high.clone()),
                ("q", Value::Int(1)),
            ]);
        }
    }
    spec_map(&[
        ("name", Value::from("enum")),
        ("enum", Value::List(items.to_vec())),
    ])
}

fn spec_map(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}
