//! Generic argument validation shared by every distribution variant.
//!
//! Each variant declares a [`Schema`]: its name, the fields that must be
//! present once construction finishes, and the defaults seeded before the
//! caller's values are applied. [`Args::build`] is the single validating
//! constructor all variants go through.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::value::Value;

/// The declared argument contract of a distribution variant.
#[derive(Clone, Copy, Debug)]
pub struct Schema {
    /// The distribution's declared name, as used in specifications.
    pub name: &'static str,
    /// Fields that must exist after defaults and caller values are applied.
    pub required: &'static [&'static str],
    /// Field/value pairs seeded before caller values overlay them.
    pub defaults: &'static [(&'static str, Value)],
}

/// A validated bag of distribution arguments.
///
/// Construction seeds the variant's declared defaults, overlays the
/// caller's values (caller wins), then verifies every required field is
/// present. Unknown extra fields are retained and simply never read by the
/// variant builders: the shorthand `uniform` path carries a `q` key that
/// `uniform` ignores.
#[derive(Clone, Debug)]
pub struct Args {
    distribution: &'static str,
    fields: BTreeMap<String, Value>,
}

impl Args {
    /// Builds the argument bag for `schema` from caller-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if a required field is absent
    /// after defaults and caller values are applied.
    pub fn build(schema: &Schema, kwargs: BTreeMap<String, Value>) -> Result<Self> {
        let mut fields: BTreeMap<String, Value> = schema
            .defaults
            .iter()
            .map(|(field, value)| ((*field).to_string(), value.clone()))
            .collect();
        fields.extend(kwargs);

        for field in schema.required {
            if !fields.contains_key(*field) {
                return Err(Error::MissingArgument {
                    distribution: schema.name,
                    field,
                });
            }
        }

        Ok(Self {
            distribution: schema.name,
            fields,
        })
    }

    /// Returns the raw field value, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a float field, coercing integer values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if the field is absent and
    /// [`Error::InvalidArgument`] if it is not a number.
    pub fn float(&self, field: &'static str) -> Result<f64> {
        self.require(field)?
            .as_f64()
            .ok_or(Error::InvalidArgument {
                distribution: self.distribution,
                field,
                expected: "a number",
            })
    }

    /// Returns an integer field. Floats do not coerce.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if the field is absent and
    /// [`Error::InvalidArgument`] if it is not an integer.
    pub fn int(&self, field: &'static str) -> Result<i64> {
        self.require(field)?
            .as_i64()
            .ok_or(Error::InvalidArgument {
                distribution: self.distribution,
                field,
                expected: "an integer",
            })
    }

    /// Returns a count field such as `size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if the field is absent and
    /// [`Error::InvalidArgument`] if it is not a non-negative integer.
    pub fn size(&self, field: &'static str) -> Result<usize> {
        self.require(field)?
            .as_usize()
            .ok_or(Error::InvalidArgument {
                distribution: self.distribution,
                field,
                expected: "a non-negative integer",
            })
    }

    /// Returns a list field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if the field is absent and
    /// [`Error::InvalidArgument`] if it is not a list.
    pub fn list(&self, field: &'static str) -> Result<&[Value]> {
        self.require(field)?
            .as_list()
            .ok_or(Error::InvalidArgument {
                distribution: self.distribution,
                field,
                expected: "a list",
            })
    }

    fn require(&self, field: &'static str) -> Result<&Value> {
        self.fields.get(field).ok_or(Error::MissingArgument {
            distribution: self.distribution,
            field,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: Schema = Schema {
        name: "testdist",
        required: &["size", "low"],
        defaults: &[("size", Value::Int(1))],
    };

    fn kwargs(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn defaults_satisfy_required_fields() {
        let args = Args::build(&SCHEMA, kwargs(&[("low", Value::Float(0.1))])).unwrap();
        assert_eq!(args.size("size").unwrap(), 1);
    }

    #[test]
    fn caller_values_override_defaults() {
        let args = Args::build(
            &SCHEMA,
            kwargs(&[("low", Value::Int(0)), ("size", Value::Int(5))]),
        )
        .unwrap();
        assert_eq!(args.size("size").unwrap(), 5);
    }

    #[test]
    fn missing_required_field_is_fatal() {
        let err = Args::build(&SCHEMA, BTreeMap::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingArgument {
                distribution: "testdist",
                field: "low",
            }
        ));
    }

    #[test]
    fn extra_fields_are_retained() {
        let args = Args::build(
            &SCHEMA,
            kwargs(&[("low", Value::Int(0)), ("q", Value::Int(1))]),
        )
        .unwrap();
        assert_eq!(args.get("q"), Some(&Value::Int(1)));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn float_accessor_coerces_ints() {
        let args = Args::build(&SCHEMA, kwargs(&[("low", Value::Int(3))])).unwrap();
        assert_eq!(args.float("low").unwrap(), 3.0);
    }

    #[test]
    fn typed_accessors_reject_wrong_shapes() {
        let args = Args::build(&SCHEMA, kwargs(&[("low", Value::from("zero"))])).unwrap();
        assert!(matches!(
            args.float("low").unwrap_err(),
            Error::InvalidArgument { field: "low", .. }
        ));
        assert!(matches!(
            args.list("low").unwrap_err(),
            Error::InvalidArgument { field: "low", .. }
        ));
    }
}
