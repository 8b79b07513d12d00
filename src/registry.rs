//! Name-keyed registration and construction of distribution variants.

use core::fmt;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::args::{Args, Schema};
use crate::distribution::{
    Choice, Distribution, LogNormal, LogUniform, Normal, QLogNormal, QLogUniform, QNormal,
    QUniform, RandInt, Uniform,
};
use crate::error::{Error, Result};
use crate::value::Value;

type Build = fn(&Args) -> Result<Distribution>;

/// A registrable distribution variant: its argument schema and build function.
#[derive(Clone, Copy)]
pub struct Variant {
    schema: Schema,
    build: Build,
}

impl Variant {
    /// Creates a variant descriptor from a schema and its build function.
    #[must_use]
    pub const fn new(schema: Schema, build: Build) -> Self {
        Self { schema, build }
    }

    /// The declared name this variant registers under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// The variant's argument schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("schema", &self.schema).finish()
    }
}

fn builtins() -> [Variant; 10] {
    [
        Variant::new(RandInt::SCHEMA, |args| {
            RandInt::from_args(args).map(Distribution::RandInt)
        }),
        Variant::new(Choice::SCHEMA, |args| {
            Choice::from_args(args).map(Distribution::Choice)
        }),
        Variant::new(Uniform::SCHEMA, |args| {
            Uniform::from_args(args).map(Distribution::Uniform)
        }),
        Variant::new(Normal::SCHEMA, |args| {
            Normal::from_args(args).map(Distribution::Normal)
        }),
        Variant::new(LogUniform::SCHEMA, |args| {
            LogUniform::from_args(args).map(Distribution::LogUniform)
        }),
        Variant::new(LogNormal::SCHEMA, |args| {
            LogNormal::from_args(args).map(Distribution::LogNormal)
        }),
        Variant::new(QUniform::SCHEMA, |args| {
            QUniform::from_args(args).map(Distribution::QUniform)
        }),
        Variant::new(QNormal::SCHEMA, |args| {
            QNormal::from_args(args).map(Distribution::QNormal)
        }),
        Variant::new(QLogUniform::SCHEMA, |args| {
            QLogUniform::from_args(args).map(Distribution::QLogUniform)
        }),
        Variant::new(QLogNormal::SCHEMA, |args| {
            QLogNormal::from_args(args).map(Distribution::QLogNormal)
        }),
    ]
}

/// The index of distribution variants, keyed by declared name.
///
/// The process-wide instance behind [`Registry::global`] is populated once
/// and read thereafter, so it is safe to share across threads. Registration
/// rejects duplicate names: a later variant can never silently shadow an
/// earlier one.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    variants: BTreeMap<&'static str, Variant>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            variants: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every built-in variant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if two variants declare the same name.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for variant in builtins() {
            registry.register(variant)?;
        }
        Ok(registry)
    }

    /// Returns the process-wide registry of built-in variants.
    ///
    /// # Panics
    ///
    /// Panics if two built-in variants declare the same name. This halts at
    /// first use, before any sampling is attempted.
    #[must_use]
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| match Registry::with_builtins() {
            Ok(registry) => {
                trace_debug!("initialized builtin distribution registry");
                registry
            }
            Err(err) => panic!("builtin distribution registry is invalid: {err}"),
        })
    }

    /// Registers a variant under its declared name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the name is already taken.
    pub fn register(&mut self, variant: Variant) -> Result<()> {
        let name = variant.name();
        if self.variants.contains_key(name) {
            return Err(Error::DuplicateName(name));
        }
        self.variants.insert(name, variant);
        Ok(())
    }

    /// Looks up a variant by declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.variants.get(name)
    }

    /// Iterates the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.keys().copied()
    }

    /// Constructs a distribution from a `{name, args...}` mapping.
    ///
    /// The `name` key selects the variant; every other key is handed to it
    /// as an argument. Extra keys a variant never reads are permitted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingName`] if the mapping has no string `name`
    /// key, [`Error::UnknownDistribution`] if no variant declares the
    /// requested name, and any argument-validation error from the variant's
    /// construction.
    pub fn create(&self, params: &BTreeMap<String, Value>) -> Result<Distribution> {
        let Some(Value::Str(name)) = params.get("name") else {
            return Err(Error::MissingName {
                spec: Value::Map(params.clone()).to_string(),
            });
        };
        let Some(variant) = self.get(name) else {
            return Err(Error::UnknownDistribution {
                name: name.clone(),
                known: self.names().collect::<Vec<_>>().join(", "),
            });
        };

        let kwargs: BTreeMap<String, Value> = params
            .iter()
            .filter(|(key, _)| key.as_str() != "name")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let args = Args::build(variant.schema(), kwargs)?;
        let distribution = (variant.build)(&args)?;
        distribution.validate()?;
        trace_debug!(name = distribution.name(), "constructed distribution");
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn global_registry_holds_all_builtin_names() {
        let names: Vec<&str> = Registry::global().names().collect();
        assert_eq!(
            names,
            [
                "enum",
                "lognormal",
                "loguniform",
                "normal",
                "qlognormal",
                "qloguniform",
                "qnormal",
                "quniform",
                "randint",
                "uniform",
            ]
        );
    }

    #[test]
    fn create_builds_the_named_variant() {
        let sampler = Registry::global()
            .create(&spec(&[
                ("name", Value::from("normal")),
                ("mean", Value::Float(0.8)),
                ("std", Value::Float(0.3)),
            ]))
            .unwrap();
        assert_eq!(
            sampler,
            Distribution::Normal(Normal::new(1, 0.8, 0.3))
        );
    }

    #[test]
    fn create_rejects_unknown_names() {
        let err = Registry::global()
            .create(&spec(&[("name", Value::from("doesnotexist"))]))
            .unwrap_err();
        match err {
            Error::UnknownDistribution { name, known } => {
                assert_eq!(name, "doesnotexist");
                assert!(known.contains("uniform"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn create_requires_a_name_key() {
        let err = Registry::global()
            .create(&spec(&[("low", Value::Int(0))]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingName { .. }));

        // A non-string name is just as unusable.
        let err = Registry::global()
            .create(&spec(&[("name", Value::Int(3))]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingName { .. }));
    }

    #[test]
    fn create_surfaces_missing_arguments() {
        let err = Registry::global()
            .create(&spec(&[
                ("name", Value::from("normal")),
                ("mean", Value::Float(0.8)),
            ]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingArgument {
                distribution: "normal",
                field: "std",
            }
        ));
    }

    #[test]
    fn create_surfaces_bound_violations() {
        let err = Registry::global()
            .create(&spec(&[
                ("name", Value::from("loguniform")),
                ("low", Value::Float(-1.0)),
                ("high", Value::Float(1.0)),
            ]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLogBounds { .. }));
    }

    #[test]
    fn register_rejects_duplicate_names() {
        let uniform = *Registry::global().get("uniform").unwrap();
        let mut registry = Registry::new();
        registry.register(uniform).unwrap();
        assert!(matches!(
            registry.register(uniform).unwrap_err(),
            Error::DuplicateName("uniform")
        ));
    }
}
