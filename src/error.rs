#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a declared required argument is still absent after
    /// defaults and caller-supplied values are applied.
    #[error("missing required argument '{field}' for distribution '{distribution}'")]
    MissingArgument {
        /// The declared name of the distribution being constructed.
        distribution: &'static str,
        /// The name of the missing field.
        field: &'static str,
    },

    /// Returned when an argument is present but its value has an unusable type.
    #[error("invalid argument '{field}' for distribution '{distribution}': expected {expected}")]
    InvalidArgument {
        /// The declared name of the distribution being constructed.
        distribution: &'static str,
        /// The name of the offending field.
        field: &'static str,
        /// A description of the expected value shape.
        expected: &'static str,
    },

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a log-style distribution has a negative lower bound.
    #[error("invalid log bounds: low ({low}) must be non-negative")]
    InvalidLogBounds {
        /// The lower bound value.
        low: f64,
    },

    /// Returned when an integer range has no values to draw from.
    #[error("empty integer range: upper bound ({0}) must be at least 1")]
    EmptyRange(i64),

    /// Returned when enum candidates are empty.
    #[error("enum candidates cannot be empty")]
    EmptyChoices,

    /// Returned when the factory is asked for a name no variant declares.
    #[error("unknown distribution '{name}' (known: {known})")]
    UnknownDistribution {
        /// The requested name.
        name: String,
        /// The set of registered names.
        known: String,
    },

    /// Returned when two variants declare the same name at registration.
    #[error("duplicate distribution name '{0}'")]
    DuplicateName(&'static str),

    /// Returned when a distribution mapping carries no usable `name` key.
    #[error("parameter spec is missing a distribution 'name' key: {spec}")]
    MissingName {
        /// The rendered offending specification.
        spec: String,
    },

    /// Returned when a parameter specification is neither a mapping nor a list.
    #[error("invalid parameter spec: expected a mapping or a list, got {spec}")]
    InvalidSpec {
        /// The rendered offending specification.
        spec: String,
    },

    /// Wraps a construction failure with the name of the offending parameter.
    #[error("parameter '{name}': {source}")]
    Parameter {
        /// The parameter name from the enclosing document.
        name: String,
        /// The underlying failure.
        source: Box<Error>,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
