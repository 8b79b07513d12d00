//! Distribution variants and the sampler surface.
//!
//! Each variant owns its declared argument [`Schema`] and a draw routine;
//! [`Distribution`] is the closed union over all of them. Samplers are
//! normally constructed by the [`Registry`](crate::Registry) from an
//! argument bag, draw through the process-wide random source via
//! [`Distribution::generate`], and render their exact construction through
//! [`Display`](core::fmt::Display).

use core::fmt;

use crate::args::{Args, Schema};
use crate::error::{Error, Result};
use crate::quantize::quantize;
use crate::rng;
use crate::value::{Samples, Value, fmt_list};

const DEFAULT_SIZE: &[(&str, Value)] = &[("size", Value::Int(1))];

/// A random integer in the range `[0, high)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandInt {
    /// Number of independent draws per generation.
    pub size: usize,
    /// Exclusive upper bound.
    pub high: i64,
}

impl RandInt {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "randint",
        required: &["size", "high"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a sampler of integers uniformly distributed in `[0, high)`.
    #[must_use]
    pub fn new(size: usize, high: i64) -> Self {
        Self { size, high }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            high: args.int("high")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Int(rng.i64(0..self.high))
    }
}

/// A uniform pick from an ordered candidate sequence, with replacement.
///
/// Draws preserve the candidates' element type: a choice over strings
/// yields strings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    /// Number of independent draws per generation.
    pub size: usize,
    /// The ordered candidate values.
    pub choices: Vec<Value>,
}

impl Choice {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "enum",
        required: &["enum"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a sampler picking uniformly from `choices`.
    #[must_use]
    pub fn new(size: usize, choices: Vec<Value>) -> Self {
        Self { size, choices }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            choices: args.list("enum")?.to_vec(),
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        self.choices[rng.usize(0..self.choices.len())].clone()
    }
}

/// A continuous uniform distribution over `[low, high]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uniform {
    /// Number of independent draws per generation.
    pub size: usize,
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl Uniform {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "uniform",
        required: &["size", "low", "high"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a uniform sampler over `[low, high]`.
    #[must_use]
    pub fn new(size: usize, low: f64, high: f64) -> Self {
        Self { size, low, high }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            low: args.float("low")?,
            high: args.float("high")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float(rng::f64_range(rng, self.low, self.high))
    }
}

/// A normal distribution with the given mean and standard deviation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal {
    /// Number of independent draws per generation.
    pub size: usize,
    /// The mean of the distribution.
    pub mean: f64,
    /// The standard deviation of the distribution.
    pub std: f64,
}

impl Normal {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "normal",
        required: &["size", "mean", "std"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a Gaussian sampler with the given mean and standard deviation.
    #[must_use]
    pub fn new(size: usize, mean: f64, std: f64) -> Self {
        Self { size, mean, std }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            mean: args.float("mean")?,
            std: args.float("std")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float(self.mean + self.std * rng::standard_normal(rng))
    }
}

/// A uniform draw over `[low, high]` that additionally requires `0 <= low`.
///
/// Draws exactly like [`Uniform`]; only the bound precondition differs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogUniform {
    /// Number of independent draws per generation.
    pub size: usize,
    /// Lower bound, non-negative.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl LogUniform {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "loguniform",
        required: &["size", "low", "high"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a log-uniform sampler over `[low, high]`.
    #[must_use]
    pub fn new(size: usize, low: f64, high: f64) -> Self {
        Self { size, low, high }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            low: args.float("low")?,
            high: args.float("high")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float(rng::f64_range(rng, self.low, self.high))
    }
}

/// A log-normal distribution with the given underlying mean and deviation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogNormal {
    /// Number of independent draws per generation.
    pub size: usize,
    /// Mean of the underlying normal distribution.
    pub mean: f64,
    /// Standard deviation of the underlying normal distribution.
    pub std: f64,
}

impl LogNormal {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "lognormal",
        required: &["size", "mean", "std"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a log-normal sampler with the given underlying parameters.
    #[must_use]
    pub fn new(size: usize, mean: f64, std: f64) -> Self {
        Self { size, mean, std }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            mean: args.float("mean")?,
            std: args.float("std")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float((self.mean + self.std * rng::standard_normal(rng)).exp())
    }
}

/// A uniform distribution quantized to multiples of `q`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QUniform {
    /// Number of independent draws per generation.
    pub size: usize,
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
    /// Quantization step.
    pub q: f64,
}

impl QUniform {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "quniform",
        required: &["size", "low", "high", "q"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a quantized uniform sampler over `[low, high]`.
    #[must_use]
    pub fn new(size: usize, low: f64, high: f64, q: f64) -> Self {
        Self { size, low, high, q }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            low: args.float("low")?,
            high: args.float("high")?,
            q: args.float("q")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float(quantize(self.q, rng::f64_range(rng, self.low, self.high)))
    }
}

/// A normal distribution quantized to multiples of `q`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QNormal {
    /// Number of independent draws per generation.
    pub size: usize,
    /// The mean of the distribution.
    pub mean: f64,
    /// The standard deviation of the distribution.
    pub std: f64,
    /// Quantization step.
    pub q: f64,
}

impl QNormal {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "qnormal",
        required: &["size", "mean", "std", "q"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a quantized Gaussian sampler.
    #[must_use]
    pub fn new(size: usize, mean: f64, std: f64, q: f64) -> Self {
        Self { size, mean, std, q }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            mean: args.float("mean")?,
            std: args.float("std")?,
            q: args.float("q")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float(quantize(
            self.q,
            self.mean + self.std * rng::standard_normal(rng),
        ))
    }
}

/// A log-uniform distribution quantized to multiples of `q`.
///
/// Requires `0 <= low <= high`, like [`LogUniform`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QLogUniform {
    /// Number of independent draws per generation.
    pub size: usize,
    /// Lower bound, non-negative.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
    /// Quantization step.
    pub q: f64,
}

impl QLogUniform {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "qloguniform",
        required: &["size", "low", "high", "q"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a quantized log-uniform sampler over `[low, high]`.
    #[must_use]
    pub fn new(size: usize, low: f64, high: f64, q: f64) -> Self {
        Self { size, low, high, q }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            low: args.float("low")?,
            high: args.float("high")?,
            q: args.float("q")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float(quantize(self.q, rng::f64_range(rng, self.low, self.high)))
    }
}

/// A log-normal distribution quantized to multiples of `q`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QLogNormal {
    /// Number of independent draws per generation.
    pub size: usize,
    /// Mean of the underlying normal distribution.
    pub mean: f64,
    /// Standard deviation of the underlying normal distribution.
    pub std: f64,
    /// Quantization step.
    pub q: f64,
}

impl QLogNormal {
    pub(crate) const SCHEMA: Schema = Schema {
        name: "qlognormal",
        required: &["size", "mean", "std", "q"],
        defaults: DEFAULT_SIZE,
    };

    /// Creates a quantized log-normal sampler.
    #[must_use]
    pub fn new(size: usize, mean: f64, std: f64, q: f64) -> Self {
        Self { size, mean, std, q }
    }

    pub(crate) fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            size: args.size("size")?,
            mean: args.float("mean")?,
            std: args.float("std")?,
            q: args.float("q")?,
        })
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        Value::Float(quantize(
            self.q,
            (self.mean + self.std * rng::standard_normal(rng)).exp(),
        ))
    }
}

/// The closed family of sampler variants.
///
/// # Examples
///
/// ```
/// use samplespec::{Distribution, Normal, Samples};
///
/// let sampler = Distribution::Normal(Normal::new(1, 0.0, 1.0));
/// assert_eq!(sampler.name(), "normal");
/// assert!(matches!(sampler.generate(), Samples::One(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// An integer in `[0, high)`.
    RandInt(RandInt),
    /// A pick from an explicit candidate sequence.
    Choice(Choice),
    /// A continuous uniform draw.
    Uniform(Uniform),
    /// A Gaussian draw.
    Normal(Normal),
    /// A uniform draw with log-style bound preconditions.
    LogUniform(LogUniform),
    /// A log-normal draw.
    LogNormal(LogNormal),
    /// A quantized uniform draw.
    QUniform(QUniform),
    /// A quantized Gaussian draw.
    QNormal(QNormal),
    /// A quantized log-uniform draw.
    QLogUniform(QLogUniform),
    /// A quantized log-normal draw.
    QLogNormal(QLogNormal),
}

fn check_bounds(low: f64, high: f64) -> Result<()> {
    if low > high {
        return Err(Error::InvalidBounds { low, high });
    }
    Ok(())
}

fn check_log_bounds(low: f64, high: f64) -> Result<()> {
    check_bounds(low, high)?;
    if low < 0.0 {
        return Err(Error::InvalidLogBounds { low });
    }
    Ok(())
}

impl Distribution {
    /// Returns the declared name this variant registers under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::RandInt(_) => RandInt::SCHEMA.name,
            Distribution::Choice(_) => Choice::SCHEMA.name,
            Distribution::Uniform(_) => Uniform::SCHEMA.name,
            Distribution::Normal(_) => Normal::SCHEMA.name,
            Distribution::LogUniform(_) => LogUniform::SCHEMA.name,
            Distribution::LogNormal(_) => LogNormal::SCHEMA.name,
            Distribution::QUniform(_) => QUniform::SCHEMA.name,
            Distribution::QNormal(_) => QNormal::SCHEMA.name,
            Distribution::QLogUniform(_) => QLogUniform::SCHEMA.name,
            Distribution::QLogNormal(_) => QLogNormal::SCHEMA.name,
        }
    }

    /// Returns the configured number of draws per generation.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Distribution::RandInt(d) => d.size,
            Distribution::Choice(d) => d.size,
            Distribution::Uniform(d) => d.size,
            Distribution::Normal(d) => d.size,
            Distribution::LogUniform(d) => d.size,
            Distribution::LogNormal(d) => d.size,
            Distribution::QUniform(d) => d.size,
            Distribution::QNormal(d) => d.size,
            Distribution::QLogUniform(d) => d.size,
            Distribution::QLogNormal(d) => d.size,
        }
    }

    /// Validates the configured invariants.
    ///
    /// Range-bounded variants require `low <= high`; log-style variants
    /// additionally require `0 <= low`. Candidate and integer-range
    /// variants must have at least one value to draw from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`], [`Error::InvalidLogBounds`],
    /// [`Error::EmptyChoices`], or [`Error::EmptyRange`] accordingly.
    pub fn validate(&self) -> Result<()> {
        match self {
            Distribution::RandInt(d) => {
                if d.high < 1 {
                    return Err(Error::EmptyRange(d.high));
                }
            }
            Distribution::Choice(d) => {
                if d.choices.is_empty() {
                    return Err(Error::EmptyChoices);
                }
            }
            Distribution::Uniform(d) => check_bounds(d.low, d.high)?,
            Distribution::QUniform(d) => check_bounds(d.low, d.high)?,
            Distribution::LogUniform(d) => check_log_bounds(d.low, d.high)?,
            Distribution::QLogUniform(d) => check_log_bounds(d.low, d.high)?,
            Distribution::Normal(_)
            | Distribution::LogNormal(_)
            | Distribution::QNormal(_)
            | Distribution::QLogNormal(_) => {}
        }
        Ok(())
    }

    /// Draws from the process-wide random source.
    ///
    /// A sampler with `size == 1` yields [`Samples::One`]; any other size
    /// yields [`Samples::Many`] with exactly `size` elements. Call
    /// [`seed`](crate::seed) first for reproducible sequences.
    #[must_use]
    pub fn generate(&self) -> Samples {
        let mut rng = rng::global().lock();
        self.generate_with(&mut rng)
    }

    /// Draws from an explicit random source.
    ///
    /// Useful when reproducibility must not depend on the process-wide
    /// generator, e.g. when several samplers share one seeded `fastrand::Rng`.
    #[must_use]
    pub fn generate_with(&self, rng: &mut fastrand::Rng) -> Samples {
        if self.size() == 1 {
            Samples::One(self.draw(rng))
        } else {
            Samples::Many((0..self.size()).map(|_| self.draw(rng)).collect())
        }
    }

    fn draw(&self, rng: &mut fastrand::Rng) -> Value {
        match self {
            Distribution::RandInt(d) => d.draw(rng),
            Distribution::Choice(d) => d.draw(rng),
            Distribution::Uniform(d) => d.draw(rng),
            Distribution::Normal(d) => d.draw(rng),
            Distribution::LogUniform(d) => d.draw(rng),
            Distribution::LogNormal(d) => d.draw(rng),
            Distribution::QUniform(d) => d.draw(rng),
            Distribution::QNormal(d) => d.draw(rng),
            Distribution::QLogUniform(d) => d.draw(rng),
            Distribution::QLogNormal(d) => d.draw(rng),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::RandInt(d) => {
                write!(f, "RandInt(size: {}, high: {})", d.size, d.high)
            }
            Distribution::Choice(d) => {
                write!(f, "Choice(size: {}, choices: ", d.size)?;
                fmt_list(f, &d.choices)?;
                write!(f, ")")
            }
            Distribution::Uniform(d) => {
                write!(f, "Uniform(size: {}, low: {}, high: {})", d.size, d.low, d.high)
            }
            Distribution::Normal(d) => {
                write!(f, "Normal(size: {}, mean: {}, std: {})", d.size, d.mean, d.std)
            }
            Distribution::LogUniform(d) => {
                write!(
                    f,
                    "LogUniform(size: {}, low: {}, high: {})",
                    d.size, d.low, d.high
                )
            }
            Distribution::LogNormal(d) => {
                write!(
                    f,
                    "LogNormal(size: {}, mean: {}, std: {})",
                    d.size, d.mean, d.std
                )
            }
            Distribution::QUniform(d) => {
                write!(
                    f,
                    "QUniform(size: {}, low: {}, high: {}, q: {})",
                    d.size, d.low, d.high, d.q
                )
            }
            Distribution::QNormal(d) => {
                write!(
                    f,
                    "QNormal(size: {}, mean: {}, std: {}, q: {})",
                    d.size, d.mean, d.std, d.q
                )
            }
            Distribution::QLogUniform(d) => {
                write!(
                    f,
                    "QLogUniform(size: {}, low: {}, high: {}, q: {})",
                    d.size, d.low, d.high, d.q
                )
            }
            Distribution::QLogNormal(d) => {
                write!(
                    f,
                    "QLogNormal(size: {}, mean: {}, std: {}, q: {})",
                    d.size, d.mean, d.std, d.q
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_one_yields_a_scalar() {
        let mut rng = fastrand::Rng::with_seed(1);
        let sampler = Distribution::Uniform(Uniform::new(1, 0.0, 1.0));
        assert!(matches!(
            sampler.generate_with(&mut rng),
            Samples::One(Value::Float(_))
        ));
    }

    #[test]
    fn bulk_size_yields_the_full_array() {
        let mut rng = fastrand::Rng::with_seed(1);
        let sampler = Distribution::Uniform(Uniform::new(8, 0.0, 1.0));
        let samples = sampler.generate_with(&mut rng);
        assert_eq!(samples.len(), 8);
        assert!(samples.many().is_some());
    }

    #[test]
    fn randint_draws_below_the_upper_bound() {
        let mut rng = fastrand::Rng::with_seed(2);
        let sampler = Distribution::RandInt(RandInt::new(100, 5));
        for value in sampler.generate_with(&mut rng).into_vec() {
            match value {
                Value::Int(v) => assert!((0..5).contains(&v)),
                other => panic!("expected an integer draw, got {other:?}"),
            }
        }
    }

    #[test]
    fn choice_preserves_element_type() {
        let mut rng = fastrand::Rng::with_seed(3);
        let choices = vec![Value::from("sgd"), Value::from("adam")];
        let sampler = Distribution::Choice(Choice::new(20, choices.clone()));
        for value in sampler.generate_with(&mut rng).into_vec() {
            assert!(choices.contains(&value));
        }
    }

    #[test]
    fn uniform_draws_stay_in_bounds() {
        let mut rng = fastrand::Rng::with_seed(4);
        let sampler = Distribution::Uniform(Uniform::new(200, -1.5, 2.5));
        for value in sampler.generate_with(&mut rng).into_vec() {
            let v = value.as_f64().unwrap();
            assert!((-1.5..=2.5).contains(&v));
        }
    }

    #[test]
    fn loguniform_draws_like_uniform() {
        let mut rng = fastrand::Rng::with_seed(4);
        let sampler = Distribution::LogUniform(LogUniform::new(200, 0.1, 0.9));
        for value in sampler.generate_with(&mut rng).into_vec() {
            let v = value.as_f64().unwrap();
            assert!((0.1..=0.9).contains(&v));
        }
    }

    #[test]
    fn lognormal_draws_are_positive() {
        let mut rng = fastrand::Rng::with_seed(5);
        let sampler = Distribution::LogNormal(LogNormal::new(100, 0.0, 0.5));
        for value in sampler.generate_with(&mut rng).into_vec() {
            assert!(value.as_f64().unwrap() > 0.0);
        }
    }

    #[test]
    fn quantized_draws_land_on_the_grid() {
        let mut rng = fastrand::Rng::with_seed(6);
        let sampler = Distribution::QUniform(QUniform::new(100, 0.0, 10.0, 0.5));
        for value in sampler.generate_with(&mut rng).into_vec() {
            let v = value.as_f64().unwrap();
            assert!(((v / 0.5).round() - v / 0.5).abs() < 1e-9, "{v} off-grid");
        }
    }

    #[test]
    fn qnormal_draws_land_on_the_grid() {
        let mut rng = fastrand::Rng::with_seed(7);
        let sampler = Distribution::QNormal(QNormal::new(100, 5.0, 2.0, 1.0));
        for value in sampler.generate_with(&mut rng).into_vec() {
            let v = value.as_f64().unwrap();
            assert!((v.round() - v).abs() < 1e-9);
        }
    }

    #[test]
    fn validate_accepts_ordered_log_bounds() {
        let sampler = Distribution::LogUniform(LogUniform::new(1, 0.0, 1.0));
        assert!(sampler.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let sampler = Distribution::LogUniform(LogUniform::new(1, 2.0, 1.0));
        assert!(matches!(
            sampler.validate().unwrap_err(),
            Error::InvalidBounds { .. }
        ));

        let sampler = Distribution::Uniform(Uniform::new(1, 2.0, 1.0));
        assert!(matches!(
            sampler.validate().unwrap_err(),
            Error::InvalidBounds { .. }
        ));
    }

    #[test]
    fn validate_rejects_negative_log_lower_bound() {
        let sampler = Distribution::QLogUniform(QLogUniform::new(1, -0.5, 1.0, 0.1));
        assert!(matches!(
            sampler.validate().unwrap_err(),
            Error::InvalidLogBounds { .. }
        ));
    }

    #[test]
    fn validate_rejects_empty_candidates() {
        let sampler = Distribution::Choice(Choice::new(1, vec![]));
        assert!(matches!(
            sampler.validate().unwrap_err(),
            Error::EmptyChoices
        ));

        let sampler = Distribution::RandInt(RandInt::new(1, 0));
        assert!(matches!(
            sampler.validate().unwrap_err(),
            Error::EmptyRange(0)
        ));
    }

    #[test]
    fn display_reproduces_the_construction() {
        let sampler = Distribution::Normal(Normal::new(1, 0.8, 0.3));
        assert_eq!(sampler.to_string(), "Normal(size: 1, mean: 0.8, std: 0.3)");

        let sampler = Distribution::Choice(Choice::new(1, vec![Value::Int(1), Value::from("a")]));
        assert_eq!(sampler.to_string(), "Choice(size: 1, choices: [1, \"a\"])");
    }
}
