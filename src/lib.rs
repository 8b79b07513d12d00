#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Declarative random-sampling parameter specifications.
//!
//! A parameter is described by a small declarative spec — an explicit named
//! distribution with arguments, or a shorthand (a candidate list, or a
//! two-element numeric range) — and parsed into a validated,
//! self-documenting sampler that draws one or many values on demand.
//!
//! # Getting Started
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use samplespec::prelude::*;
//!
//! samplespec::seed(42);
//!
//! let mut params = BTreeMap::new();
//! // A two-element integer list is an inclusive integer range.
//! params.insert(
//!     "epochs".to_string(),
//!     Value::List(vec![Value::Int(10), Value::Int(90)]),
//! );
//! // Any other list is a set of candidates.
//! params.insert(
//!     "activation".to_string(),
//!     Value::List(vec![Value::from("relu"), Value::from("tanh")]),
//! );
//! // A mapping names the distribution explicitly.
//! let mut momentum = BTreeMap::new();
//! momentum.insert("name".to_string(), Value::from("normal"));
//! momentum.insert("mean".to_string(), Value::from(0.8));
//! momentum.insert("std".to_string(), Value::from(0.3));
//! params.insert("momentum".to_string(), Value::Map(momentum));
//!
//! let samplers = parse_parameters(&params)?;
//! for (name, sampler) in &samplers {
//!     match sampler.generate() {
//!         Samples::One(value) => println!("{name} = {value}"),
//!         Samples::Many(values) => println!("{name} = {values:?}"),
//!     }
//! }
//! # Ok::<(), samplespec::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Value`] | Dynamic spec/argument/draw value: the already-parsed native form of a specification. |
//! | [`Distribution`] | The closed family of sampler variants, each exposing [`generate`](Distribution::generate). |
//! | [`Registry`] | Name-keyed, duplicate-checked index of variants; builds samplers from `{name, args...}` mappings. |
//! | [`Schema`] / [`Args`] | Per-variant argument contract and the generic validating argument bag. |
//! | [`Samples`] | Draw result: a bare scalar for `size == 1`, the full array otherwise. |
//!
//! Sampling is reproducible after [`seed`]: the crate draws from one
//! process-wide generator, which is its only shared mutable state.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Value`], [`Samples`], and the distribution types | off |
//! | `tracing` | Structured log events at registry initialization, construction, and reseeding | off |

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod args;
mod distribution;
mod error;
mod parser;
mod quantize;
mod registry;
mod rng;
mod value;

pub use args::{Args, Schema};
pub use distribution::{
    Choice, Distribution, LogNormal, LogUniform, Normal, QLogNormal, QLogUniform, QNormal,
    QUniform, RandInt, Uniform,
};
pub use error::{Error, Result};
pub use parser::{parse_parameter, parse_parameter_in, parse_parameters, parse_parameters_in};
pub use quantize::{quantize, quantize_slice};
pub use registry::{Registry, Variant};
pub use rng::seed;
pub use value::{Samples, Value};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use samplespec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args::{Args, Schema};
    pub use crate::distribution::{
        Choice, Distribution, LogNormal, LogUniform, Normal, QLogNormal, QLogUniform, QNormal,
        QUniform, RandInt, Uniform,
    };
    pub use crate::error::{Error, Result};
    pub use crate::parser::{parse_parameter, parse_parameters};
    pub use crate::quantize::quantize;
    pub use crate::registry::{Registry, Variant};
    pub use crate::rng::seed;
    pub use crate::value::{Samples, Value};
}
