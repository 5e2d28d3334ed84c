#![doc = include_str!("../README.md")]

mod distributions;
pub use distributions::{
    ContinuousDistribution, DiscreteDistribution, DoubleSampler, IntSampler, NormalInt,
    UniformDouble, UniformInt,
};
mod error;
pub use error::{Error, Result};
mod rngs;
pub use rngs::{default_source, seeded, DefaultSource};
mod support;
pub use support::{Kind, Support};
