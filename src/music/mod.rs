//! Pitch names and validated frequencies.

pub mod core;
pub mod frequency;

pub use self::core::{Note, ParseError, Pitch};
pub use frequency::{Frequency, FrequencyBand};
