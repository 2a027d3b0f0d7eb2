//! Configuration for the validation engine.

pub mod validation_config;

pub use validation_config::{DurbinWatsonPolicy, NormalityInput, ValidationConfig};
