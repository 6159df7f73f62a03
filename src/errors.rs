//! Signaled conditions for the visualizer core
//!
//! This module defines [`VisualizerError`], the conditions the core reports to
//! the presentation layer. Running a generator to exhaustion is not an error:
//! it is ordinary control flow that moves the controller to `Finished`.
//!
//! Every variant leaves the controller state untouched; the UI is responsible
//! for showing the message to the user.

use thiserror::Error;

/// Result type alias for fallible core operations.
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Conditions signaled by the visualizer core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisualizerError {
    /// The algorithm selection does not name a known algorithm.
    #[error("Unknown algorithm: {name}")]
    InvalidAlgorithm { name: String },

    /// A configuration value typed by the user could not be parsed.
    #[error("Invalid {field}: '{input}' is not a number")]
    InvalidConfiguration { field: &'static str, input: String },
}

impl VisualizerError {
    pub fn invalid_algorithm(name: impl Into<String>) -> Self {
        VisualizerError::InvalidAlgorithm { name: name.into() }
    }

    pub fn invalid_configuration(field: &'static str, input: impl Into<String>) -> Self {
        VisualizerError::InvalidConfiguration {
            field,
            input: input.into(),
        }
    }
}
