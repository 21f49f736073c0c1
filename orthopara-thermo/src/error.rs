use thiserror::Error;

use crate::Species;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The provider has no surface for the requested species.
    #[error("species `{species}` is not supported by this provider")]
    UnsupportedSpecies { species: Species },

    /// The property is undefined at the given state.
    ///
    /// For example, a saturation query above the critical pressure, or
    /// transport properties on a spin-isomer surface that carries none.
    #[error("property `{property}` is undefined at the given state")]
    Undefined {
        property: &'static str,
        context: Option<String>,
    },

    /// The input values are invalid or inconsistent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {0}")]
    Calculation(String),
}
