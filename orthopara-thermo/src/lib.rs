//! Thermodynamic property access for ortho/para hydrogen modeling.
//!
//! The spin isomers of hydrogen are served by equation-of-state packages as
//! separate fluid surfaces. This crate names those surfaces ([`Species`]),
//! describes where on a surface a property is wanted ([`StateSpec`]), and
//! defines the [`PropertyProvider`] seam the mixture engines query through.
//!
//! A CoolProp-backed provider is available behind the `coolprop` feature.

mod error;
mod species;
mod state;

pub mod provider;
pub mod units;

#[cfg(feature = "coolprop")]
pub mod coolprop;

pub use error::PropertyError;
pub use provider::PropertyProvider;
pub use species::Species;
pub use state::{Quality, StateSpec};
