//! Ortho/para hydrogen equilibrium and mixture properties.
//!
//! Molecular hydrogen is a blend of two nuclear-spin isomers. Their ratio at
//! thermal equilibrium follows a rotational partition-function series in
//! temperature ([`Equilibrium`]), and because the isomers interconvert only
//! catalytically, a real sample behaves as an ideal two-fluid mixture whose
//! extensive properties mix linearly by mass ([`MixtureModel`]).
//!
//! Mixture averaging is only physical once both isomer surfaces share one
//! energy scale; [`MixtureModel::new`] aligns the underlying property
//! provider's reference states before any query is possible.

mod carnot;
mod cooling;
mod equilibrium;
mod fraction;
mod mixture;
mod reference;

#[cfg(test)]
pub(crate) mod test_support;

pub use carnot::refrigeration_cop;
pub use cooling::{LiquefactionRates, available_cooling, liquefaction_rates};
pub use equilibrium::{EQUILIBRIUM_CEILING, Equilibrium, EquilibriumError};
pub use fraction::{FractionError, OrthoFraction};
pub use mixture::{MixtureError, MixtureModel, PropertyRecord};
pub use reference::ReferenceState;
