//! The seam between the mixture engines and an equation-of-state package.

use uom::si::f64::{
    DynamicViscosity, MassDensity, MolarConcentration, MolarEnergy, MolarHeatCapacity, MolarMass,
    ThermalConductivity, ThermodynamicTemperature, Velocity,
};

use crate::{
    PropertyError, Species, StateSpec,
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

/// Trait for answering thermodynamic property queries one at a time.
///
/// Implementors resolve a `(StateSpec, Species)` pair against a fluid surface
/// and return a single dimensioned quantity, mirroring a CoolProp-style keyed
/// lookup. Engines treat any failure as unrecoverable and pass it through
/// unmodified.
///
/// Enthalpy, internal energy, and entropy are only comparable across species
/// after [`set_reference_state`](Self::set_reference_state) has aligned the
/// zero points. That alignment is a one-shot, provider-wide mutation: perform
/// it once, on the initialization path, before any other query.
pub trait PropertyProvider {
    /// Specific enthalpy at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn enthalpy(&self, spec: StateSpec, species: Species)
    -> Result<SpecificEnthalpy, PropertyError>;

    /// Specific internal energy at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn internal_energy(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<SpecificInternalEnergy, PropertyError>;

    /// Specific entropy at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn entropy(&self, spec: StateSpec, species: Species) -> Result<SpecificEntropy, PropertyError>;

    /// Mass density at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn density(&self, spec: StateSpec, species: Species) -> Result<MassDensity, PropertyError>;

    /// Molar density at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn molar_density(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<MolarConcentration, PropertyError>;

    /// Temperature at the given state.
    ///
    /// Useful when the state is pinned by pressure and quality and the
    /// saturation temperature itself is the answer.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn temperature(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<ThermodynamicTemperature, PropertyError>;

    /// Dynamic viscosity at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer; the
    /// spin-isomer surfaces often carry no transport correlations.
    fn viscosity(&self, spec: StateSpec, species: Species)
    -> Result<DynamicViscosity, PropertyError>;

    /// Thermal conductivity at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer; the
    /// spin-isomer surfaces often carry no transport correlations.
    fn thermal_conductivity(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<ThermalConductivity, PropertyError>;

    /// Speed of sound at the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn speed_of_sound(&self, spec: StateSpec, species: Species)
    -> Result<Velocity, PropertyError>;

    /// Molar mass of the species.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the provider cannot answer.
    fn molar_mass(&self, species: Species) -> Result<MolarMass, PropertyError>;

    /// Shifts the species' enthalpy and entropy zero points so that the state
    /// at `(anchor_temperature, anchor_molar_density)` reports exactly the
    /// given molar enthalpy and entropy.
    ///
    /// Repeating the call with the same inputs is harmless; interleaving it
    /// with property queries is not, since values read before and after the
    /// shift sit on different scales.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the species or anchor state is not
    /// supported.
    fn set_reference_state(
        &mut self,
        species: Species,
        anchor_temperature: ThermodynamicTemperature,
        anchor_molar_density: MolarConcentration,
        enthalpy: MolarEnergy,
        entropy: MolarHeatCapacity,
    ) -> Result<(), PropertyError>;
}
