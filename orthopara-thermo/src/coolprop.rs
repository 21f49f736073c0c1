//! CoolProp-backed property provider.
//!
//! Enabled with the `coolprop` feature. Each species keeps its own
//! `AbstractState` behind a mutex. Reference-state shifts are applied by this
//! wrapper as mass-based offsets on top of CoolProp's native zero points, so
//! the shift survives state updates and never touches CoolProp's global
//! configuration.

mod error;

use std::{collections::HashMap, sync::Mutex};

use rfluids::{
    io::{FluidInputPair, FluidParam, FluidTrivialParam},
    native::AbstractState,
};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{
        DynamicViscosity, MassDensity, MolarConcentration, MolarEnergy, MolarHeatCapacity,
        MolarMass, ThermalConductivity, ThermodynamicTemperature, Velocity,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_concentration::mole_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    PropertyError, PropertyProvider, Species, StateSpec,
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

pub use error::CoolPropError;

/// The CoolProp backend used for every surface.
const BACKEND: &str = "HEOS";

/// Mass-based zero-point shift for one species, SI units.
#[derive(Debug, Clone, Copy, Default)]
struct Offset {
    enthalpy: f64,
    entropy: f64,
}

/// A property provider backed by CoolProp.
pub struct CoolProp {
    states: HashMap<Species, Mutex<AbstractState>>,
    offsets: HashMap<Species, Offset>,
}

impl CoolProp {
    /// Constructs a provider with an `AbstractState` for every known species.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if any surface cannot be created.
    pub fn new() -> Result<Self, CoolPropError> {
        let mut states = HashMap::new();
        for species in Species::ALL {
            let state = AbstractState::new(BACKEND, species.provider_name())?;
            states.insert(species, Mutex::new(state));
        }
        Ok(Self {
            states,
            offsets: HashMap::new(),
        })
    }

    fn offset(&self, species: Species) -> Offset {
        self.offsets.get(&species).copied().unwrap_or_default()
    }

    /// Locks the species' `AbstractState`, updates it to `spec`, and reads
    /// one keyed output.
    fn keyed_output(
        &self,
        spec: StateSpec,
        species: Species,
        param: FluidParam,
    ) -> Result<f64, PropertyError> {
        let mutex = self
            .states
            .get(&species)
            .ok_or(PropertyError::UnsupportedSpecies { species })?;

        let inner = || -> Result<f64, CoolPropError> {
            let mut state = mutex.lock()?;
            let (pair, value_1, value_2) = input_pair(spec);
            state.update(pair, value_1, value_2)?;
            Ok(state.keyed_output(param)?)
        };

        Ok(inner()?)
    }
}

/// Maps a state specification to a CoolProp input pair and its two values.
fn input_pair(spec: StateSpec) -> (FluidInputPair, f64, f64) {
    match spec {
        StateSpec::TemperaturePressure {
            temperature,
            pressure,
        } => (
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        ),
        StateSpec::SaturatedPressure { quality, pressure } => (
            FluidInputPair::PQ,
            pressure.get::<pascal>(),
            quality.value(),
        ),
        StateSpec::SaturatedTemperature {
            quality,
            temperature,
        } => (
            FluidInputPair::QT,
            quality.value(),
            temperature.get::<kelvin>(),
        ),
    }
}

impl PropertyProvider for CoolProp {
    fn enthalpy(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::Hmass)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
            raw + self.offset(species).enthalpy,
        ))
    }

    fn internal_energy(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        // A zero-point shift in enthalpy moves internal energy by the same
        // amount: u = h − P·v and the shift leaves P·v untouched.
        let raw = self.keyed_output(spec, species, FluidParam::Umass)?;
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(
            raw + self.offset(species).enthalpy,
        ))
    }

    fn entropy(&self, spec: StateSpec, species: Species) -> Result<SpecificEntropy, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::Smass)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(
            raw + self.offset(species).entropy,
        ))
    }

    fn density(&self, spec: StateSpec, species: Species) -> Result<MassDensity, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::DMass)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(raw))
    }

    fn molar_density(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<MolarConcentration, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::DMolar)?;
        Ok(MolarConcentration::new::<mole_per_cubic_meter>(raw))
    }

    fn temperature(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::T)?;
        Ok(ThermodynamicTemperature::new::<kelvin>(raw))
    }

    fn viscosity(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<DynamicViscosity, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::DynamicViscosity)?;
        Ok(DynamicViscosity::new::<uom::si::dynamic_viscosity::pascal_second>(raw))
    }

    fn thermal_conductivity(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<ThermalConductivity, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::Conductivity)?;
        Ok(ThermalConductivity::new::<uom::si::thermal_conductivity::watt_per_meter_kelvin>(raw))
    }

    fn speed_of_sound(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<Velocity, PropertyError> {
        let raw = self.keyed_output(spec, species, FluidParam::SoundSpeed)?;
        Ok(Velocity::new::<uom::si::velocity::meter_per_second>(raw))
    }

    fn molar_mass(&self, species: Species) -> Result<MolarMass, PropertyError> {
        let mutex = self
            .states
            .get(&species)
            .ok_or(PropertyError::UnsupportedSpecies { species })?;

        let inner = || -> Result<f64, CoolPropError> {
            let state = mutex.lock()?;
            Ok(state.keyed_output(FluidTrivialParam::MolarMass)?)
        };

        Ok(MolarMass::new::<kilogram_per_mole>(inner()?))
    }

    fn set_reference_state(
        &mut self,
        species: Species,
        anchor_temperature: ThermodynamicTemperature,
        anchor_molar_density: MolarConcentration,
        enthalpy: MolarEnergy,
        entropy: MolarHeatCapacity,
    ) -> Result<(), PropertyError> {
        let molar_mass = self.molar_mass(species)?;
        let target_enthalpy = enthalpy / molar_mass;
        let target_entropy = entropy / molar_mass;

        // Natural values at the anchor, read with any previous shift removed
        // so that repeating the call is idempotent.
        let mutex = self
            .states
            .get(&species)
            .ok_or(PropertyError::UnsupportedSpecies { species })?;

        let inner = || -> Result<(f64, f64), CoolPropError> {
            let mut state = mutex.lock()?;
            state.update(
                FluidInputPair::DMolarT,
                anchor_molar_density.get::<mole_per_cubic_meter>(),
                anchor_temperature.get::<kelvin>(),
            )?;
            let natural_enthalpy = state.keyed_output(FluidParam::Hmass)?;
            let natural_entropy = state.keyed_output(FluidParam::Smass)?;
            Ok((natural_enthalpy, natural_entropy))
        };
        let (natural_enthalpy, natural_entropy) = inner()?;

        self.offsets.insert(
            species,
            Offset {
                enthalpy: target_enthalpy.get::<joule_per_kilogram>() - natural_enthalpy,
                entropy: target_entropy.get::<joule_per_kilogram_kelvin>() - natural_entropy,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Pressure, molar_mass::gram_per_mole};

    #[test]
    fn hydrogen_molar_mass_matches_expected() {
        let provider = CoolProp::new().unwrap();
        let molar_mass = provider.molar_mass(Species::Parahydrogen).unwrap();
        assert_relative_eq!(molar_mass.get::<gram_per_mole>(), 2.01588, epsilon = 1e-3);
    }

    #[test]
    fn parahydrogen_boils_near_twenty_kelvin() {
        let provider = CoolProp::new().unwrap();
        let spec = StateSpec::saturated_liquid(Pressure::new::<pascal>(101_325.0));
        let temperature = provider.temperature(spec, Species::Parahydrogen).unwrap();
        assert_relative_eq!(temperature.get::<kelvin>(), 20.3, epsilon = 0.2);
    }
}
