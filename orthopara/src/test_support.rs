//! Test doubles shared by the engine tests.

use std::collections::HashMap;

use uom::si::{
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, MolarConcentration, MolarEnergy, MolarHeatCapacity,
        MolarMass, ThermalConductivity, ThermodynamicTemperature, Velocity,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_concentration::mole_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use orthopara_thermo::{
    PropertyError, PropertyProvider, Species, StateSpec,
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

/// One-atmosphere saturation temperature shared by the hydrogen surfaces, K.
pub(crate) const HYDROGEN_NBP_K: f64 = 20.369;

const NITROGEN_NBP_K: f64 = 77.355;

const CP_J_PER_KG_K: f64 = 10_000.0;
const CU_J_PER_KG_K: f64 = 7_500.0;

const HYDROGEN_MOLAR_MASS_KG_PER_MOL: f64 = 2.015_88e-3;
const NITROGEN_MOLAR_MASS_KG_PER_MOL: f64 = 28.013_4e-3;

/// Mass-based zero-point shift recorded by `set_reference_state`, SI units.
#[derive(Debug, Clone, Copy, Default)]
struct Offset {
    enthalpy: f64,
    entropy: f64,
}

/// Ideal-ish stand-in for an equation-of-state package, with faithful
/// reference-shift semantics.
///
/// Enthalpy rises linearly with temperature from the one-atmosphere
/// saturated liquid; entropy logarithmically. All species share the same
/// natural scale before any shift. Not physical, just monotone and
/// species-consistent, which is all the engine math needs.
#[derive(Debug, Default)]
pub(crate) struct LinearProvider {
    offsets: HashMap<Species, Offset>,
}

impl LinearProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn boiling_point(species: Species) -> f64 {
        match species {
            Species::Nitrogen => NITROGEN_NBP_K,
            _ => HYDROGEN_NBP_K,
        }
    }

    fn saturation_temperature(pressure_pa: f64, species: Species) -> f64 {
        Self::boiling_point(species) * (pressure_pa / 101_325.0).powf(0.125)
    }

    fn resolve_temperature(spec: StateSpec, species: Species) -> f64 {
        match spec {
            StateSpec::TemperaturePressure { temperature, .. }
            | StateSpec::SaturatedTemperature { temperature, .. } => temperature.get::<kelvin>(),
            StateSpec::SaturatedPressure { pressure, .. } => {
                Self::saturation_temperature(pressure.get::<pascal>(), species)
            }
        }
    }

    fn natural_enthalpy(t: f64, species: Species) -> f64 {
        CP_J_PER_KG_K * (t - Self::boiling_point(species))
    }

    fn natural_internal_energy(t: f64, species: Species) -> f64 {
        CU_J_PER_KG_K * (t - Self::boiling_point(species))
    }

    fn natural_entropy(t: f64, species: Species) -> f64 {
        CP_J_PER_KG_K * (t / Self::boiling_point(species)).ln()
    }

    fn offset(&self, species: Species) -> Offset {
        self.offsets.get(&species).copied().unwrap_or_default()
    }

    fn molar_mass_value(species: Species) -> f64 {
        match species {
            Species::Nitrogen => NITROGEN_MOLAR_MASS_KG_PER_MOL,
            _ => HYDROGEN_MOLAR_MASS_KG_PER_MOL,
        }
    }
}

impl PropertyProvider for LinearProvider {
    fn enthalpy(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let t = Self::resolve_temperature(spec, species);
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
            Self::natural_enthalpy(t, species) + self.offset(species).enthalpy,
        ))
    }

    fn internal_energy(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let t = Self::resolve_temperature(spec, species);
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(
            Self::natural_internal_energy(t, species) + self.offset(species).enthalpy,
        ))
    }

    fn entropy(&self, spec: StateSpec, species: Species) -> Result<SpecificEntropy, PropertyError> {
        let t = Self::resolve_temperature(spec, species);
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(
            Self::natural_entropy(t, species) + self.offset(species).entropy,
        ))
    }

    fn density(&self, _spec: StateSpec, _species: Species) -> Result<MassDensity, PropertyError> {
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(70.0))
    }

    fn molar_density(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<MolarConcentration, PropertyError> {
        Ok(MolarConcentration::new::<mole_per_cubic_meter>(35_000.0))
    }

    fn temperature(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        Ok(ThermodynamicTemperature::new::<kelvin>(
            Self::resolve_temperature(spec, species),
        ))
    }

    fn viscosity(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<DynamicViscosity, PropertyError> {
        match species {
            // The isomer surfaces carry no transport correlations, like the
            // real packages.
            Species::Parahydrogen | Species::Orthohydrogen => Err(PropertyError::Undefined {
                property: "viscosity",
                context: Some(species.to_string()),
            }),
            _ => {
                let t = Self::resolve_temperature(spec, species);
                Ok(DynamicViscosity::new::<pascal_second>(
                    9.0e-6 * (t / 300.0).powf(0.7),
                ))
            }
        }
    }

    fn thermal_conductivity(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<ThermalConductivity, PropertyError> {
        match species {
            Species::Parahydrogen | Species::Orthohydrogen => Err(PropertyError::Undefined {
                property: "thermal conductivity",
                context: Some(species.to_string()),
            }),
            _ => {
                let t = Self::resolve_temperature(spec, species);
                Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(
                    0.17 * (t / 300.0).powf(0.8),
                ))
            }
        }
    }

    fn speed_of_sound(
        &self,
        spec: StateSpec,
        species: Species,
    ) -> Result<Velocity, PropertyError> {
        let t = Self::resolve_temperature(spec, species);
        Ok(Velocity::new::<meter_per_second>(1_100.0 * (t / 300.0).sqrt()))
    }

    fn molar_mass(&self, species: Species) -> Result<MolarMass, PropertyError> {
        Ok(MolarMass::new::<kilogram_per_mole>(Self::molar_mass_value(
            species,
        )))
    }

    fn set_reference_state(
        &mut self,
        species: Species,
        anchor_temperature: ThermodynamicTemperature,
        _anchor_molar_density: MolarConcentration,
        enthalpy: MolarEnergy,
        entropy: MolarHeatCapacity,
    ) -> Result<(), PropertyError> {
        let molar_mass = self.molar_mass(species)?;
        let target_enthalpy = (enthalpy / molar_mass).get::<joule_per_kilogram>();
        let target_entropy = (entropy / molar_mass).get::<joule_per_kilogram_kelvin>();

        let anchor_t = anchor_temperature.get::<kelvin>();
        self.offsets.insert(
            species,
            Offset {
                enthalpy: target_enthalpy - Self::natural_enthalpy(anchor_t, species),
                entropy: target_entropy - Self::natural_entropy(anchor_t, species),
            },
        );
        Ok(())
    }
}

/// A provider whose isomer surfaces coincide everywhere, for exercising the
/// degenerate inversion paths. Its natural anchor values already equal the
/// requested targets, so `set_reference_state` records a zero shift.
#[derive(Debug, Default)]
pub(crate) struct DegenerateProvider;

impl DegenerateProvider {
    const ENTHALPY_J_PER_KG: f64 = 702_980.0;
    const ENTROPY_J_PER_KG_K: f64 = 18.269;
}

impl PropertyProvider for DegenerateProvider {
    fn enthalpy(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
            Self::ENTHALPY_J_PER_KG,
        ))
    }

    fn internal_energy(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(
            Self::ENTHALPY_J_PER_KG,
        ))
    }

    fn entropy(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<SpecificEntropy, PropertyError> {
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(
            Self::ENTROPY_J_PER_KG_K,
        ))
    }

    fn density(&self, _spec: StateSpec, _species: Species) -> Result<MassDensity, PropertyError> {
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(70.0))
    }

    fn molar_density(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<MolarConcentration, PropertyError> {
        Ok(MolarConcentration::new::<mole_per_cubic_meter>(35_000.0))
    }

    fn temperature(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        Ok(ThermodynamicTemperature::new::<kelvin>(HYDROGEN_NBP_K))
    }

    fn viscosity(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<DynamicViscosity, PropertyError> {
        Ok(DynamicViscosity::new::<pascal_second>(9.0e-6))
    }

    fn thermal_conductivity(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<ThermalConductivity, PropertyError> {
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(0.17))
    }

    fn speed_of_sound(
        &self,
        _spec: StateSpec,
        _species: Species,
    ) -> Result<Velocity, PropertyError> {
        Ok(Velocity::new::<meter_per_second>(1_100.0))
    }

    fn molar_mass(&self, _species: Species) -> Result<MolarMass, PropertyError> {
        Ok(MolarMass::new::<kilogram_per_mole>(2.015_88e-3))
    }

    fn set_reference_state(
        &mut self,
        _species: Species,
        _anchor_temperature: ThermodynamicTemperature,
        _anchor_molar_density: MolarConcentration,
        _enthalpy: MolarEnergy,
        _entropy: MolarHeatCapacity,
    ) -> Result<(), PropertyError> {
        Ok(())
    }
}
