use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MolarConcentration, Pressure, ThermodynamicTemperature},
    pressure::pascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
};

use orthopara_thermo::{
    PropertyError, PropertyProvider, Species, StateSpec,
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Pressure of the shared anchor: one standard atmosphere, Pa.
const REFERENCE_PRESSURE_PA: f64 = 101_325.0;

/// Enthalpy of saturated-liquid orthohydrogen at the normal boiling point,
/// kJ/kg above parahydrogen's zero there. This is the latent heat of
/// ortho→para conversion at the boiling point.
const ORTHO_ANCHOR_ENTHALPY_KJ_PER_KG: f64 = 702.98;

/// Entropy of saturated-liquid orthohydrogen at the normal boiling point,
/// kJ/(kg·K) above parahydrogen's zero there.
const ORTHO_ANCHOR_ENTROPY_KJ_PER_KG_K: f64 = 0.018269;

/// Ortho share of the normal room-temperature blend.
const NORMAL_ORTHO_SHARE: f64 = 0.75;

/// Record of the reference-state alignment applied to a provider.
///
/// Equation-of-state packages zero each hydrogen surface independently, which
/// silently discards the conversion enthalpy between the isomers: a
/// mass-weighted average of independently-zeroed values is meaningless.
/// Parahydrogen keeps its native zero (saturated liquid at one atmosphere);
/// orthohydrogen is shifted so that its saturated liquid at the same pressure
/// sits exactly one conversion latent heat higher. After that, mixing
/// linearly by mass accounts for the conversion energy automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceState {
    /// Anchor pressure shared by both isomers.
    pub pressure: Pressure,
    /// Parahydrogen sat-liquid enthalpy as the provider reports it (≈ 0).
    pub para_enthalpy: SpecificEnthalpy,
    /// Parahydrogen sat-liquid entropy as the provider reports it (≈ 0).
    pub para_entropy: SpecificEntropy,
    /// Orthohydrogen normal-boiling-point temperature.
    pub ortho_anchor_temperature: ThermodynamicTemperature,
    /// Orthohydrogen sat-liquid molar density at the anchor.
    pub ortho_anchor_molar_density: MolarConcentration,
}

impl ReferenceState {
    /// Aligns the provider's orthohydrogen zero point with parahydrogen's.
    ///
    /// Call exactly once per provider, before any mixture query; values read
    /// across the shift sit on different scales.
    /// [`MixtureModel::new`](crate::MixtureModel::new) does this for you.
    ///
    /// The mass-based anchor constants are converted to the molar units the
    /// provider interface requires using the provider's own molar mass.
    ///
    /// # Errors
    ///
    /// Propagates any provider failure unmodified; a rejected configuration
    /// is unrecoverable.
    pub fn configure<P: PropertyProvider>(provider: &mut P) -> Result<Self, PropertyError> {
        let pressure = Pressure::new::<pascal>(REFERENCE_PRESSURE_PA);
        let anchor = StateSpec::saturated_liquid(pressure);

        let para_enthalpy = provider.enthalpy(anchor, Species::Parahydrogen)?;
        let para_entropy = provider.entropy(anchor, Species::Parahydrogen)?;

        let ortho_anchor_temperature = provider.temperature(anchor, Species::Orthohydrogen)?;
        let ortho_anchor_molar_density = provider.molar_density(anchor, Species::Orthohydrogen)?;
        let molar_mass = provider.molar_mass(Species::Orthohydrogen)?;

        provider.set_reference_state(
            Species::Orthohydrogen,
            ortho_anchor_temperature,
            ortho_anchor_molar_density,
            SpecificEnthalpy::new::<kilojoule_per_kilogram>(ORTHO_ANCHOR_ENTHALPY_KJ_PER_KG)
                * molar_mass,
            SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(ORTHO_ANCHOR_ENTROPY_KJ_PER_KG_K)
                * molar_mass,
        )?;

        Ok(Self {
            pressure,
            para_enthalpy,
            para_entropy,
            ortho_anchor_temperature,
            ortho_anchor_molar_density,
        })
    }

    /// Applies the matching alignment to the normal-mixture surface.
    ///
    /// Normal hydrogen is three parts ortho, so its anchor targets are the
    /// ortho targets scaled by 3/4. Only needed when the normal surface is
    /// queried for energies alongside the isomers, e.g. for tabulation.
    ///
    /// # Errors
    ///
    /// Propagates any provider failure unmodified.
    pub fn configure_normal_hydrogen<P: PropertyProvider>(
        provider: &mut P,
    ) -> Result<(), PropertyError> {
        let pressure = Pressure::new::<pascal>(REFERENCE_PRESSURE_PA);
        let anchor = StateSpec::saturated_liquid(pressure);

        let anchor_temperature = provider.temperature(anchor, Species::NormalHydrogen)?;
        let anchor_molar_density = provider.molar_density(anchor, Species::NormalHydrogen)?;
        let molar_mass = provider.molar_mass(Species::NormalHydrogen)?;

        provider.set_reference_state(
            Species::NormalHydrogen,
            anchor_temperature,
            anchor_molar_density,
            SpecificEnthalpy::new::<kilojoule_per_kilogram>(
                ORTHO_ANCHOR_ENTHALPY_KJ_PER_KG * NORMAL_ORTHO_SHARE,
            ) * molar_mass,
            SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(
                ORTHO_ANCHOR_ENTROPY_KJ_PER_KG_K * NORMAL_ORTHO_SHARE,
            ) * molar_mass,
        )
    }
}
