//! Cooling available from ortho-para conversion, and what it buys a
//! liquefier.

use uom::si::{
    f64::{MassRate, Power, Pressure, ThermodynamicTemperature},
    pressure::pascal,
};

use orthopara_thermo::{PropertyProvider, Species, StateSpec, units::SpecificEnthalpy};

use crate::mixture::{MixtureError, MixtureModel};

const ONE_ATMOSPHERE_PA: f64 = 101_325.0;

/// Specific cooling available from catalyzing boil-off vapor.
///
/// Vapor leaving the liquid surface is frozen at the liquid's equilibrium
/// ortho fraction. Driving it to equilibrium at the warmer ullage
/// temperature is endothermic, so the enthalpy difference between the two
/// compositions is heat the vapor can absorb from whatever it shields.
///
/// # Errors
///
/// Propagates provider and equilibrium failures unmodified.
pub fn available_cooling<P: PropertyProvider>(
    model: &MixtureModel<P>,
    pressure: Pressure,
    ullage_temperature: ThermodynamicTemperature,
) -> Result<SpecificEnthalpy, MixtureError> {
    let liquid_temperature = model
        .provider()
        .temperature(StateSpec::saturated_liquid(pressure), Species::Parahydrogen)?;
    let frozen = model.equilibrium().ortho_fraction(liquid_temperature)?;
    let equilibrated = model.equilibrium().ortho_fraction(ullage_temperature)?;

    let spec = StateSpec::tp(ullage_temperature, pressure);
    Ok(model.enthalpy(spec, equilibrated)? - model.enthalpy(spec, frozen)?)
}

/// Liquefaction rates achievable with a fixed cooling power, with and
/// without an ortho-para catalyst in the liquefier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquefactionRates {
    /// Product leaves at the cold equilibrium composition; the conversion
    /// heat is removed in the plant.
    pub catalyzed: MassRate,
    /// Product keeps the feed composition; the conversion heat is released
    /// in storage later, as boil-off.
    pub uncatalyzed: MassRate,
}

/// Estimates liquefaction rates for a cryocooler of the given power.
///
/// Feed gas enters at nitrogen's one-atmosphere saturation temperature (a
/// liquid-nitrogen precooler) at its equilibrium composition; the product is
/// saturated liquid at the storage pressure, whose temperature is read from
/// the normal-hydrogen surface. Each rate is the cooling power over the
/// enthalpy drop from feed to product.
///
/// Catalyzing costs rate — the conversion heat must be pumped out too — but
/// the uncatalyzed product boils away as it slowly equilibrates in the tank.
///
/// # Errors
///
/// Propagates provider and equilibrium failures unmodified.
pub fn liquefaction_rates<P: PropertyProvider>(
    model: &MixtureModel<P>,
    cooling_power: Power,
    storage_pressure: Pressure,
) -> Result<LiquefactionRates, MixtureError> {
    let one_atmosphere = Pressure::new::<pascal>(ONE_ATMOSPHERE_PA);

    let feed_temperature = model
        .provider()
        .temperature(StateSpec::saturated_liquid(one_atmosphere), Species::Nitrogen)?;
    let feed_fraction = model.equilibrium().ortho_fraction(feed_temperature)?;
    let feed_enthalpy = model.enthalpy(
        StateSpec::tp(feed_temperature, storage_pressure),
        feed_fraction,
    )?;

    let product_temperature = model.provider().temperature(
        StateSpec::saturated_liquid(storage_pressure),
        Species::NormalHydrogen,
    )?;
    let product_fraction = model.equilibrium().ortho_fraction(product_temperature)?;

    let product_spec = StateSpec::saturated_liquid(storage_pressure);
    let catalyzed_product = model.enthalpy(product_spec, product_fraction)?;
    let uncatalyzed_product = model.enthalpy(product_spec, feed_fraction)?;

    Ok(LiquefactionRates {
        catalyzed: cooling_power / (feed_enthalpy - catalyzed_product),
        uncatalyzed: cooling_power / (feed_enthalpy - uncatalyzed_product),
    })
}
