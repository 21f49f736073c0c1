use orthopara_solve::bisection::{self, Config, Status};
use thiserror::Error;
use uom::si::{
    f64::{DynamicViscosity, Pressure, ThermalConductivity, ThermodynamicTemperature, Velocity},
    thermodynamic_temperature::kelvin,
};

use orthopara_thermo::{
    PropertyError, PropertyProvider, Species, StateSpec,
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy},
};

use crate::{
    equilibrium::{Equilibrium, EquilibriumError},
    fraction::OrthoFraction,
    reference::ReferenceState,
};

/// Default temperature bracket for the catalysis solves, kelvin.
///
/// 14 K sits just above hydrogen's triple point; by 500 K the ortho fraction
/// has long stopped moving.
const DEFAULT_CATALYSIS_BRACKET_K: [f64; 2] = [14.0, 500.0];

/// Convergence tolerance on enthalpy and internal-energy residuals, J/kg.
const PROPERTY_TOLERANCE_J_PER_KG: f64 = 1e-6;

const MAX_BISECTION_ITERS: usize = 1000;

/// Errors from mixture property evaluation.
#[derive(Debug, Error)]
pub enum MixtureError {
    /// The property provider failed; passed through unmodified.
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// Equilibrium evaluation failed inside a catalysis solve.
    #[error(transparent)]
    Equilibrium(#[from] EquilibriumError),

    #[error(
        "orthohydrogen and parahydrogen report the same {property} at this state; \
         the ortho fraction is undefined"
    )]
    DivisionUndefined { property: &'static str },

    #[error("derived ortho fraction {value} lies outside [0, 1]")]
    FractionOutOfRange { value: f64 },

    #[error("bisection did not converge within {iterations} iterations")]
    DidNotConverge { iterations: usize },

    #[error(transparent)]
    Bisection(#[from] bisection::Error),
}

/// A bundled row of mixture properties at one state, for tabulation.
///
/// Energies are mass-weighted over the isomer surfaces; transport properties
/// and speed of sound come from the normal-hydrogen surface, which is the
/// only one carrying those correlations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRecord {
    pub enthalpy: SpecificEnthalpy,
    pub internal_energy: SpecificInternalEnergy,
    pub entropy: SpecificEntropy,
    pub viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    pub speed_of_sound: Velocity,
}

/// Mass-weighted ortho/para mixture properties over a property provider.
///
/// Ortho and para hydrogen interconvert only catalytically, so on any
/// shorter timescale a sample is an ideal blend of two distinct fluids and
/// its extensive properties mix linearly by mass fraction.
///
/// Construction aligns the provider's reference states (see
/// [`ReferenceState::configure`]) before taking ownership, so a model can
/// only ever be queried with consistent ortho and para energy scales.
#[derive(Debug)]
pub struct MixtureModel<P> {
    provider: P,
    reference: ReferenceState,
    equilibrium: Equilibrium,
    catalysis_bracket: [f64; 2],
}

impl<P: PropertyProvider> MixtureModel<P> {
    /// Takes ownership of the provider and aligns its reference states.
    ///
    /// # Errors
    ///
    /// Propagates any provider failure during configuration unmodified.
    pub fn new(mut provider: P) -> Result<Self, PropertyError> {
        let reference = ReferenceState::configure(&mut provider)?;
        Ok(Self {
            provider,
            reference,
            equilibrium: Equilibrium::default(),
            catalysis_bracket: DEFAULT_CATALYSIS_BRACKET_K,
        })
    }

    /// The reference alignment recorded at construction.
    #[must_use]
    pub fn reference(&self) -> &ReferenceState {
        &self.reference
    }

    /// Read-only access to the underlying provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The equilibrium engine used by the catalysis solves.
    #[must_use]
    pub fn equilibrium(&self) -> &Equilibrium {
        &self.equilibrium
    }

    /// Replaces the temperature bracket used by the catalysis solves.
    #[must_use]
    pub fn with_catalysis_bracket(mut self, bracket: [ThermodynamicTemperature; 2]) -> Self {
        self.catalysis_bracket = [bracket[0].get::<kelvin>(), bracket[1].get::<kelvin>()];
        self
    }

    /// Mixture specific enthalpy at the given state and composition.
    ///
    /// # Errors
    ///
    /// Propagates provider failures unmodified.
    pub fn enthalpy(
        &self,
        spec: StateSpec,
        fraction: OrthoFraction,
    ) -> Result<SpecificEnthalpy, MixtureError> {
        let ortho = self.provider.enthalpy(spec, Species::Orthohydrogen)?;
        let para = self.provider.enthalpy(spec, Species::Parahydrogen)?;
        Ok(fraction.value() * ortho + (1.0 - fraction.value()) * para)
    }

    /// Mixture specific internal energy at the given state and composition.
    ///
    /// # Errors
    ///
    /// Propagates provider failures unmodified.
    pub fn internal_energy(
        &self,
        spec: StateSpec,
        fraction: OrthoFraction,
    ) -> Result<SpecificInternalEnergy, MixtureError> {
        let ortho = self.provider.internal_energy(spec, Species::Orthohydrogen)?;
        let para = self.provider.internal_energy(spec, Species::Parahydrogen)?;
        Ok(fraction.value() * ortho + (1.0 - fraction.value()) * para)
    }

    /// Mixture specific entropy at the given state and composition.
    ///
    /// Ignores the entropy of mixing, which the mass-weighted model cannot
    /// see; adequate for the energy bookkeeping this library is built for.
    ///
    /// # Errors
    ///
    /// Propagates provider failures unmodified.
    pub fn entropy(
        &self,
        spec: StateSpec,
        fraction: OrthoFraction,
    ) -> Result<SpecificEntropy, MixtureError> {
        let ortho = self.provider.entropy(spec, Species::Orthohydrogen)?;
        let para = self.provider.entropy(spec, Species::Parahydrogen)?;
        Ok(fraction.value() * ortho + (1.0 - fraction.value()) * para)
    }

    /// The composition whose mixture enthalpy equals `value` at this state.
    ///
    /// Exact algebraic inversion of the linear mixing rule.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError::DivisionUndefined`] if the isomers coincide at
    /// this state and [`MixtureError::FractionOutOfRange`] if the value does
    /// not lie between them.
    pub fn ortho_fraction_from_enthalpy(
        &self,
        spec: StateSpec,
        value: SpecificEnthalpy,
    ) -> Result<OrthoFraction, MixtureError> {
        let ortho = self.provider.enthalpy(spec, Species::Orthohydrogen)?;
        let para = self.provider.enthalpy(spec, Species::Parahydrogen)?;
        invert_mixing_rule("enthalpy", value.value, ortho.value, para.value)
    }

    /// The composition whose mixture internal energy equals `value`.
    ///
    /// # Errors
    ///
    /// As [`Self::ortho_fraction_from_enthalpy`].
    pub fn ortho_fraction_from_internal_energy(
        &self,
        spec: StateSpec,
        value: SpecificInternalEnergy,
    ) -> Result<OrthoFraction, MixtureError> {
        let ortho = self.provider.internal_energy(spec, Species::Orthohydrogen)?;
        let para = self.provider.internal_energy(spec, Species::Parahydrogen)?;
        invert_mixing_rule("internal energy", value.value, ortho.value, para.value)
    }

    /// The composition whose mixture entropy equals `value`.
    ///
    /// # Errors
    ///
    /// As [`Self::ortho_fraction_from_enthalpy`].
    pub fn ortho_fraction_from_entropy(
        &self,
        spec: StateSpec,
        value: SpecificEntropy,
    ) -> Result<OrthoFraction, MixtureError> {
        let ortho = self.provider.entropy(spec, Species::Orthohydrogen)?;
        let para = self.provider.entropy(spec, Species::Parahydrogen)?;
        invert_mixing_rule("entropy", value.value, ortho.value, para.value)
    }

    /// Final temperature of an adiabatic, isobaric catalytic conversion that
    /// conserves enthalpy.
    ///
    /// Hydrogen enters with mixture enthalpy `target` (any composition) and
    /// leaves fully equilibrated at the same pressure. At each bisection
    /// midpoint the equilibrium fraction is evaluated first and the mixture
    /// enthalpy at that composition compared against the target.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError::DidNotConverge`] if the residual does not drop
    /// below 1e-6 J/kg within 1000 iterations; provider and equilibrium
    /// failures propagate unmodified.
    pub fn temperature_from_enthalpy(
        &self,
        pressure: Pressure,
        target: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, MixtureError> {
        self.catalysis_temperature(pressure, target.value, |model, spec, fraction| {
            model.enthalpy(spec, fraction).map(|q| q.value)
        })
    }

    /// Final temperature of an equilibrating conversion that conserves
    /// internal energy (constant-volume variant of
    /// [`Self::temperature_from_enthalpy`]).
    ///
    /// # Errors
    ///
    /// As [`Self::temperature_from_enthalpy`].
    pub fn temperature_from_internal_energy(
        &self,
        pressure: Pressure,
        target: SpecificInternalEnergy,
    ) -> Result<ThermodynamicTemperature, MixtureError> {
        self.catalysis_temperature(pressure, target.value, |model, spec, fraction| {
            model.internal_energy(spec, fraction).map(|q| q.value)
        })
    }

    /// Mixture dynamic viscosity at the given state.
    ///
    /// The spin-isomer surfaces carry no transport correlations, so the
    /// answer comes from the normal-hydrogen surface regardless of
    /// composition.
    ///
    /// # Errors
    ///
    /// Propagates provider failures unmodified.
    pub fn viscosity(&self, spec: StateSpec) -> Result<DynamicViscosity, MixtureError> {
        Ok(self.provider.viscosity(spec, Species::NormalHydrogen)?)
    }

    /// Mixture thermal conductivity at the given state.
    ///
    /// Answered from the normal-hydrogen surface, like
    /// [`Self::viscosity`].
    ///
    /// # Errors
    ///
    /// Propagates provider failures unmodified.
    pub fn thermal_conductivity(&self, spec: StateSpec) -> Result<ThermalConductivity, MixtureError> {
        Ok(self
            .provider
            .thermal_conductivity(spec, Species::NormalHydrogen)?)
    }

    /// A full property row at the given state and composition.
    ///
    /// # Errors
    ///
    /// Propagates provider failures unmodified.
    pub fn property_record(
        &self,
        spec: StateSpec,
        fraction: OrthoFraction,
    ) -> Result<PropertyRecord, MixtureError> {
        Ok(PropertyRecord {
            enthalpy: self.enthalpy(spec, fraction)?,
            internal_energy: self.internal_energy(spec, fraction)?,
            entropy: self.entropy(spec, fraction)?,
            viscosity: self.viscosity(spec)?,
            thermal_conductivity: self.thermal_conductivity(spec)?,
            speed_of_sound: self.provider.speed_of_sound(spec, Species::NormalHydrogen)?,
        })
    }

    /// Bisects temperature until the equilibrium-composition mixture value
    /// matches the target. `evaluate` answers in SI units (J/kg).
    fn catalysis_temperature(
        &self,
        pressure: Pressure,
        target: f64,
        evaluate: impl Fn(&Self, StateSpec, OrthoFraction) -> Result<f64, MixtureError>,
    ) -> Result<ThermodynamicTemperature, MixtureError> {
        let config = Config {
            max_iters: MAX_BISECTION_ITERS,
            residual_tol: PROPERTY_TOLERANCE_J_PER_KG,
            x_abs_tol: 0.0,
            x_rel_tol: 0.0,
        };
        let solution = bisection::solve(
            |t: f64| -> Result<f64, MixtureError> {
                let temperature = ThermodynamicTemperature::new::<kelvin>(t);
                let fraction = self.equilibrium.ortho_fraction(temperature)?;
                let value = evaluate(self, StateSpec::tp(temperature, pressure), fraction)?;
                Ok(value - target)
            },
            self.catalysis_bracket,
            &config,
        )?;

        match solution.status {
            Status::Converged => Ok(ThermodynamicTemperature::new::<kelvin>(solution.x)),
            Status::MaxIters => Err(MixtureError::DidNotConverge {
                iterations: solution.iters,
            }),
        }
    }
}

/// Solves `value = y·ortho + (1−y)·para` for `y`.
fn invert_mixing_rule(
    property: &'static str,
    value: f64,
    ortho: f64,
    para: f64,
) -> Result<OrthoFraction, MixtureError> {
    let denominator = ortho - para;
    #[allow(clippy::float_cmp)]
    if denominator == 0.0 {
        return Err(MixtureError::DivisionUndefined { property });
    }
    let fraction = (value - para) / denominator;
    OrthoFraction::new(fraction).map_err(|_| MixtureError::FractionOutOfRange { value: fraction })
}
