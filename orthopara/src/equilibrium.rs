use orthopara_solve::bisection::{self, Config, Status};
use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::fraction::OrthoFraction;

/// Largest ortho fraction reachable at thermal equilibrium.
///
/// The 3:1 nuclear-spin degeneracy caps the equilibrium ortho share at 3/4 as
/// temperature grows; the series approaches the cap from below and never
/// touches it at finite temperature.
pub const EQUILIBRIUM_CEILING: f64 = 0.75;

/// Characteristic rotational temperature of molecular hydrogen, kelvin.
const HYDROGEN_ROTATIONAL_TEMPERATURE_K: f64 = 85.4;

/// Default number of rotational-state pairs kept in the partition sums.
///
/// Seven pairs resolve the fraction to full double precision below 300 K.
const DEFAULT_SERIES_TERMS: u32 = 7;

/// Default temperature bracket for the inverse solve, kelvin.
const DEFAULT_TEMPERATURE_BRACKET_K: [f64; 2] = [0.0, 1000.0];

/// Convergence tolerance on the ortho fraction in the inverse solve.
const FRACTION_TOLERANCE: f64 = 1e-6;

const MAX_BISECTION_ITERS: usize = 1000;

/// Errors from equilibrium evaluation.
#[derive(Debug, Error)]
pub enum EquilibriumError {
    #[error("temperature must be strictly positive, got {0} K")]
    NonPositiveTemperature(f64),

    #[error("rotational temperature must be strictly positive, got {0} K")]
    NonPositiveRotationalTemperature(f64),

    #[error("the partition sums need at least one rotational-state pair")]
    ZeroSeriesTerms,

    #[error(
        "no equilibrium exists for an ortho fraction of {0}; \
         reachable fractions lie strictly inside (0, 0.75)"
    )]
    TargetOutOfRange(f64),

    #[error("bisection did not converge within {iterations} iterations")]
    DidNotConverge { iterations: usize },

    #[error(transparent)]
    Bisection(#[from] bisection::Error),
}

/// Equilibrium ortho fraction as a function of temperature, and its inverse.
///
/// Even rotational levels pair with the para spin state and odd levels with
/// the ortho state. Summing degeneracy-weighted Boltzmann factors over each
/// parity and weighting the odd sum by the triplet degeneracy gives the
/// fraction a fully equilibrated sample settles at:
///
/// ```text
/// Yo(T) = 3·K_odd / (K_even + 3·K_odd),
/// K = Σ (2J+1)·exp(−J(J+1)·T_rot/T)
/// ```
///
/// The defaults describe hydrogen; other homonuclear diatomics only need
/// their own rotational temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    series_terms: u32,
    rotational_temperature: ThermodynamicTemperature,
    temperature_bracket: [f64; 2],
}

impl Default for Equilibrium {
    fn default() -> Self {
        Self {
            series_terms: DEFAULT_SERIES_TERMS,
            rotational_temperature: ThermodynamicTemperature::new::<kelvin>(
                HYDROGEN_ROTATIONAL_TEMPERATURE_K,
            ),
            temperature_bracket: DEFAULT_TEMPERATURE_BRACKET_K,
        }
    }
}

impl Equilibrium {
    /// Creates an engine with a custom truncation and rotational temperature.
    ///
    /// # Errors
    ///
    /// Returns an [`EquilibriumError`] if `series_terms` is zero or the
    /// rotational temperature is not strictly positive.
    pub fn new(
        series_terms: u32,
        rotational_temperature: ThermodynamicTemperature,
    ) -> Result<Self, EquilibriumError> {
        if series_terms == 0 {
            return Err(EquilibriumError::ZeroSeriesTerms);
        }
        let t_rot = rotational_temperature.get::<kelvin>();
        if !(t_rot > 0.0) {
            return Err(EquilibriumError::NonPositiveRotationalTemperature(t_rot));
        }
        Ok(Self {
            series_terms,
            rotational_temperature,
            temperature_bracket: DEFAULT_TEMPERATURE_BRACKET_K,
        })
    }

    /// Replaces the temperature bracket used by [`Self::temperature`].
    #[must_use]
    pub fn with_temperature_bracket(mut self, bracket: [ThermodynamicTemperature; 2]) -> Self {
        self.temperature_bracket = [bracket[0].get::<kelvin>(), bracket[1].get::<kelvin>()];
        self
    }

    /// The equilibrium ortho fraction at the given temperature.
    ///
    /// Monotonically non-decreasing in temperature: vanishing as T → 0 and
    /// approaching [`EQUILIBRIUM_CEILING`] from below as T grows.
    ///
    /// # Errors
    ///
    /// Returns [`EquilibriumError::NonPositiveTemperature`] unless the
    /// temperature is strictly positive kelvin.
    pub fn ortho_fraction(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<OrthoFraction, EquilibriumError> {
        let t = temperature.get::<kelvin>();
        if !(t > 0.0) {
            return Err(EquilibriumError::NonPositiveTemperature(t));
        }
        let t_rot = self.rotational_temperature.get::<kelvin>();

        let mut even_sum = 0.0;
        let mut odd_sum = 0.0;
        let mut j = 0u32;
        for _ in 0..self.series_terms {
            even_sum += partition_term(j, t_rot, t);
            j += 1;
            odd_sum += partition_term(j, t_rot, t);
            j += 1;
        }

        let fraction = 3.0 * odd_sum / (even_sum + 3.0 * odd_sum);
        Ok(OrthoFraction::new(fraction)
            .expect("the even sum starts at one, keeping the ratio inside [0, 1]"))
    }

    /// The temperature at which equilibrium settles at the target fraction.
    ///
    /// Bisects the forward function over the configured bracket until the
    /// fraction matches within 1e-6.
    ///
    /// # Errors
    ///
    /// Returns [`EquilibriumError::TargetOutOfRange`] unless the target lies
    /// strictly inside `(0, 0.75)`, and
    /// [`EquilibriumError::DidNotConverge`] if the tolerance is not met
    /// within 1000 iterations.
    pub fn temperature(
        &self,
        target: OrthoFraction,
    ) -> Result<ThermodynamicTemperature, EquilibriumError> {
        let y = target.value();
        if y <= 0.0 || y >= EQUILIBRIUM_CEILING {
            return Err(EquilibriumError::TargetOutOfRange(y));
        }

        let config = Config {
            max_iters: MAX_BISECTION_ITERS,
            residual_tol: FRACTION_TOLERANCE,
            x_abs_tol: 0.0,
            x_rel_tol: 0.0,
        };
        let solution = bisection::solve(
            |t: f64| -> Result<f64, EquilibriumError> {
                let fraction =
                    self.ortho_fraction(ThermodynamicTemperature::new::<kelvin>(t))?;
                Ok(fraction.value() - y)
            },
            self.temperature_bracket,
            &config,
        )?;

        match solution.status {
            Status::Converged => Ok(ThermodynamicTemperature::new::<kelvin>(solution.x)),
            Status::MaxIters => Err(EquilibriumError::DidNotConverge {
                iterations: solution.iters,
            }),
        }
    }
}

/// Degeneracy-weighted Boltzmann factor of rotational level `j`.
fn partition_term(j: u32, rotational_temperature: f64, temperature: f64) -> f64 {
    f64::from(2 * j + 1) * (-f64::from(j * (j + 1)) * rotational_temperature / temperature).exp()
}
