use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Saturation quality at a liquid-vapor phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// Saturated liquid (vapor mass fraction 0).
    Liquid,
    /// Saturated vapor (vapor mass fraction 1).
    Vapor,
}

impl Quality {
    /// The vapor mass fraction as a number.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Liquid => 0.0,
            Self::Vapor => 1.0,
        }
    }
}

/// Identifies the thermodynamic state a property is evaluated at.
///
/// Mixtures are evaluated either in the single-phase region, pinned by
/// temperature and pressure, or exactly on a phase boundary, pinned by a
/// saturation quality together with pressure or temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateSpec {
    TemperaturePressure {
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    },
    SaturatedPressure {
        quality: Quality,
        pressure: Pressure,
    },
    SaturatedTemperature {
        quality: Quality,
        temperature: ThermodynamicTemperature,
    },
}

impl StateSpec {
    /// A single-phase state at the given temperature and pressure.
    #[must_use]
    pub fn tp(temperature: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self::TemperaturePressure {
            temperature,
            pressure,
        }
    }

    /// The saturated-liquid state at the given pressure.
    #[must_use]
    pub fn saturated_liquid(pressure: Pressure) -> Self {
        Self::SaturatedPressure {
            quality: Quality::Liquid,
            pressure,
        }
    }

    /// The saturated-vapor state at the given pressure.
    #[must_use]
    pub fn saturated_vapor(pressure: Pressure) -> Self {
        Self::SaturatedPressure {
            quality: Quality::Vapor,
            pressure,
        }
    }

    /// The saturated-liquid state at the given temperature.
    #[must_use]
    pub fn saturated_liquid_at(temperature: ThermodynamicTemperature) -> Self {
        Self::SaturatedTemperature {
            quality: Quality::Liquid,
            temperature,
        }
    }

    /// The saturated-vapor state at the given temperature.
    #[must_use]
    pub fn saturated_vapor_at(temperature: ThermodynamicTemperature) -> Self {
        Self::SaturatedTemperature {
            quality: Quality::Vapor,
            temperature,
        }
    }
}
