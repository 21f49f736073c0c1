use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

/// Coefficient of performance of an ideal reverse-Carnot cycle absorbing
/// heat at `cold` and rejecting it at `hot`: `COP = T_cold / (T_hot − T_cold)`.
///
/// When `cold` exceeds `hot` the cycle is a heat pump rather than a
/// refrigerator; a warning goes to stderr and the (negative) figure is still
/// returned for the caller to interpret.
#[must_use]
pub fn refrigeration_cop(hot: ThermodynamicTemperature, cold: ThermodynamicTemperature) -> Ratio {
    let hot_k = hot.get::<kelvin>();
    let cold_k = cold.get::<kelvin>();
    if cold_k > hot_k {
        eprintln!(
            "[orthopara] warning: cold reservoir at {cold_k} K is above the hot reservoir at {hot_k} K"
        );
    }
    Ratio::new::<ratio>(cold_k / (hot_k - cold_k))
}
