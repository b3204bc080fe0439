//! Conversion of quasi-bolometric flux to isotropic luminosity.

use std::f64::consts::PI;

use crate::flux::{Distance, Luminosity, QuasiBolometricFlux};

/// Convert a quasi-bolometric flux to an isotropic luminosity.
///
/// `L = 4π d² F`, with flux and distance errors treated as independent:
///
/// ```text
/// σ_L = sqrt((4π d² σ_F)² + (F · 8π d · σ_d)²)
/// ```
///
/// The observation time passes through unchanged. Deterministic: repeated
/// calls with identical inputs yield bit-identical results.
pub fn convert_flux_to_luminosity(
    flux: &QuasiBolometricFlux,
    distance: &Distance,
) -> Luminosity {
    let value = flux.value * 4.0 * PI * distance.value.powi(2);

    let flux_term = 4.0 * PI * distance.value.powi(2) * flux.uncertainty;
    let distance_term = flux.value * 8.0 * PI * distance.value * distance.uncertainty;
    let uncertainty = (flux_term.powi(2) + distance_term.powi(2)).sqrt();

    Luminosity {
        value,
        uncertainty,
        time: flux.time,
    }
}
