//! Common fixtures for lumen integration tests

use lumen::mag2flux::{Band, ObservedMagnitude};
use lumen::MonochromaticFlux;

/// A plausible set of UBVRI magnitudes for one epoch of a supernova near
/// peak light.
pub fn supernova_magnitudes(time: f64) -> Vec<ObservedMagnitude> {
    let measurements = [
        ("U", 15.3, 0.10),
        ("B", 14.8, 0.05),
        ("V", 14.5, 0.04),
        ("R", 14.4, 0.05),
        ("I", 14.6, 0.08),
    ];

    measurements
        .iter()
        .map(|&(band, magnitude, uncertainty)| ObservedMagnitude {
            magnitude,
            uncertainty,
            band: Band::named(band).expect("built-in band table should contain UBVRI"),
            time,
        })
        .collect()
}

/// Convert an epoch's magnitudes to an SED of monochromatic fluxes.
pub fn supernova_sed(time: f64) -> Vec<MonochromaticFlux> {
    supernova_magnitudes(time)
        .iter()
        .map(|m| m.to_flux().expect("fixture magnitudes should be valid"))
        .collect()
}
