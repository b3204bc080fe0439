//! SED shaping helpers.
//!
//! Small utilities for inspecting and trimming a spectral energy
//! distribution before integration or model fitting.

use crate::flux::MonochromaticFlux;

/// The brightest sample in the SED.
///
/// Ties keep the first instance encountered. `None` for an empty SED.
pub fn peak_flux(sed: &[MonochromaticFlux]) -> Option<&MonochromaticFlux> {
    sed.iter().fold(None, |best, sample| match best {
        Some(current) if sample.flux <= current.flux => Some(current),
        _ => Some(sample),
    })
}

/// The faintest sample in the SED.
///
/// Ties keep the first instance encountered. `None` for an empty SED.
pub fn faintest_flux(sed: &[MonochromaticFlux]) -> Option<&MonochromaticFlux> {
    sed.iter().fold(None, |best, sample| match best {
        Some(current) if sample.flux >= current.flux => Some(current),
        _ => Some(sample),
    })
}

/// Shortest observed wavelength, or `None` for an empty SED.
pub fn shortest_wavelength(sed: &[MonochromaticFlux]) -> Option<f64> {
    sed.iter()
        .map(|sample| sample.wavelength)
        .fold(None, |best, w| match best {
            Some(current) if w >= current => Some(current),
            _ => Some(w),
        })
}

/// Longest observed wavelength, or `None` for an empty SED.
pub fn longest_wavelength(sed: &[MonochromaticFlux]) -> Option<f64> {
    sed.iter()
        .map(|sample| sample.wavelength)
        .fold(None, |best, w| match best {
            Some(current) if w <= current => Some(current),
            _ => Some(w),
        })
}

/// Keep only samples at or redward of `min_wavelength`.
pub fn trim_to_minimum_wavelength(
    sed: &[MonochromaticFlux],
    min_wavelength: f64,
) -> Vec<MonochromaticFlux> {
    sed.iter()
        .filter(|sample| sample.wavelength >= min_wavelength)
        .copied()
        .collect()
}

/// Keep only samples at or redward of the peak sample's wavelength.
///
/// Returns an empty list for an empty SED.
pub fn trim_to_peak(sed: &[MonochromaticFlux]) -> Vec<MonochromaticFlux> {
    match peak_flux(sed) {
        Some(peak) => trim_to_minimum_wavelength(sed, peak.wavelength),
        None => Vec::new(),
    }
}
