//! Conversion of broadband magnitudes to monochromatic fluxes.
//!
//! An observed magnitude in a photometric band maps to a monochromatic
//! flux at the band's effective wavelength through the band's zero-point
//! flux: `F = F₀ · 10^(−0.4 m)`. The magnitude uncertainty propagates as
//! `σ_F = F · 0.4 · ln 10 · σ_m`.
//!
//! The built-in band table carries the Johnson-Cousins UBVRI effective
//! wavelengths (Å) and zero points (erg s⁻¹ cm⁻² Å⁻¹) from Bessell (1998).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::flux::MonochromaticFlux;

const LN_10: f64 = std::f64::consts::LN_10;

/// A photometric bandpass, reduced to the two numbers the conversion needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Short band name, e.g. "V".
    pub name: String,
    /// Effective wavelength in Angstroms.
    pub effective_wavelength: f64,
    /// Zero-point flux in erg s⁻¹ cm⁻² Å⁻¹.
    pub flux_conversion_factor: f64,
}

impl Band {
    pub fn new(
        name: impl Into<String>,
        effective_wavelength: f64,
        flux_conversion_factor: f64,
    ) -> Self {
        Self {
            name: name.into(),
            effective_wavelength,
            flux_conversion_factor,
        }
    }

    /// The built-in Johnson-Cousins UBVRI bands.
    pub fn johnson_cousins() -> Vec<Band> {
        vec![
            Band::new("U", 3660.0, 417.5e-11),
            Band::new("B", 4380.0, 632.0e-11),
            Band::new("V", 5450.0, 363.1e-11),
            Band::new("R", 6410.0, 217.7e-11),
            Band::new("I", 7980.0, 112.6e-11),
        ]
    }

    /// Look up a built-in band by name.
    pub fn named(name: &str) -> Option<Band> {
        Band::johnson_cousins().into_iter().find(|b| b.name == name)
    }
}

/// A single magnitude measurement in one band at one epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedMagnitude {
    /// Apparent magnitude.
    pub magnitude: f64,
    /// One-sigma uncertainty of the magnitude.
    pub uncertainty: f64,
    /// Bandpass the magnitude was measured in.
    pub band: Band,
    /// Observation epoch.
    pub time: f64,
}

impl ObservedMagnitude {
    /// Convert to a monochromatic flux at the band's effective wavelength.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the magnitude or its uncertainty is
    /// malformed, surfaced through the flux constructor.
    pub fn to_flux(&self) -> Result<MonochromaticFlux, ValidationError> {
        let flux = self.band.flux_conversion_factor * 10.0_f64.powf(-0.4 * self.magnitude);
        let flux_uncertainty = flux * 0.4 * LN_10 * self.uncertainty;
        MonochromaticFlux::new(
            flux,
            flux_uncertainty,
            self.band.effective_wavelength,
            self.time,
        )
    }
}
