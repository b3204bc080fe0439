//! Value entities shared across the flux pipeline.
//!
//! All types here are plain value objects: created once, passed through
//! pure functions, dropped. Fields are public for direct access; the
//! validating constructors reject non-finite numbers and negative
//! uncertainties so malformed input fails at construction rather than
//! surfacing as NaN downstream.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn require_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn require_uncertainty(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeUncertainty { field, value });
    }
    Ok(value)
}

/// A single monochromatic flux measurement.
///
/// One sample of an SED: flux density at one wavelength and one observation
/// epoch, with its measurement uncertainty. Flux is in energy per area per
/// time per wavelength; wavelength units only need to be consistent across
/// a given SED.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonochromaticFlux {
    /// Flux density.
    pub flux: f64,
    /// One-sigma uncertainty of `flux`.
    pub flux_uncertainty: f64,
    /// Wavelength the flux was measured at.
    pub wavelength: f64,
    /// Observation epoch.
    pub time: f64,
}

impl MonochromaticFlux {
    /// Create a validated flux sample.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field is non-finite or the
    /// uncertainty is negative.
    pub fn new(
        flux: f64,
        flux_uncertainty: f64,
        wavelength: f64,
        time: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            flux: require_finite("flux", flux)?,
            flux_uncertainty: require_uncertainty("flux_uncertainty", flux_uncertainty)?,
            wavelength: require_finite("wavelength", wavelength)?,
            time: require_finite("time", time)?,
        })
    }
}

/// Flux integrated across the observed wavelength range of one SED.
///
/// "Quasi" because no extrapolation beyond the sampled range is applied;
/// UV/IR corrections toward a true bolometric flux are a separate concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuasiBolometricFlux {
    /// Integrated flux.
    pub value: f64,
    /// Propagated one-sigma uncertainty.
    pub uncertainty: f64,
    /// Observation epoch shared by the input SED.
    pub time: f64,
}

/// A luminosity distance with uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Distance value, strictly positive.
    pub value: f64,
    /// One-sigma uncertainty of `value`.
    pub uncertainty: f64,
}

impl Distance {
    /// Create a validated distance.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the value is non-finite or not
    /// strictly positive, or the uncertainty is negative.
    pub fn new(value: f64, uncertainty: f64) -> Result<Self, ValidationError> {
        let value = require_finite("distance", value)?;
        if value <= 0.0 {
            return Err(ValidationError::NonPositiveDistance { value });
        }
        Ok(Self {
            value,
            uncertainty: require_uncertainty("distance uncertainty", uncertainty)?,
        })
    }
}

/// Isotropic luminosity derived from a quasi-bolometric flux and a distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Luminosity {
    /// Luminosity value.
    pub value: f64,
    /// Propagated one-sigma uncertainty.
    pub uncertainty: f64,
    /// Observation epoch, carried through from the flux.
    pub time: f64,
}
