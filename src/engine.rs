//! Quasi-bolometric flux computation for a single SED.
//!
//! The entry points here validate the sample collection, collapse
//! duplicate wavelengths, and hand the combined sequence to the injected
//! integration and uncertainty strategies exactly once each.

use crate::combine::combine_duplicates;
use crate::error::InsufficientFluxes;
use crate::flux::{MonochromaticFlux, QuasiBolometricFlux};
use crate::integrate::{IntegralCalculator, TrapezoidalIntegralCalculator};
use crate::uncertainty::{TrapezoidalUncertaintyCalculator, UncertaintyCalculator};

/// Compute the quasi-bolometric flux of one SED with injected strategies.
///
/// All samples must share one observation time; the result carries that
/// time. Duplicate-wavelength samples are combined before integration, so
/// both calculators see the same unique-wavelength, ascending sequence.
///
/// # Errors
///
/// Returns [`InsufficientFluxes`] when fewer than two samples were
/// supplied, or when combination leaves fewer than two distinct
/// wavelengths. Neither calculator is invoked in that case.
pub fn integrate_sed<I, U>(
    integral_calculator: &I,
    uncertainty_calculator: &U,
    fluxes: &[MonochromaticFlux],
) -> Result<QuasiBolometricFlux, InsufficientFluxes>
where
    I: IntegralCalculator,
    U: UncertaintyCalculator,
{
    if fluxes.len() < 2 {
        return Err(InsufficientFluxes {
            distinct: fluxes.len(),
        });
    }

    let combined = combine_duplicates(fluxes);
    if combined.len() < 2 {
        return Err(InsufficientFluxes {
            distinct: combined.len(),
        });
    }

    if combined.len() < fluxes.len() {
        log::debug!(
            "combined {} samples into {} distinct wavelengths",
            fluxes.len(),
            combined.len()
        );
    }

    Ok(QuasiBolometricFlux {
        value: integral_calculator.calculate(&combined),
        uncertainty: uncertainty_calculator.calculate(&combined),
        time: fluxes[0].time,
    })
}

/// Compute the quasi-bolometric flux with the default trapezoidal
/// integration and uncertainty propagation.
pub fn quasi_bolometric_flux(
    fluxes: &[MonochromaticFlux],
) -> Result<QuasiBolometricFlux, InsufficientFluxes> {
    integrate_sed(
        &TrapezoidalIntegralCalculator,
        &TrapezoidalUncertaintyCalculator,
        fluxes,
    )
}
