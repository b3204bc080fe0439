//! Uncertainty propagation through the trapezoidal integral.
//!
//! # Methodology
//!
//! The trapezoid sum is linear in the sample fluxes, so standard error
//! propagation for independent per-sample errors gives
//!
//! ```text
//! σ_total² = Σ_i (c_i · σ_i)²
//! ```
//!
//! where `c_i = ∂I/∂f_i` is each sample's total coefficient in the sum.
//! Endpoints enter a single trapezoid, `c = Δλ/2` for their one adjacent
//! gap. Interior samples enter the two trapezoids on either side; those
//! two contributions come from the same measurement and are therefore
//! fully correlated, so the coefficients add before squaring:
//! `c_i = (λ_{i+1} − λ_{i−1})/2`.

use crate::flux::MonochromaticFlux;
use crate::integrate::sort_by_wavelength;

/// Strategy for propagating per-sample flux uncertainty through an
/// integral over wavelength.
///
/// Same input contract as [`crate::integrate::IntegralCalculator`]:
/// unique wavelengths in arbitrary order, sorted internally.
pub trait UncertaintyCalculator {
    /// Propagated one-sigma uncertainty of the integrated flux.
    fn calculate(&self, fluxes: &[MonochromaticFlux]) -> f64;
}

/// Trapezoidal-rule uncertainty propagation for independent sample errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapezoidalUncertaintyCalculator;

impl UncertaintyCalculator for TrapezoidalUncertaintyCalculator {
    fn calculate(&self, fluxes: &[MonochromaticFlux]) -> f64 {
        let sorted = sort_by_wavelength(fluxes);
        if sorted.len() < 2 {
            // Degenerate inputs integrate to nothing; the engine rejects
            // them before this point.
            return 0.0;
        }
        let last = sorted.len() - 1;

        let variance: f64 = sorted
            .iter()
            .enumerate()
            .map(|(i, sample)| {
                let span = if i == 0 {
                    sorted[1].wavelength - sorted[0].wavelength
                } else if i == last {
                    sorted[last].wavelength - sorted[last - 1].wavelength
                } else {
                    sorted[i + 1].wavelength - sorted[i - 1].wavelength
                };
                (0.5 * span * sample.flux_uncertainty).powi(2)
            })
            .sum();

        variance.sqrt()
    }
}
