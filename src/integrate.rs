//! Numerical integration of flux density over wavelength.

use crate::flux::MonochromaticFlux;

/// Strategy for integrating an SED over wavelength.
///
/// Implementations receive samples with unique wavelengths in arbitrary
/// order and must sort internally before integrating; callers are not
/// required to pre-sort. Alternative quadrature schemes (e.g. Simpson's
/// rule) slot in here without changing the engine.
pub trait IntegralCalculator {
    /// Integrate flux density over the sampled wavelength range.
    fn calculate(&self, fluxes: &[MonochromaticFlux]) -> f64;
}

/// Trapezoid-rule integration over the sampled wavelength range.
///
/// Adjacent samples are connected by straight lines and the trapezoid
/// areas summed: `Σ (λ_{i+1} − λ_i) · (f_i + f_{i+1}) / 2`. No
/// interpolation beyond linear trapezoids and no extrapolation past the
/// sample range; that restriction is what makes the result
/// quasi-bolometric rather than bolometric.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapezoidalIntegralCalculator;

/// Return a copy of the samples sorted by ascending wavelength.
pub(crate) fn sort_by_wavelength(fluxes: &[MonochromaticFlux]) -> Vec<MonochromaticFlux> {
    let mut sorted = fluxes.to_vec();
    sorted.sort_by(|a, b| {
        a.wavelength
            .partial_cmp(&b.wavelength)
            .expect("wavelengths should be valid numbers for comparison")
    });
    sorted
}

impl IntegralCalculator for TrapezoidalIntegralCalculator {
    fn calculate(&self, fluxes: &[MonochromaticFlux]) -> f64 {
        let sorted = sort_by_wavelength(fluxes);
        sorted
            .windows(2)
            .map(|pair| {
                let width = pair[1].wavelength - pair[0].wavelength;
                width * (pair[0].flux + pair[1].flux) / 2.0
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flux(flux: f64, wavelength: f64) -> MonochromaticFlux {
        MonochromaticFlux::new(flux, 10.0, wavelength, 0.0).unwrap()
    }

    #[test]
    fn test_sort_by_wavelength() {
        let f1 = flux(100.0, 0.0);
        let f2 = flux(200.0, 1.0);
        let f3 = flux(150.0, 2.0);
        let sorted = sort_by_wavelength(&[f2, f1, f3]);
        assert_eq!(sorted, vec![f1, f2, f3]);
    }

    #[test]
    fn test_trapezoidal_integral() {
        // (100+200)/2 * 1 + (200+150)/2 * 1 = 150 + 175
        let calculator = TrapezoidalIntegralCalculator;
        let fluxes = [flux(100.0, 0.0), flux(200.0, 1.0), flux(150.0, 2.0)];
        assert_relative_eq!(calculator.calculate(&fluxes), 325.0);
    }

    #[test]
    fn test_trapezoidal_integral_two_points() {
        let calculator = TrapezoidalIntegralCalculator;
        let fluxes = [flux(100.0, 0.0), flux(100.0, 1.0)];
        assert_relative_eq!(calculator.calculate(&fluxes), 100.0);
    }

    #[test]
    fn test_unsorted_input_matches_sorted() {
        let calculator = TrapezoidalIntegralCalculator;
        let sorted = [flux(100.0, 0.0), flux(200.0, 1.0), flux(150.0, 2.0)];
        let shuffled = [flux(200.0, 1.0), flux(150.0, 2.0), flux(100.0, 0.0)];
        assert_eq!(
            calculator.calculate(&sorted),
            calculator.calculate(&shuffled)
        );
    }

    #[test]
    fn test_uneven_wavelength_spacing() {
        let calculator = TrapezoidalIntegralCalculator;
        // (100+200)/2 * 2 + (200+150)/2 * 3 = 300 + 525
        let fluxes = [flux(100.0, 0.0), flux(200.0, 2.0), flux(150.0, 5.0)];
        assert_relative_eq!(calculator.calculate(&fluxes), 825.0);
    }
}
