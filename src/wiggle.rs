//! Monte-Carlo perturbation of flux measurements.
//!
//! Stochastic uncertainty estimation works by "wiggling" each flux within
//! its measurement uncertainty, integrating each perturbed SED
//! independently, and reducing the resulting ensemble of quasi-bolometric
//! fluxes to a mean and scatter. Both steps here are self-contained and
//! side-effect-free: the RNG is caller-supplied and each call produces an
//! independent SED, so callers may fan out over parallel workers without
//! coordination.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::EmptyEnsemble;
use crate::flux::{MonochromaticFlux, QuasiBolometricFlux};

/// Draw a perturbed copy of an SED.
///
/// Each sample's flux is drawn from `Normal(flux, flux_uncertainty)`;
/// uncertainty, wavelength and time are preserved. Samples with zero
/// uncertainty never move. The input is not mutated.
pub fn wiggle_fluxes<R: Rng + ?Sized>(
    fluxes: &[MonochromaticFlux],
    rng: &mut R,
) -> Vec<MonochromaticFlux> {
    fluxes
        .iter()
        .map(|sample| {
            let normal = Normal::new(sample.flux, sample.flux_uncertainty)
                .expect("flux uncertainty must be non-negative and finite");
            MonochromaticFlux {
                flux: normal.sample(rng),
                ..*sample
            }
        })
        .collect()
}

/// Reduce an ensemble of independently computed quasi-bolometric fluxes
/// to a single flux.
///
/// The result's value is the ensemble mean, its uncertainty the
/// population standard deviation, and its time the shared observation
/// epoch of the ensemble.
///
/// # Errors
///
/// Returns [`EmptyEnsemble`] for an empty slice.
pub fn average_flux_ensemble(
    ensemble: &[QuasiBolometricFlux],
) -> Result<QuasiBolometricFlux, EmptyEnsemble> {
    let first = ensemble.first().ok_or(EmptyEnsemble)?;
    let n = ensemble.len() as f64;

    let mean = ensemble.iter().map(|f| f.value).sum::<f64>() / n;
    let variance = ensemble
        .iter()
        .map(|f| (f.value - mean).powi(2))
        .sum::<f64>()
        / n;

    Ok(QuasiBolometricFlux {
        value: mean,
        uncertainty: variance.sqrt(),
        time: first.time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn flux(flux: f64, uncertainty: f64, wavelength: f64) -> MonochromaticFlux {
        MonochromaticFlux::new(flux, uncertainty, wavelength, 0.0).unwrap()
    }

    fn qbol(value: f64) -> QuasiBolometricFlux {
        QuasiBolometricFlux {
            value,
            uncertainty: 0.0,
            time: 7.0,
        }
    }

    #[test]
    fn test_wiggle_preserves_everything_but_flux() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sed = [flux(100.0, 10.0, 1.0), flux(200.0, 20.0, 2.0)];
        let wiggled = wiggle_fluxes(&sed, &mut rng);

        assert_eq!(wiggled.len(), 2);
        for (original, moved) in sed.iter().zip(&wiggled) {
            assert_eq!(moved.flux_uncertainty, original.flux_uncertainty);
            assert_eq!(moved.wavelength, original.wavelength);
            assert_eq!(moved.time, original.time);
        }
    }

    #[test]
    fn test_wiggle_zero_uncertainty_never_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sed = [flux(100.0, 0.0, 1.0), flux(200.0, 0.0, 2.0)];
        let wiggled = wiggle_fluxes(&sed, &mut rng);
        assert_eq!(wiggled, sed.to_vec());
    }

    #[test]
    fn test_wiggle_is_reproducible_for_a_seed() {
        let sed = [flux(100.0, 10.0, 1.0), flux(200.0, 20.0, 2.0)];
        let a = wiggle_fluxes(&sed, &mut ChaCha8Rng::seed_from_u64(7));
        let b = wiggle_fluxes(&sed, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_wiggle_stays_within_a_few_sigma() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let sed = [flux(100.0, 10.0, 1.0)];
        for _ in 0..100 {
            let wiggled = wiggle_fluxes(&sed, &mut rng);
            assert!(
                (wiggled[0].flux - 100.0).abs() < 60.0,
                "wiggled flux {} strayed implausibly far",
                wiggled[0].flux
            );
        }
    }

    #[test]
    fn test_average_flux_ensemble() {
        let ensemble = [qbol(10.0), qbol(12.0), qbol(14.0)];
        let averaged = average_flux_ensemble(&ensemble).unwrap();
        assert_relative_eq!(averaged.value, 12.0);
        // Population standard deviation of [10, 12, 14].
        assert_relative_eq!(averaged.uncertainty, (8.0_f64 / 3.0).sqrt());
        assert_eq!(averaged.time, 7.0);
    }

    #[test]
    fn test_average_single_member_ensemble() {
        let averaged = average_flux_ensemble(&[qbol(10.0)]).unwrap();
        assert_eq!(averaged.value, 10.0);
        assert_eq!(averaged.uncertainty, 0.0);
    }

    #[test]
    fn test_average_empty_ensemble() {
        assert_eq!(average_flux_ensemble(&[]), Err(EmptyEnsemble));
    }
}
