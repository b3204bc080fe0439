//! Monte-Carlo ensemble test: wiggle an SED many times, integrate each
//! realization, and check the ensemble statistics against the
//! deterministic pipeline.

mod common;

use common::supernova_sed;
use lumen::{average_flux_ensemble, quasi_bolometric_flux, wiggle_fluxes, QuasiBolometricFlux};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn wiggled_ensemble(seed: u64, realizations: usize) -> Vec<QuasiBolometricFlux> {
    let sed = supernova_sed(2450000.5);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..realizations)
        .map(|_| {
            let wiggled = wiggle_fluxes(&sed, &mut rng);
            quasi_bolometric_flux(&wiggled).expect("wiggling preserves wavelength coverage")
        })
        .collect()
}

#[test]
fn test_ensemble_is_reproducible_for_a_seed() {
    let first = wiggled_ensemble(42, 50);
    let second = wiggled_ensemble(42, 50);
    assert_eq!(first, second);

    let other_seed = wiggled_ensemble(43, 50);
    assert_ne!(first, other_seed);
}

#[test]
fn test_ensemble_mean_tracks_deterministic_result() {
    let _ = env_logger::builder().is_test(true).try_init();

    let sed = supernova_sed(2450000.5);
    let deterministic = quasi_bolometric_flux(&sed).unwrap();

    let ensemble = wiggled_ensemble(42, 500);
    let averaged = average_flux_ensemble(&ensemble).unwrap();

    // The ensemble mean converges on the unperturbed integral and its
    // scatter stays on the order of the propagated uncertainty.
    let tolerance = 4.0 * deterministic.uncertainty / (500.0_f64).sqrt();
    assert!(
        (averaged.value - deterministic.value).abs() < tolerance,
        "ensemble mean {} should be within {} of {}",
        averaged.value,
        tolerance,
        deterministic.value
    );
    assert!(
        averaged.uncertainty > 0.3 * deterministic.uncertainty
            && averaged.uncertainty < 3.0 * deterministic.uncertainty,
        "ensemble scatter {} should be comparable to the propagated uncertainty {}",
        averaged.uncertainty,
        deterministic.uncertainty
    );
    assert_eq!(averaged.time, deterministic.time);
}
