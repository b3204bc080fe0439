//! Combination of repeated-wavelength flux measurements.
//!
//! When an SED carries several measurements at the same wavelength (the
//! same filter observed more than once), they are collapsed into one
//! representative sample per wavelength by inverse-variance weighting,
//! which minimizes the variance of the combined estimate under
//! independent-Gaussian-error assumptions.
//!
//! Wavelengths are grouped by exact `f64` equality; measurements at
//! nearly-equal wavelengths are treated as distinct samples. This is a
//! known limitation.

use crate::flux::MonochromaticFlux;

/// Inverse-variance weight of each uncertainty: `w = 1/σ²`.
///
/// Only meaningful for strictly positive uncertainties; the zero case is
/// handled by an explicit branch in [`combine_fluxes`] before weights are
/// ever computed.
fn inverse_variance_weights(uncertainties: &[f64]) -> Vec<f64> {
    uncertainties.iter().map(|u| 1.0 / (u * u)).collect()
}

/// Weighted average of `values` with the given weights.
fn weighted_average(values: &[f64], weights: &[f64]) -> f64 {
    let weight_sum: f64 = weights.iter().sum();
    let weighted_sum: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    weighted_sum / weight_sum
}

/// Uncertainty of an inverse-variance weighted average: `1/sqrt(Σw)`.
fn weighted_average_uncertainty(weights: &[f64]) -> f64 {
    1.0 / weights.iter().sum::<f64>().sqrt()
}

/// Combine one group of same-wavelength samples into a single sample.
///
/// Groups of one pass through unchanged. Larger groups are combined by
/// inverse-variance weighting. Samples with zero uncertainty dominate
/// completely: when any are present, the combined flux is their unweighted
/// mean and the combined uncertainty is exactly zero.
///
/// Returns `None` for an empty group. Wavelength and time are taken from
/// the first sample; callers are responsible for grouping by wavelength.
pub fn combine_fluxes(group: &[MonochromaticFlux]) -> Option<MonochromaticFlux> {
    let first = group.first()?;
    if group.len() == 1 {
        return Some(*first);
    }

    let exact: Vec<f64> = group
        .iter()
        .filter(|f| f.flux_uncertainty == 0.0)
        .map(|f| f.flux)
        .collect();

    let (flux, flux_uncertainty) = if !exact.is_empty() {
        // Zero-uncertainty samples are an absolute override, not a
        // division-by-zero.
        (exact.iter().sum::<f64>() / exact.len() as f64, 0.0)
    } else {
        let fluxes: Vec<f64> = group.iter().map(|f| f.flux).collect();
        let uncertainties: Vec<f64> = group.iter().map(|f| f.flux_uncertainty).collect();
        let weights = inverse_variance_weights(&uncertainties);
        (
            weighted_average(&fluxes, &weights),
            weighted_average_uncertainty(&weights),
        )
    };

    Some(MonochromaticFlux {
        flux,
        flux_uncertainty,
        wavelength: first.wavelength,
        time: first.time,
    })
}

/// Partition samples into ascending-wavelength groups of equal wavelength.
///
/// The input order within each group is preserved.
pub fn group_by_wavelength(fluxes: &[MonochromaticFlux]) -> Vec<Vec<MonochromaticFlux>> {
    let mut sorted: Vec<MonochromaticFlux> = fluxes.to_vec();
    sorted.sort_by(|a, b| {
        a.wavelength
            .partial_cmp(&b.wavelength)
            .expect("wavelengths should be valid numbers for comparison")
    });

    let mut groups: Vec<Vec<MonochromaticFlux>> = Vec::new();
    for flux in sorted {
        if let Some(group) = groups.last_mut() {
            if group[0].wavelength == flux.wavelength {
                group.push(flux);
                continue;
            }
        }
        groups.push(vec![flux]);
    }
    groups
}

/// Collapse duplicate-wavelength samples into one sample per wavelength.
///
/// The result is sorted by ascending wavelength and contains no two
/// samples at the same wavelength, making it directly integrable. The
/// input is not mutated.
pub fn combine_duplicates(fluxes: &[MonochromaticFlux]) -> Vec<MonochromaticFlux> {
    group_by_wavelength(fluxes)
        .iter()
        .filter_map(|group| combine_fluxes(group))
        .collect()
}
