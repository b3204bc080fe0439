//! lumen - Quasi-bolometric flux pipeline for transient photometry
//!
//! This crate computes the quasi-bolometric radiative flux of a transient
//! event (e.g. a supernova) from multi-band photometric observations and
//! propagates measurement uncertainty through every step:
//!
//! - **mag2flux** - Broadband magnitudes to monochromatic fluxes
//! - **combine** - Inverse-variance combination of repeated-wavelength samples
//! - **integrate** - Trapezoidal integration of an SED over wavelength
//! - **uncertainty** - Trapezoidal error propagation for the integral
//! - **engine** - Validation and orchestration into one result per SED
//! - **luminosity** - Flux plus distance to isotropic luminosity
//! - **sed** - SED inspection and trimming helpers
//! - **wiggle** - Monte-Carlo flux perturbation and ensemble reduction
//!
//! # Example
//!
//! ```text
//! use lumen::{quasi_bolometric_flux, MonochromaticFlux};
//!
//! let sed = vec![
//!     MonochromaticFlux::new(100.0, 10.0, 4380.0, 2450000.5)?,
//!     MonochromaticFlux::new(200.0, 20.0, 5450.0, 2450000.5)?,
//!     MonochromaticFlux::new(150.0, 8.0, 6410.0, 2450000.5)?,
//! ];
//!
//! let fqbol = quasi_bolometric_flux(&sed)?;
//! println!("F_qbol = {} ± {}", fqbol.value, fqbol.uncertainty);
//! ```
//!
//! Every operation is a pure, synchronous function over immutable value
//! objects; inputs are never mutated, so independent SEDs can be processed
//! from parallel workers without coordination.

pub mod combine;
pub mod engine;
pub mod error;
pub mod flux;
pub mod integrate;
pub mod luminosity;
pub mod mag2flux;
pub mod sed;
pub mod uncertainty;
pub mod wiggle;

// Re-export commonly used types
pub use combine::combine_duplicates;
pub use engine::{integrate_sed, quasi_bolometric_flux};
pub use error::{EmptyEnsemble, InsufficientFluxes, ValidationError};
pub use flux::{Distance, Luminosity, MonochromaticFlux, QuasiBolometricFlux};
pub use integrate::{IntegralCalculator, TrapezoidalIntegralCalculator};
pub use luminosity::convert_flux_to_luminosity;
pub use mag2flux::{Band, ObservedMagnitude};
pub use uncertainty::{TrapezoidalUncertaintyCalculator, UncertaintyCalculator};
pub use wiggle::{average_flux_ensemble, wiggle_fluxes};
