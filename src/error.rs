use thiserror::Error;

/// Fewer than two distinct-wavelength samples were available for integration.
///
/// Raised by the engine before either calculator runs. Fatal to a single
/// SED computation; callers iterating over many SEDs should catch and skip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("need at least 2 distinct wavelengths to integrate, got {distinct}")]
pub struct InsufficientFluxes {
    /// Number of distinct-wavelength samples found.
    pub distinct: usize,
}

/// Errors produced when constructing photometric quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A field that must be a finite real number was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },

    /// An uncertainty was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeUncertainty {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },

    /// A distance was zero or negative.
    #[error("distance must be positive, got {value}")]
    NonPositiveDistance {
        /// Value supplied by the caller.
        value: f64,
    },
}

/// An ensemble reduction was attempted over zero results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot average an empty flux ensemble")]
pub struct EmptyEnsemble;
