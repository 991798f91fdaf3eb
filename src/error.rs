//! Error types for bs-surface

use thiserror::Error;

/// Errors produced by the pricing engine and the surface sampler.
///
/// Both variants are deterministic validation failures raised at input
/// boundaries. Well-formed inputs never fail: the closed form is total over
/// the valid domain, and no NaN/Inf price is ever returned in place of an
/// error.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    /// A scalar input violates the pricing formula's domain.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter (e.g. "volatility")
        name: &'static str,
        /// The rejected value
        value: f64,
        /// The domain constraint that was violated
        reason: &'static str,
    },

    /// A grid axis contains no samples.
    #[error("{axis} axis is empty")]
    EmptyAxis {
        /// Which axis had zero length ("volatility" or "rate")
        axis: &'static str,
    },
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;

impl SurfaceError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
