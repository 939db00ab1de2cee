//! Error type shared by the color maps.

use thiserror::Error;

/// Errors reported by [`ColorMap`](crate::ColorMap) implementations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The value looked up lies outside of the map range (or is NaN).
    #[error("value {value} is outside of the color map range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    /// The color map range is empty or reversed.
    #[error("invalid color map range: max ({max}) <= min ({min})")]
    InvalidRange { min: f64, max: f64 },

    /// Opacities must lie in \[0, 1\].
    #[error("alpha ({0}) is not in [0, 1]")]
    InvalidAlpha(f64),

    /// The operation is not supported by this color map.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Convenience type alias for Results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
