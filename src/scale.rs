//! Axis scales.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps a value to its fractional position along an axis.
pub trait Normalizer {
    /// Returns the position of `x` on an axis spanning \[`min`,
    /// `max`\], `0.` being the start of the axis and `1.` its end.
    /// Values outside \[`min`, `max`\] are not clamped.
    fn normalize(&self, min: f64, max: f64, x: f64) -> f64;
}

/// Plain linear scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearScale;

impl Normalizer for LinearScale {
    #[inline]
    fn normalize(&self, min: f64, max: f64, x: f64) -> f64 {
        (x - min) / (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear() {
        assert_eq!(LinearScale.normalize(0., 10., 2.5), 0.25);
        assert_eq!(LinearScale.normalize(-1., 1., 3.), 2.);
        assert!(LinearScale.normalize(1., 1., 1.).is_nan());
    }
}
