//! Color maps: colors attached to a range of values.

use std::marker::PhantomData;
use crate::{ColorRange, Error, RGBColor, Result};

/// A map from values in \[[`min`](Self::min), [`max`](Self::max)\]
/// to colors, with an adjustable opacity.
pub trait ColorMap<Color> {
    /// Returns the color associated with the value `v`.  An error is
    /// returned if `v` is not between [`min`](Self::min) and
    /// [`max`](Self::max).
    fn at(&self, v: f64) -> Result<Color>;

    /// Returns the current minimum value of the map.
    fn min(&self) -> f64;

    /// Sets the minimum value of the map.
    fn set_min(&mut self, v: f64);

    /// Returns the current maximum value of the map.
    fn max(&self) -> f64;

    /// Sets the maximum value of the map.
    fn set_max(&mut self, v: f64);

    /// Returns the opacity of the map, `0.` being transparent and
    /// `1.` completely opaque.
    fn alpha(&self) -> f64;

    /// Sets the opacity of the map.  Fails with
    /// [`Error::InvalidAlpha`] if `alpha` is not in \[0, 1\].
    fn set_alpha(&mut self, alpha: f64) -> Result<()>;

    /// Returns `n` colors sampled from the map.
    fn palette(&self, n: usize) -> Result<Vec<Color>>;
}

impl<Color, M> ColorMap<Color> for Box<M>
where M: ColorMap<Color> + ?Sized {
    fn at(&self, v: f64) -> Result<Color> { (**self).at(v) }
    fn min(&self) -> f64 { (**self).min() }
    fn set_min(&mut self, v: f64) { (**self).set_min(v) }
    fn max(&self) -> f64 { (**self).max() }
    fn set_max(&mut self, v: f64) { (**self).set_max(v) }
    fn alpha(&self) -> f64 { (**self).alpha() }
    fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        (**self).set_alpha(alpha)
    }
    fn palette(&self, n: usize) -> Result<Vec<Color>> {
        (**self).palette(n)
    }
}

/// A [`ColorMap`] spreading a [`ColorRange`] linearly over
/// \[`min`, `max`\].
///
/// Created with [`LinearMap::new`] (range \[0, 1\]) or
/// [`ColorRange::color_map`].  The bounds are not validated when set:
/// lookups fail with [`Error::InvalidRange`] as long as `max <= min`.
///
/// ```
/// use rgb::RGBA8;
/// use plot_extra::{ColorMap, ColorRange, RGBColor};
/// let mut cmap = RGBA8::ylgnbu().gradient().color_map(0., 100.);
/// cmap.set_alpha(0.5).unwrap();
/// assert_eq!(cmap.at(100.).unwrap().a, 128);
/// assert!(cmap.at(101.).is_err());
/// ```
pub struct LinearMap<R, Color> {
    range: R,
    min: f64,
    max: f64,
    alpha: f64,
    color: PhantomData<Color>,
}

impl<R, Color> LinearMap<R, Color>
where R: ColorRange<Color>, Color: RGBColor {
    /// Color map over \[0, 1\], fully opaque.
    pub fn new(range: R) -> Self {
        LinearMap { range, min: 0., max: 1., alpha: 1.,
                    color: PhantomData }
    }

    /// The underlying color range.
    pub fn color_range(&self) -> &R { &self.range }

    fn check_range(&self) -> Result<()> {
        if self.max > self.min { Ok(()) }
        else { Err(Error::InvalidRange { min: self.min, max: self.max }) }
    }

    fn with_alpha(&self, c: Color) -> Color {
        if self.alpha == 1. { return c }
        let mut rgba = c.to_rgba();
        rgba.a *= self.alpha;
        Color::from_rgba(rgba)
    }
}

impl<R, Color> ColorMap<Color> for LinearMap<R, Color>
where R: ColorRange<Color>, Color: RGBColor {
    fn at(&self, v: f64) -> Result<Color> {
        self.check_range()?;
        if !(self.min ..= self.max).contains(&v) {
            return Err(Error::OutOfRange { value: v, min: self.min,
                                           max: self.max })
        }
        let t = (v - self.min) / (self.max - self.min);
        Ok(self.with_alpha(R::rgb(&self.range, t)))
    }

    fn min(&self) -> f64 { self.min }

    fn set_min(&mut self, v: f64) { self.min = v }

    fn max(&self) -> f64 { self.max }

    fn set_max(&mut self, v: f64) { self.max = v }

    fn alpha(&self) -> f64 { self.alpha }

    fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        if !(0. ..= 1.).contains(&alpha) {
            return Err(Error::InvalidAlpha(alpha))
        }
        self.alpha = alpha;
        Ok(())
    }

    /// Returns `n` colors evenly spaced on \[`min`, `max`\], both
    /// bounds included.
    fn palette(&self, n: usize) -> Result<Vec<Color>> {
        self.check_range()?;
        let colors = <&R as ColorRange<Color>>::range(
            &self.range, self.min, self.max, n);
        Ok(colors.map(|(_, c)| self.with_alpha(c)).collect())
    }
}
