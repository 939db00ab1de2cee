//! Color map and axis with a break at a “high cut” value.
//!
//! Values up to the cut are the normal data; values above it form an
//! overflow region which gets its own colors ([`BrokenColorMap`]) and
//! a compressed part of the axis ([`BrokenScale`], [`BrokenTicks`]).

use std::marker::PhantomData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;
use crate::{ColorMap, DefaultTicks, Error, Normalizer, Result, Tick, Ticker};

/// Two color maps joined at a cut point: `base` below, `overflow`
/// above.
///
/// The cut point is not stored: it is `base.max()`, which
/// [`set_high_cut`](Self::set_high_cut) keeps equal to
/// `overflow.min()`.  A value equal to the cut gets its color from
/// `base`.
///
/// ```
/// use rgb::RGBA8;
/// use plot_extra::{BrokenColorMap, ColorMap, ColorRange, RGBColor};
/// let base = RGBA8::ylgnbu().gradient().color_map(0., 1.);
/// let overflow = RGBA8::reds().gradient().color_map(0., 1.);
/// let mut cmap = BrokenColorMap::new(base, overflow);
/// cmap.set_min(-10.);
/// cmap.set_high_cut(30.);
/// cmap.set_max(1e4);
/// assert_eq!(cmap.at(30.)?, cmap.base().at(30.)?);
/// assert_eq!(cmap.at(31.)?, cmap.overflow().at(31.)?);
/// # Ok::<(), plot_extra::Error>(())
/// ```
pub struct BrokenColorMap<B, O, Color> {
    base: B,
    overflow: O,
    color: PhantomData<Color>,
}

impl<B, O, Color> BrokenColorMap<B, O, Color>
where B: ColorMap<Color>, O: ColorMap<Color> {
    /// Join `base` and `overflow` as they are.  Call
    /// [`set_high_cut`](Self::set_high_cut) unless `base.max()`
    /// already equals `overflow.min()`.
    pub fn new(base: B, overflow: O) -> Self {
        BrokenColorMap { base, overflow, color: PhantomData }
    }

    /// Sets the cut point for switching between the base and overflow
    /// color maps.
    pub fn set_high_cut(&mut self, v: f64) {
        trace!(high_cut = v, "moving color map cut");
        self.base.set_max(v);
        self.overflow.set_min(v);
    }

    /// The color map used up to the cut point.
    pub fn base(&self) -> &B { &self.base }

    /// The color map used above the cut point.
    pub fn overflow(&self) -> &O { &self.overflow }

    /// Returns the base and overflow color maps.
    pub fn into_parts(self) -> (B, O) { (self.base, self.overflow) }
}

impl<B, O, Color> ColorMap<Color> for BrokenColorMap<B, O, Color>
where B: ColorMap<Color>, O: ColorMap<Color> {
    /// Returns the color of `v` in the overflow map if `v` is above
    /// the cut, in the base map otherwise.  Errors of the sub-maps are
    /// returned unchanged.
    fn at(&self, v: f64) -> Result<Color> {
        if v > self.base.max() { return self.overflow.at(v) }
        self.base.at(v)
    }

    fn min(&self) -> f64 { self.base.min() }

    /// Sets the minimum of the base map; the cut does not move.
    fn set_min(&mut self, v: f64) { self.base.set_min(v) }

    fn max(&self) -> f64 { self.overflow.max() }

    /// Sets the maximum of the overflow map; the cut does not move.
    fn set_max(&mut self, v: f64) { self.overflow.set_max(v) }

    /// The mean of the opacities of both maps.  Each map keeps
    /// rendering with its own opacity.
    fn alpha(&self) -> f64 {
        (self.base.alpha() + self.overflow.alpha()) / 2.
    }

    /// Sets the opacity of both maps.  Validation is left to them.
    fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.base.set_alpha(alpha)?;
        self.overflow.set_alpha(alpha)
    }

    /// Not supported: always returns [`Error::NotImplemented`].
    fn palette(&self, _n: usize) -> Result<Vec<Color>> {
        Err(Error::NotImplemented("BrokenColorMap::palette"))
    }
}


/// A linear axis scale with a break at `high_cut`.
///
/// \[`min`, `high_cut`\] is spread over the first `high_cut_fraction`
/// of the axis and \]`high_cut`, `max`\] over the rest.  As for
/// [`LinearScale`](crate::LinearScale), nothing is clamped or
/// validated: values outside \[`min`, `max`\] extrapolate and
/// `high_cut == min` or `high_cut == max` give infinite or NaN
/// positions.
///
/// ```
/// use plot_extra::{BrokenScale, Normalizer};
/// let s = BrokenScale { high_cut: 50., high_cut_fraction: 0.8 };
/// assert_eq!(s.normalize(0., 100., 25.), 0.4);
/// assert_eq!(s.normalize(0., 100., 50.), 0.8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrokenScale {
    /// Value at which the axis breaks.
    pub high_cut: f64,
    /// Fraction of the axis given to the values up to `high_cut`.
    pub high_cut_fraction: f64,
}

impl Normalizer for BrokenScale {
    fn normalize(&self, min: f64, max: f64, x: f64) -> f64 {
        let (cut, frac) = (self.high_cut, self.high_cut_fraction);
        if x > cut {
            frac + (1. - frac) * (x - cut) / (max - cut)
        } else {
            frac * (x - min) / (cut - min)
        }
    }
}

/// Ticks for an axis using a [`BrokenScale`]: the [`DefaultTicks`]
/// of \[`min`, `high_cut`\] followed by a single tick at `max`,
/// labelled with `max` rounded to an integer.
///
/// The last tick is always added, even when a tick already sits at
/// `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrokenTicks {
    /// Value at which the axis breaks.
    pub high_cut: f64,
}

impl Ticker for BrokenTicks {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        let mut ticks = DefaultTicks.ticks(min, self.high_cut);
        ticks.push(Tick::new(max, format!("{max:.0}")));
        ticks
    }
}


#[cfg(test)]
mod tests {
    use rgb::RGBA;
    use pretty_assertions::assert_eq;
    use crate::{ColorRange, LinearMap};
    use super::*;

    /// Every color is `(t, t, t)` with `t` the position in the range,
    /// so that colors identify the values they come from.
    struct Ramp(f64);

    impl ColorRange<RGBA<f64>> for Ramp {
        fn rgb(&self, t: f64) -> RGBA<f64> {
            RGBA { r: t, g: t, b: t, a: self.0 }
        }
    }

    type Map = LinearMap<Ramp, RGBA<f64>>;

    fn cmap() -> BrokenColorMap<Map, Map, RGBA<f64>> {
        let mut m = BrokenColorMap::new(Ramp(255.).color_map(0., 1.),
                                        Ramp(128.).color_map(0., 1.));
        m.set_min(0.);
        m.set_high_cut(10.);
        m.set_max(110.);
        m
    }

    #[test]
    fn high_cut_syncs_sub_maps() {
        let mut m = cmap();
        assert_eq!(m.base().max(), 10.);
        assert_eq!(m.overflow().min(), 10.);
        m.set_high_cut(20.);
        assert_eq!(m.base().max(), 20.);
        assert_eq!(m.overflow().min(), 20.);
        assert_eq!((m.min(), m.max()), (0., 110.));
    }

    #[test]
    fn at_below_cut_uses_base() {
        let m = cmap();
        for v in [0., 2.5, 9.999, 10.] {
            assert_eq!(m.at(v), m.base().at(v));
        }
        assert_eq!(m.at(10.).unwrap().a, 255.);
    }

    #[test]
    fn at_above_cut_uses_overflow() {
        let m = cmap();
        for v in [10.001, 60., 110.] {
            assert_eq!(m.at(v), m.overflow().at(v));
        }
        assert_eq!(m.at(60.).unwrap().r, 0.5);
    }

    #[test]
    fn at_errors_pass_through() {
        let m = cmap();
        assert_eq!(m.at(111.),
                   Err(Error::OutOfRange { value: 111., min: 10., max: 110. }));
        assert_eq!(m.at(-1.),
                   Err(Error::OutOfRange { value: -1., min: 0., max: 10. }));
    }

    #[test]
    fn unsynced_maps_follow_base_max() {
        // Without `set_high_cut`, values above `base.max()` but below
        // `overflow.min()` are rejected by the overflow map.
        let m = BrokenColorMap::new(Ramp(255.).color_map(0., 10.),
                                    Ramp(255.).color_map(20., 30.));
        assert!(m.at(10.).is_ok());
        assert_eq!(m.at(15.),
                   Err(Error::OutOfRange { value: 15., min: 20., max: 30. }));
    }

    #[test]
    fn min_max_setters_keep_cut() {
        let mut m = cmap();
        m.set_max(500.);
        m.set_min(-5.);
        assert_eq!(m.max(), 500.);
        assert_eq!(m.overflow().max(), 500.);
        assert_eq!(m.min(), -5.);
        assert_eq!(m.base().min(), -5.);
        assert_eq!(m.base().max(), 10.);
        assert_eq!(m.overflow().min(), 10.);
    }

    #[test]
    fn alpha_is_mean() {
        let mut m = cmap();
        assert_eq!(m.alpha(), 1.);
        m.set_alpha(0.25).unwrap();
        assert_eq!(m.alpha(), 0.25);
        assert_eq!(m.base().alpha(), 0.25);
        assert_eq!(m.overflow().alpha(), 0.25);
        let (mut base, overflow) = m.into_parts();
        base.set_alpha(0.75).unwrap();
        let m = BrokenColorMap::new(base, overflow);
        assert_eq!(m.alpha(), 0.5);
    }

    #[test]
    fn invalid_alpha() {
        let mut m = cmap();
        assert_eq!(m.set_alpha(2.), Err(Error::InvalidAlpha(2.)));
        assert_eq!(m.alpha(), 1.);
    }

    #[test]
    fn palette_not_implemented() {
        let m = cmap();
        for n in [0, 1, 256] {
            assert!(matches!(m.palette(n), Err(Error::NotImplemented(_))));
        }
    }

    #[test]
    fn boxed_sub_maps() {
        let base: Box<dyn ColorMap<RGBA<f64>>> =
            Box::new(Ramp(255.).color_map(0., 1.));
        let overflow: Box<dyn ColorMap<RGBA<f64>>> =
            Box::new(Ramp(255.).color_map(0., 1.));
        let mut m = BrokenColorMap::new(base, overflow);
        m.set_high_cut(0.5);
        assert_eq!(m.at(0.75).unwrap().r, 0.5);
    }

    const SCALE: BrokenScale =
        BrokenScale { high_cut: 50., high_cut_fraction: 0.8 };

    #[test]
    fn normalize() {
        assert_eq!(SCALE.normalize(0., 100., 50.), 0.8);
        assert!((SCALE.normalize(0., 100., 75.) - 0.9).abs() < 1e-15);
        assert_eq!(SCALE.normalize(0., 100., 25.), 0.4);
        assert_eq!(SCALE.normalize(0., 100., 0.), 0.);
        assert!((SCALE.normalize(0., 100., 100.) - 1.).abs() < 1e-15);
    }

    #[test]
    fn normalize_extrapolates() {
        assert_eq!(SCALE.normalize(0., 100., -50.), -0.8);
        assert!((SCALE.normalize(0., 100., 150.) - 1.2).abs() < 1e-15);
    }

    #[test]
    fn normalize_degenerate() {
        assert_eq!(SCALE.normalize(0., 50., 60.), f64::INFINITY);
        assert!(SCALE.normalize(50., 100., 50.).is_nan());
        assert_eq!(SCALE.normalize(50., 100., 40.), f64::NEG_INFINITY);
    }

    #[test]
    fn broken_ticks() {
        let mut expected = DefaultTicks.ticks(0., 50.);
        expected.push(Tick::new(100., "100"));
        assert_eq!(BrokenTicks { high_cut: 50. }.ticks(0., 100.), expected);
    }

    #[test]
    fn broken_ticks_label_rounds() {
        let ticks = BrokenTicks { high_cut: 50. }.ticks(0., 1234.6);
        let last = ticks.last().unwrap();
        assert_eq!(last.value, 1234.6);
        assert_eq!(last.label, "1235");
    }

    #[test]
    fn broken_ticks_keep_duplicate() {
        // The default ticks of [0, 50] already end with a tick at 50.
        let ticks = BrokenTicks { high_cut: 50. }.ticks(0., 50.);
        let at_50 = ticks.iter().filter(|t| t.value == 50.).count();
        assert_eq!(at_50, 2);
    }

    #[test]
    fn broken_ticks_none_in_overflow() {
        let cut = 49.999_999_995;
        let ticks = BrokenTicks { high_cut: cut }.ticks(0., 100.);
        let (last, ordinary) = ticks.split_last().unwrap();
        assert!(ordinary.iter().all(|t| t.value <= cut));
        assert_eq!(*last, Tick::new(100., "100"));
    }

    #[test]
    fn broken_ticks_empty_range() {
        let ticks = BrokenTicks { high_cut: 0. }.ticks(0., 10.);
        assert_eq!(ticks, vec![Tick::new(10., "10")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn scale_from_json() {
        let s: BrokenScale = serde_json::from_str(
            r#"{"high_cut": 50, "high_cut_fraction": 0.8}"#).unwrap();
        assert_eq!(s, SCALE);
        let t: BrokenTicks = serde_json::from_str(r#"{"high_cut": 5}"#)
            .unwrap();
        assert_eq!(t, BrokenTicks { high_cut: 5. });
    }
}
