//! Color maps and axis helpers for plots with an overflow region.
//!
//! - [`BrokenColorMap`] glues a “base” and an “overflow” [`ColorMap`]
//!   together at a cut point.
//! - [`BrokenScale`] and [`BrokenTicks`] lay out an axis whose range
//!   above the same cut point is compressed.
//!
//! Color maps are built from any [`ColorRange`] with [`LinearMap`]:
//! [`Hue`], two-color [`Gradient`]s or the [`Palette`]s by
//! [Cynthia Brewer](https://colorbrewer2.org/) shipped with the crate.
//!
//! ```
//! use rgb::RGBA;
//! use plot_extra::{BrokenColorMap, ColorMap, ColorRange, RGBColor};
//! let base = RGBA::<f64>::blues().gradient().color_map(0., 1.);
//! let overflow = RGBA::<f64>::reds().gradient().color_map(0., 1.);
//! let mut cmap = BrokenColorMap::new(base, overflow);
//! cmap.set_min(0.);
//! cmap.set_high_cut(50.);
//! cmap.set_max(1000.);
//! assert!(cmap.at(25.).is_ok());
//! assert!(cmap.at(1001.).is_err());
//! ```

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod broken;
mod colormap;
mod error;
mod palettes;
mod scale;
mod ticks;

pub use broken::{BrokenColorMap, BrokenScale, BrokenTicks};
pub use colormap::{ColorMap, LinearMap};
pub use error::{Error, Result};
pub use palettes::{Palette, PaletteGradient};
pub use palettes::ty::PaletteType;
pub use scale::{LinearScale, Normalizer};
pub use ticks::{DefaultTicks, Tick, Ticker};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Turn the range into a [`ColorMap`] over the values \[`min`,
    /// `max`\], fully opaque.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use plot_extra::{ColorMap, ColorRange, RGBColor};
    /// let cmap = RGB8::HUE.color_map(-1., 1.);
    /// assert_eq!(cmap.min(), -1.);
    /// assert_eq!(cmap.at(0.).unwrap(), RGB8::HUE.rgb(0.5));
    /// ```
    fn color_map(self, min: f64, max: f64) -> LinearMap<Self, Color>
    where Self: Sized, Color: RGBColor {
        let mut m = LinearMap::new(self);
        m.set_min(min);
        m.set_max(max);
        m
    }
}

impl<Color, R> ColorRange<Color> for &R where R: ColorRange<Color> {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(*self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let t = k as f64 / self.flast;
            let mut x = ((self.last - k) as f64 * self.a
                         + k as f64 * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }

    fn remaining(&self) -> usize { (self.j + 1).saturating_sub(self.i) }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.rgb(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.rgb(self.j);
        if self.j == 0 { self.i = 1 } else { self.j -= 1 }
        Some(item)
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// The full hue circle, `t` ∈ \[0., 1.\] going once around it.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use plot_extra::{RGBColor, ColorRange};
    /// assert_eq!(RGB8::HUE.rgb(0.), RGB8::new(255, 0, 0));
    /// ```
    const HUE: Hue<Self> = Hue { color: PhantomData };

    /// Return a gradient from color `c0` to color `c1`, interpolated
    /// in the CIE LCh color space.
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(self.to_rgba());
        let lch1 = Lch::from_rgb(c1.to_rgba());
        // Go round the hue circle the short way.
        let dh = {
            let dh = lch1.h - lch0.h;
            if dh > PI { dh - TWO_PI }
            else if dh < -PI { dh + TWO_PI }
            else { dh } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// Brewer "Light to dark blue" sequential scheme.
    #[inline]
    fn blues() -> Palette<Self> { Palette::new(&palettes::BLUES) }

    /// Brewer "Light to dark green" sequential scheme.
    #[inline]
    fn greens() -> Palette<Self> { Palette::new(&palettes::GREENS) }

    /// Brewer "Light to dark orange" sequential scheme.
    #[inline]
    fn oranges() -> Palette<Self> { Palette::new(&palettes::ORANGES) }

    /// Brewer "Light to dark red" sequential scheme.  A natural
    /// overflow map next to a cold base map.
    #[inline]
    fn reds() -> Palette<Self> { Palette::new(&palettes::REDS) }

    /// Brewer "Light to dark gray" sequential scheme.
    #[inline]
    fn greys() -> Palette<Self> { Palette::new(&palettes::GREYS) }

    /// Brewer "Light yellow to green to dark blue" sequential scheme.
    #[inline]
    fn ylgnbu() -> Palette<Self> { Palette::new(&palettes::YLGNBU) }

    /// Brewer "Light yellow to orange to dark red" sequential scheme.
    #[inline]
    fn ylorrd() -> Palette<Self> { Palette::new(&palettes::YLORRD) }

    /// Brewer "Dark red to light to dark blue" diverging scheme.
    #[inline]
    fn rdbu() -> Palette<Self> { Palette::new(&palettes::RDBU) }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = self.to_rgba();
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

// Integer channels are rounded to the nearest value; `as` saturates
// out of range components.
impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: c.r.round() as u16,  g: c.g.round() as u16,
                b: c.b.round() as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: c.r.round() as u16,  g: c.g.round() as u16,
                 b: c.b.round() as u16, a: c.a.round() as u16 }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness.
    l: f64,
    /// The chroma.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let f = |t: f64| if t > EPS { t.powf(C0) } else { C1 * t + C2 };
        let fx = f(0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b);
        let fy = f(0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b);
        let fz = f(0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b);
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = b.atan2(a);
        Lch { l: 116. * fy - 16., c: a.hypot(b),
              h: if h < 0. { h + TWO_PI } else { h },
              a: c.a }
    }

    fn to_rgb(self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let f = |t: f64| if t > EPS0 { t * t * t } else { C0 * (t - C1) };
        let fy = (self.l + 16.) / 116.;
        let fx = f(self.c * self.h.cos() / 500. + fy);
        let fz = f(fy - self.c * self.h.sin() / 200.);
        let fy = f(fy);
        RGBA { r: 3.0215932  * fx - 1.6168777 * fy - 0.4047152 * fz,
               g: -0.9437222 * fx + 1.9161365 * fy + 0.0275856 * fz,
               b: 0.0693906  * fx - 0.2290271 * fy + 1.1596365 * fz,
               a: self.a }
    }
}

/// Hue
///
/// Created with [`RGBColor::HUE`].
pub struct Hue<Color> { color: PhantomData<Color> }

impl<Color: RGBColor> ColorRange<Color> for Hue<Color> {
    fn rgb(&self, t: f64) -> Color {
        let t = 6. * t;
        let f = 255. * t.fract();
        let rgb = match t.trunc().rem_euclid(6.) as u8 {
            0 => [255., f, 0.],
            1 => [255. - f, 255., 0.],
            2 => [0., 255., f],
            3 => [0., 255. - f, 255.],
            4 => [f, 0., 255.],
            _ => [255., 0., 255. - f],
        };
        Color::from_rgba(RGBA{ r: rgb[0], g: rgb[1], b: rgb[2], a: 255. })
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - first color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    pub(crate) fn rgb_unchecked(&self, t: f64) -> Color {
        let lch = Lch { l: self.c0.l + t * self.dc.l,
                        c: self.c0.c + t * self.dc.c,
                        h: self.c0.h + t * self.dc.h,
                        a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lch.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unchecked(t.clamp(0., 1.)) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_range() {
        for (i, (x, c)) in RGB8::HUE.range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(RGB8::HUE.rgb(x), c);
        }
    }

    #[test]
    fn range_len() {
        let r = RGB8::HUE.range(0., 1., 5);
        assert_eq!(r.len(), 5);
        assert_eq!(RGB8::HUE.range(0., 1., 0).count(), 0);
        let mut r = RGB8::HUE.range(0., 1., 3);
        r.next_back();
        assert_eq!(r.len(), 2);
        assert_eq!(r.rev().map(|(x, _)| x).collect::<Vec<_>>(), [0.5, 0.]);
    }

    #[test]
    fn range_by_reference() {
        let g = RGB8::new(255, 0, 0).gradient(&RGB8::new(0, 0, 255));
        let colors: Vec<RGB8> = (&g).range(0., 1., 2)
            .map(|(_, c)| c).collect();
        assert_eq!(colors, [g.rgb(0.), g.rgb(1.)]);
    }

    #[test]
    fn gradient_endpoints() {
        let c0 = RGB8::new(94, 0, 99);
        let c1 = RGB8::new(255, 235, 170);
        let g = c0.gradient(&c1);
        assert_eq!(g.rgb(0.), c0);
        assert_eq!(g.rgb(1.), c1);
        assert_eq!(g.rgb(-3.), c0);
        assert_eq!(g.rgb(7.), c1);
    }

    #[test]
    fn gray() {
        let c = RGB8::new(255, 255, 255).to_gray();
        assert_eq!(c, RGB8::new(255, 255, 255));
        assert_eq!(RGB8::new(255, 0, 0).to_gray(), RGB8::new(76, 76, 76));
    }
}
