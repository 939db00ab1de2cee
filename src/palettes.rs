//! Brewer color schemes, see <https://colorbrewer2.org/>.
//!
//! Only the largest variant of each scheme is kept: it is meant to be
//! turned into a [`PaletteGradient`] and used as a color map.

use std::marker::PhantomData;
use lazy_static::lazy_static;
use crate::{ColorRange, Gradient, RGBColor};

pub(crate) mod ty;
use ty::*;

lazy_static! {
    pub(crate) static ref BLUES: PaletteData = PaletteData::from_hex(
        "Blues", PaletteType::Seq,
        &[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6,
          0x2171b5, 0x08519c, 0x08306b]);

    pub(crate) static ref GREENS: PaletteData = PaletteData::from_hex(
        "Greens", PaletteType::Seq,
        &[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d,
          0x238b45, 0x006d2c, 0x00441b]);

    pub(crate) static ref ORANGES: PaletteData = PaletteData::from_hex(
        "Oranges", PaletteType::Seq,
        &[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913,
          0xd94801, 0xa63603, 0x7f2704]);

    pub(crate) static ref REDS: PaletteData = PaletteData::from_hex(
        "Reds", PaletteType::Seq,
        &[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c,
          0xcb181d, 0xa50f15, 0x67000d]);

    pub(crate) static ref GREYS: PaletteData = PaletteData::from_hex(
        "Greys", PaletteType::Seq,
        &[0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373,
          0x525252, 0x252525, 0x000000]);

    pub(crate) static ref YLGNBU: PaletteData = PaletteData::from_hex(
        "YlGnBu", PaletteType::Seq,
        &[0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0,
          0x225ea8, 0x253494, 0x081d58]);

    pub(crate) static ref YLORRD: PaletteData = PaletteData::from_hex(
        "YlOrRd", PaletteType::Seq,
        &[0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a,
          0xe31a1c, 0xbd0026, 0x800026]);

    pub(crate) static ref RDBU: PaletteData = PaletteData::from_hex(
        "RdBu", PaletteType::Div,
        &[0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7,
          0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac, 0x053061]);
}

/// A named list of colors.
///
/// Created by the scheme constructors of [`RGBColor`], e.g.
/// [`RGBColor::blues`].
#[derive(Clone, Copy)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    pub(crate) fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }

    /// The scheme name, e.g. `"YlGnBu"`.
    pub fn name(&self) -> &'static str { self.palette.name }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 2 colors.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Says whether the palette is `Seq`uential or `Div`ergent.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the RGB colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns a gradient going through all the colors of the
    /// palette, evenly spaced on \[0, 1\].
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient {
            gradients: self.palette.rgb.windows(2)
                .map(|c| { let c0 = Color::from_rgba(c[0]);
                           let c1 = Color::from_rgba(c[1]);
                           c0.gradient(&c1) })
                .collect() }
    }
}

/// A gradient based on a [`Palette`].
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>, // Invariant: non-empty
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unchecked(tn.fract()) }
        else { self.gradients[n-1].rgb_unchecked(1.) }
    }
}

#[cfg(test)]
mod tests {
    use rgb::RGB8;
    use super::*;

    #[test]
    fn palettes_have_colors() {
        for p in [RGB8::blues(), RGB8::greens(), RGB8::oranges(),
                  RGB8::reds(), RGB8::greys(), RGB8::ylgnbu(),
                  RGB8::ylorrd()] {
            assert_eq!(p.len(), 9, "{}", p.name());
            assert_eq!(p.typ(), PaletteType::Seq);
        }
        assert_eq!(RGB8::rdbu().len(), 11);
        assert_eq!(RGB8::rdbu().typ(), PaletteType::Div);
    }

    #[test]
    fn hex_decoding() {
        let c = RGB8::reds().colors();
        assert_eq!(c[0], RGB8::new(0xff, 0xf5, 0xf0));
        assert_eq!(c[8], RGB8::new(0x67, 0x00, 0x0d));
    }

    #[test]
    fn gradient_goes_through_colors() {
        let p = RGB8::greys();
        let g = p.gradient();
        let colors = p.colors();
        assert_eq!(g.rgb(0.), colors[0]);
        assert_eq!(g.rgb(0.5), colors[4]);
        assert_eq!(g.rgb(1.), colors[8]);
        assert_eq!(g.rgb(2.), colors[8]);
    }
}
