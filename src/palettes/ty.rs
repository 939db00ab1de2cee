pub(crate) use rgb::RGBA;

/// A Colormap with certain characteristics.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
    pub(crate) typ: PaletteType,
}

impl PaletteData {
    /// Palette from `0xRRGGBB` colors, fully opaque.
    pub(crate) fn from_hex(name: &'static str, typ: PaletteType,
                           hex: &[u32]) -> Self {
        debug_assert!(hex.len() >= 2);
        let channel = |c: u32, shift: u32| ((c >> shift) & 0xff) as f64;
        let rgb = hex.iter()
            .map(|&c| RGBA { r: channel(c, 16), g: channel(c, 8),
                             b: channel(c, 0), a: 255. })
            .collect();
        PaletteData { name, rgb, typ }
    }
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.  The critical class or break in the middle of the legend
    /// is emphasized with light colors and low and high extremes are
    /// emphasized with dark colors that have contrasting hues.
    Div,
}
