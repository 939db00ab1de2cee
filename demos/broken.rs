use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tracing_subscriber::EnvFilter;
use plot_extra::{BrokenColorMap, BrokenScale, BrokenTicks, ColorMap,
                 ColorRange, Normalizer, RGBColor, Ticker};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// One cell per value, `width` pixels wide, colored by `cmap`, with
/// the grayscale version of the colors below.
fn color_bar(fh: &mut impl Write, cmap: &impl ColorMap<RGB8>,
             values: impl Iterator<Item = f64>, width: u32,
             comment: &str) -> Result<(), Err> {
    let colors = values.map(|v| cmap.at(v)).collect::<Result<Vec<_>, _>>()?;
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in &colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in &colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c.to_gray()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Labels of `ticks` placed along an axis `len` pixels long.
fn axis(fh: &mut impl Write, scale: &impl Normalizer,
        ticks: &impl Ticker, min: f64, max: f64,
        len: f64) -> Result<(), Err> {
    writeln!(fh, "<div style=\"position: relative; width: {len}px; \
                  height: 20px; border-top: 1px solid black\">")?;
    for t in ticks.ticks(min, max).iter().filter(|t| !t.is_minor()) {
        let x = len * scale.normalize(min, max, t.value);
        writeln!(fh, "  <span style=\"position: absolute; left: {x:.1}px\"\
                      >{}</span>", t.label)?;
    }
    writeln!(fh, "</div><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    const MIN: f64 = 0.;
    const HIGH_CUT: f64 = 50.;
    const MAX: f64 = 1000.;
    const N: usize = 200;

    let base = RGB8::ylgnbu().gradient().color_map(0., 1.);
    let overflow = RGB8::reds().gradient().color_map(0., 1.);
    let mut cmap = BrokenColorMap::new(base, overflow);
    cmap.set_min(MIN);
    cmap.set_high_cut(HIGH_CUT);
    cmap.set_max(MAX);

    let scale = BrokenScale { high_cut: HIGH_CUT, high_cut_fraction: 0.8 };
    let ticks = BrokenTicks { high_cut: HIGH_CUT };

    let mut fh = BufWriter::new(File::create("broken.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>plot-extra: broken color map</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Linear in the values</h3>")?;
    let last = (N - 1) as f64;
    color_bar(&mut fh, &cmap,
              (0 .. N).map(|i| MIN + (MAX - MIN) * i as f64 / last), 2,
              &format!("[{MIN}, {MAX}], cut at {HIGH_CUT}"))?;

    // Invert the broken scale so that each cell covers the same
    // length of axis.
    writeln!(fh, "<h3>Broken axis</h3>")?;
    let frac = scale.high_cut_fraction;
    let value = |s: f64| {
        if s <= frac { MIN + (HIGH_CUT - MIN) * s / frac }
        else { HIGH_CUT + (MAX - HIGH_CUT) * (s - frac) / (1. - frac) } };
    color_bar(&mut fh, &cmap, (0 .. N).map(|i| value(i as f64 / last)), 2,
              &format!("{:.0}% of the axis below the cut", 100. * frac))?;
    axis(&mut fh, &scale, &ticks, MIN, MAX, (2 * N) as f64)?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
