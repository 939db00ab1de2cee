//! Axis ticks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A labelled position along an axis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tick {
    /// Position of the tick, in data coordinates.
    pub value: f64,
    /// Label of the tick.  Empty for minor ticks.
    pub label: String,
}

impl Tick {
    /// A labelled tick.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Tick { value, label: label.into() }
    }

    /// A tick without label.
    pub fn minor(value: f64) -> Self {
        Tick { value, label: String::new() }
    }

    /// Says whether the tick has no label.
    pub fn is_minor(&self) -> bool { self.label.is_empty() }
}

/// Generates the ticks of an axis.
pub trait Ticker {
    /// Returns the ticks for an axis spanning \[`min`, `max`\].
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick>;
}

/// Ticks on “nice” round numbers: about three labelled major ticks,
/// with unlabelled minor ticks in between.
///
/// Major ticks come first, then minor ones, each in increasing order.
/// An empty vector is returned when `max <= min` or the range is not
/// finite.
///
/// ```
/// use plot_extra::{DefaultTicks, Ticker};
/// let ticks = DefaultTicks.ticks(0., 50.);
/// let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
/// assert_eq!(labels, ["0", "20", "40", "", "", ""]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DefaultTicks;

const SUGGESTED_TICKS: f64 = 3.;

/// Slack, in steps, when deciding whether a multiple of the step is in
/// the range.
const STEP_EPS: f64 = 1e-9;

/// Round `x` to `decimals` digits after the decimal point (also
/// turning `-0.` into `0.`).
fn round_to(x: f64, decimals: i32) -> f64 {
    let p = 10f64.powi(decimals);
    (x * p).round() / p + 0.
}

/// Multiples of `step` in \[`min`, `max`\], rounded to `decimals`.
/// The slack only widens the candidates; rounded values outside of
/// the range are dropped.
fn multiples(min: f64, max: f64, step: f64, decimals: i32)
             -> impl Iterator<Item = f64> {
    let k0 = (min / step - STEP_EPS).ceil() as i64;
    let k1 = (max / step + STEP_EPS).floor() as i64;
    (k0 ..= k1).map(move |k| round_to(k as f64 * step, decimals))
        .filter(move |&v| min <= v && v <= max)
}

/// Shortest decimal form of `v`, in exponent form for magnitudes
/// below 1e-4 or from 1e8 on.
fn label(v: f64) -> String {
    let e = v.abs().log10().floor();
    if v != 0. && (e < -4. || e >= 8.) { format!("{v:e}") }
    else { v.to_string() }
}

impl Ticker for DefaultTicks {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        let span = max - min;
        if !(min < max && span.is_finite()) {
            warn!(min, max, "no ticks for an empty or non-finite range");
            return vec![]
        }
        let mut tens = 10f64.powf(span.log10().floor());
        while span / tens < SUGGESTED_TICKS - 1. {
            tens /= 10.;
        }
        let mult = match (span / tens / (SUGGESTED_TICKS - 1.)) as u32 {
            7 => 6,
            9 => 8,
            m => m,
        };
        let major = mult as f64 * tens;
        let minor = match mult {
            3 | 6 => major / 3.,
            5 => major / 5.,
            _ => major / 2.,
        };
        // All tick values are multiples of `minor`.
        let decimals = (-minor.log10().floor()).max(0.) as i32;

        let majors: Vec<f64> = multiples(min, max, major, decimals).collect();
        let mut ticks: Vec<Tick> = majors.iter()
            .map(|&v| Tick::new(v, label(v)))
            .collect();
        ticks.extend(multiples(min, max, minor, decimals)
                     .filter(|v| !majors.contains(v))
                     .map(Tick::minor));
        ticks
    }
}
