use super::hex::{expand_shorthand, is_hex_code};
use super::number::{parse_int_prefix, to_hex_string};
use crate::config::ColorConfig;
use crate::error::{ColorError, Result};

/// Running RGB value for the gradient walk. Channels are fractional and
/// only rounded when formatted.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Channels {
    r: f64,
    g: f64,
    b: f64,
}

impl Channels {
    /// Every computed triple is stored as absolute values.
    fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.abs(),
            g: g.abs(),
            b: b.abs(),
        }
    }

    /// Two-character chunks after the first character, parsed as hex.
    /// Not clamped; a missing chunk becomes NaN.
    fn from_hex(code: &str) -> Self {
        let chars: Vec<char> = code.chars().skip(1).collect();
        let mut chunks = chars
            .chunks(2)
            .map(|pair| parse_int_prefix(&pair.iter().collect::<String>(), 16));
        let mut next = || chunks.next().unwrap_or(f64::NAN);
        let (r, g, b) = (next(), next(), next());
        Self { r, g, b }
    }

    fn diff(&self, other: &Channels) -> Self {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }

    fn divided_by(&self, n: f64) -> Self {
        Self::new(self.r / n, self.g / n, self.b / n)
    }

    /// Move each channel by `step` toward `target`, judged by the current
    /// value's side of the target.
    fn approach(&self, target: &Channels, step: &Channels) -> Self {
        let toward = |v: f64, t: f64, s: f64| if v > t { v - s } else { v + s };
        Self::new(
            toward(self.r, target.r, step.r),
            toward(self.g, target.g, step.g),
            toward(self.b, target.b, step.b),
        )
    }

    fn to_hex(self) -> String {
        format!(
            "#{}{}{}",
            pad_channel(self.r),
            pad_channel(self.g),
            pad_channel(self.b)
        )
    }
}

/// Round half up, render as hex, left-pad to two characters.
fn pad_channel(v: f64) -> String {
    let digits = to_hex_string((v + 0.5).floor());
    if digits.len() < 2 {
        format!("{:0>2}", digits)
    } else {
        digits
    }
}

/// Build `n + 2` colors from `c1` to `c2` with `n` intermediate steps.
///
/// e.g. `colors_between("#ff0000", "#ffffff", 10)` ->
/// `#ff0000, #ff1717, #ff2e2e, ... #ffe8e8, #ffffff`.
///
/// Each step moves the running value by |c1 - c2| / (n + 1) per channel,
/// in the direction of `c2` as seen from the running value itself. The
/// endpoints are always `c1` and `c2`.
pub fn colors_between(c1: &str, c2: &str, n: i64, config: &ColorConfig) -> Result<Vec<String>> {
    if n < 0 {
        return Err(ColorError::invalid_argument(
            "n",
            format!("step count must be non-negative, got {}", n),
        ));
    }

    let c1 = expand_shorthand(c1);
    let c2 = expand_shorthand(c2);
    if config.strict {
        for code in [&c1, &c2] {
            if !is_hex_code(code, 6) {
                return Err(ColorError::malformed(code, "expected #rrggbb or #rgb"));
            }
        }
    }

    let start = Channels::from_hex(&c1);
    let end = Channels::from_hex(&c2);
    let step = start.diff(&end).divided_by(n as f64 + 1.0);

    let mut out = vec![start.to_hex()];
    let mut current = start;
    for _ in 0..n {
        current = current.approach(&end, &step);
        out.push(current.to_hex());
    }
    out.push(end.to_hex());

    Ok(out)
}
