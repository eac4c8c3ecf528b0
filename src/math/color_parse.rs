use csscolorparser::Color;

use super::composite::{channel_hex, composite_over_white};
use super::hex::{expand_shorthand, is_hex_code};
use super::number::{parse_float_prefix, parse_int_prefix};
use crate::config::ColorConfig;
use crate::error::{ColorError, Result};

/// Names resolved before any parsing. Constants are returned verbatim.
const NAMED_COLORS: [(&str, &str); 10] = [
    ("red", "#ff0000"),
    ("blue", "#0000ff"),
    ("green", "#00ff00"),
    ("pink", "#FFC0CB"),
    ("yellow", "#FFFF00"),
    ("orange", "#FFA500"),
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("gray", "#808080"),
    ("purple", "#800080"),
];

/// Exact, case-sensitive lookup in the named-color table.
pub fn named_hex(name: &str) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

/// Convert a named, hex or `rgb()`/`rgba()` color to 6-digit hex.
/// Functional forms with alpha are composited over white,
/// e.g. `rgba(255,0,0,.5)` -> `#ff7f7f`.
///
/// Resolution order: named table, `#rrggbb` passthrough, `#rgb` expansion,
/// functional-form fallback. In lenient mode anything else falls through to
/// the functional parser and may produce garbage channels; strict mode
/// returns `MalformedColor` instead.
pub fn code_to_hex(color: &str, config: &ColorConfig) -> Result<String> {
    if let Some(hex) = named_hex(color) {
        return Ok(hex.to_string());
    }
    if config.strict {
        return code_to_hex_strict(color);
    }

    if color.contains('#') {
        match color.chars().count() {
            7 => return Ok(color.to_string()),
            4 => return Ok(expand_shorthand(color)),
            _ => {}
        }
    }

    let values = split_functional(color);
    let component = |i: usize| values.get(i).map(String::as_str);

    let a = match component(3) {
        Some(v) if !v.is_empty() => parse_float_prefix(v),
        _ => 1.0,
    };
    let channel = |i: usize| {
        let raw = component(i).map_or(f64::NAN, |v| parse_int_prefix(v, 10));
        composite_over_white(raw, a)
    };
    let (r, g, b) = (channel(0), channel(1), channel(2));

    if r.is_nan() || g.is_nan() || b.is_nan() {
        log::debug!("code_to_hex: fallback parse of {:?} produced NaN channels", color);
    }

    Ok(format!("#{}{}{}", channel_hex(r), channel_hex(g), channel_hex(b)))
}

/// Strip the first `rgb(`/`rgba(` and the first `)`, drop every whitespace
/// and `+` character, then split on commas.
fn split_functional(color: &str) -> Vec<String> {
    let mut s = color.to_string();
    let prefix = match (s.find("rgba("), s.find("rgb(")) {
        (Some(a), Some(b)) if b < a => Some((b, 4)),
        (Some(a), _) => Some((a, 5)),
        (None, Some(b)) => Some((b, 4)),
        (None, None) => None,
    };
    if let Some((pos, len)) = prefix {
        s.replace_range(pos..pos + len, "");
    }
    if let Some(pos) = s.find(')') {
        s.remove(pos);
    }
    s.retain(|c| !c.is_whitespace() && c != '+');
    s.split(',').map(str::to_string).collect()
}

fn code_to_hex_strict(color: &str) -> Result<String> {
    if color.contains('#') {
        if is_hex_code(color, 6) {
            return Ok(color.to_string());
        }
        if is_hex_code(color, 3) {
            return Ok(expand_shorthand(color));
        }
        return Err(ColorError::malformed(color, "expected #rrggbb or #rgb"));
    }

    let trimmed = color.trim();
    if !trimmed.to_ascii_lowercase().starts_with("rgb") {
        return Err(ColorError::malformed(color, "expected a named, hex or rgb()/rgba() color"));
    }
    let parsed: Color = trimmed
        .parse()
        .map_err(|e| ColorError::malformed(color, format!("{}", e)))?;

    let [r, g, b, _] = parsed.to_rgba8();
    let a = parsed.a as f64;
    let channel = |c: u8| composite_over_white(c as f64, a) as u8;
    Ok(format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b)))
}
