//! Numeric coercion used by the permissive string parsers.
//!
//! Malformed input yields `NaN` rather than an error so the legacy
//! "parse then hope" output (e.g. `rgba(NaN,NaN,NaN,0.5)`) is reproduced.

/// Parse the longest integer prefix of `s` in `radix`.
///
/// Leading whitespace and one sign character are skipped; for radix 16 a
/// `0x`/`0X` marker is also accepted. Returns `NaN` when no digit follows.
pub fn parse_int_prefix(s: &str, radix: u32) -> f64 {
    let mut rest = s.trim_start();
    let mut sign = 1.0;
    if let Some(r) = rest.strip_prefix('-') {
        sign = -1.0;
        rest = r;
    } else if let Some(r) = rest.strip_prefix('+') {
        rest = r;
    }
    if radix == 16 {
        if let Some(r) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = r;
        }
    }

    let mut acc: Option<f64> = None;
    for c in rest.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = Some(acc.unwrap_or(0.0) * radix as f64 + d as f64),
            None => break,
        }
    }

    match acc {
        Some(v) => sign * v,
        None => f64::NAN,
    }
}

/// Parse the longest decimal floating-point prefix of `s`.
///
/// Accepts `[+-]digits[.digits][e[+-]digits]`, a leading-dot fraction, or
/// `Infinity`. Returns `NaN` when nothing parses.
pub fn parse_float_prefix(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    if trimmed[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    trimmed[..i].parse().unwrap_or(f64::NAN)
}

/// Render a number the way it appears when concatenated into a string.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let sci = format!("{:e}", v);
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => sci,
        };
    }
    format!("{}", v)
}

/// Radix-16 rendering of an integral value. Fractions are truncated.
pub fn to_hex_string(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = v.abs().trunc() as u128;
    if v < 0.0 && magnitude != 0 {
        format!("-{:x}", magnitude)
    } else {
        format!("{:x}", magnitude)
    }
}
