use super::number::{format_number, parse_int_prefix};

/// Characters `[start, end)` of `s`, clamped to its length.
fn char_range(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect()
}

/// Convert `#rrggbb` to `rgba(r,g,b,opacity)`.
/// e.g. `code_to_rgb(Some("#6d8ff0"), 0.5)` -> `rgba(109,143,240,0.5)`.
///
/// Hex digits are not validated: a channel that fails to parse is written
/// as `NaN`. The blue channel takes everything after the fifth character.
pub fn code_to_rgb(code: Option<&str>, opacity: f64) -> Option<String> {
    let code = code?;
    let chars: Vec<char> = code.chars().collect();

    let r = parse_int_prefix(&char_range(&chars, 1, 3), 16);
    let g = parse_int_prefix(&char_range(&chars, 3, 5), 16);
    let b = parse_int_prefix(&char_range(&chars, 5, chars.len()), 16);

    if r.is_nan() || g.is_nan() || b.is_nan() {
        log::debug!("code_to_rgb: unparsable channel in {:?}", code);
    }

    Some(format!(
        "rgba({},{},{},{})",
        format_number(r),
        format_number(g),
        format_number(b),
        format_number(opacity)
    ))
}

/// Expand a 4-character shorthand (`#rgb`) by doubling characters 1..=3.
/// Any other length is returned unchanged.
pub fn expand_shorthand(color: &str) -> String {
    let chars: Vec<char> = color.chars().collect();
    if chars.len() != 4 {
        return color.to_string();
    }
    let mut out = String::with_capacity(7);
    out.push(chars[0]);
    for &c in &chars[1..] {
        out.push(c);
        out.push(c);
    }
    out
}

/// Normalize `#rgb` / `rgb` (exactly three hex digits) to `#rrggbb`.
/// Anything else, including full 6-digit hex, is returned unchanged.
/// Digit case is preserved.
pub fn trans_color(color: &str) -> String {
    let digits = color.strip_prefix('#').unwrap_or(color);
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() == 3 && chars.iter().all(|c| c.is_ascii_hexdigit()) {
        let mut out = String::with_capacity(7);
        out.push('#');
        for &c in &chars {
            out.push(c);
            out.push(c);
        }
        return out;
    }
    color.to_string()
}

/// True for `#` followed by exactly `digits` ASCII hex digits.
pub fn is_hex_code(color: &str, digits: usize) -> bool {
    match color.strip_prefix('#') {
        Some(raw) => raw.len() == digits && raw.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
