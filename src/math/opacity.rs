use super::number::format_number;
use crate::config::ColorConfig;
use crate::error::{ColorError, Result};

/// Find numeric tokens (`digits` or `digits.digits`) anywhere in `s`,
/// left to right. A sign or a leading dot is not part of a token.
pub fn numeric_tokens(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // Fraction only when a digit follows the dot
        if i + 1 < len && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < len && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        tokens.push(&s[start..i]);
    }

    tokens
}

/// Rewrite the alpha of an `rgba(...)` string,
/// e.g. `rgba(109,143,240,0.5)` + 0.2 -> `rgba(109,143,240,0.2)`.
///
/// The channels are the first three numeric tokens found anywhere in the
/// input, not a structural parse, so stray digits before the channels are
/// captured too. Missing tokens are written as `NaN` unless strict.
pub fn change_rgba_opacity(rgba: &str, opacity: f64, config: &ColorConfig) -> Result<String> {
    let tokens = numeric_tokens(rgba);
    if tokens.len() < 3 {
        if config.strict {
            return Err(ColorError::malformed(
                rgba,
                format!("expected 3 channel values, found {}", tokens.len()),
            ));
        }
        log::debug!("change_rgba_opacity: only {} channel values in {:?}", tokens.len(), rgba);
    }

    let channel = |i: usize| tokens.get(i).copied().unwrap_or("NaN");
    Ok(format!(
        "rgba({},{},{},{})",
        channel(0),
        channel(1),
        channel(2),
        format_number(opacity)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── numeric_tokens ──

    #[test]
    fn tokens_from_rgba() {
        assert_eq!(numeric_tokens("rgba(109,143,240,0.5)"), vec!["109", "143", "240", "0.5"]);
    }

    #[test]
    fn tokens_skip_sign_and_leading_dot() {
        assert_eq!(numeric_tokens("-3, .5, 1."), vec!["3", "5", "1"]);
    }

    #[test]
    fn tokens_empty_input() {
        assert!(numeric_tokens("rgba()").is_empty());
    }

    // ── change_rgba_opacity ──

    #[test]
    fn replaces_alpha() {
        let out = change_rgba_opacity("rgba(109,143,240,0.5)", 0.2, &ColorConfig::default());
        assert_eq!(out.unwrap(), "rgba(109,143,240,0.2)");
    }

    #[test]
    fn adds_alpha_to_rgb() {
        let out = change_rgba_opacity("rgb(1, 2, 3)", 1.0, &ColorConfig::default());
        assert_eq!(out.unwrap(), "rgba(1,2,3,1)");
    }

    #[test]
    fn decimal_channels_kept_verbatim() {
        let out = change_rgba_opacity("rgba(10.5,20,30.25,1)", 0.4, &ColorConfig::default());
        assert_eq!(out.unwrap(), "rgba(10.5,20,30.25,0.4)");
    }

    #[test]
    fn stray_digits_are_captured() {
        let out = change_rgba_opacity("c2 rgba(109,143,240,0.5)", 0.2, &ColorConfig::default());
        assert_eq!(out.unwrap(), "rgba(2,109,143,0.2)");
    }

    #[test]
    fn missing_channels_lenient() {
        let out = change_rgba_opacity("rgba(12)", 0.5, &ColorConfig::default());
        assert_eq!(out.unwrap(), "rgba(12,NaN,NaN,0.5)");
    }

    #[test]
    fn missing_channels_strict() {
        let err = change_rgba_opacity("rgba(12)", 0.5, &ColorConfig::strict()).unwrap_err();
        assert!(matches!(err, ColorError::MalformedColor { .. }));
    }
}
