use super::number::to_hex_string;

/// Alpha-composite a single channel over a white background.
/// formula: floor(alpha * channel + (1 - alpha) * 255)
pub fn composite_over_white(channel: f64, alpha: f64) -> f64 {
    (alpha * channel + (1.0 - alpha) * 255.0).floor()
}

/// Two-character hex rendering of a composited channel: the last two
/// characters of `"0" + hex`. Values outside 0..=255 or NaN are not
/// rejected and come out truncated (e.g. NaN -> `aN`).
pub fn channel_hex(channel: f64) -> String {
    let padded = format!("0{}", to_hex_string(channel));
    let chars: Vec<char> = padded.chars().collect();
    chars[chars.len().saturating_sub(2)..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_channel_unchanged() {
        assert_eq!(composite_over_white(109.0, 1.0), 109.0);
    }

    #[test]
    fn transparent_channel_is_white() {
        assert_eq!(composite_over_white(0.0, 0.0), 255.0);
    }

    #[test]
    fn half_alpha_floors() {
        // 0 * 0.5 + 255 * 0.5 = 127.5
        assert_eq!(composite_over_white(0.0, 0.5), 127.0);
    }

    #[test]
    fn channel_hex_pads_and_truncates() {
        assert_eq!(channel_hex(7.0), "07");
        assert_eq!(channel_hex(255.0), "ff");
        assert_eq!(channel_hex(256.0), "00");
        assert_eq!(channel_hex(f64::NAN), "aN");
    }
}
