#[macro_use]
extern crate napi_derive;

pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod types;

use serde_json::Value;

use crate::config::ColorConfig;
use crate::types::GradientRequest;

#[napi]
pub fn health_check() -> String {
    "chart-color-native ok".to_string()
}

/// Cyclic palette lookup. Throws on an empty palette.
#[napi]
pub fn get_color(palette: Vec<String>, index: i64) -> napi::Result<String> {
    Ok(math::palette::get_color(&palette, index)?.clone())
}

#[napi]
pub fn palette_slice(palette: Vec<String>, start: i64, count: u32) -> napi::Result<Vec<String>> {
    Ok(math::palette::palette_slice(&palette, start, count)?)
}

#[napi(js_name = "codeToRGB")]
pub fn code_to_rgb(code: Option<String>, opacity: f64) -> Option<String> {
    math::hex::code_to_rgb(code.as_deref(), opacity)
}

#[napi]
pub fn code_to_hex(color: String, options: Option<Value>) -> napi::Result<String> {
    let config = ColorConfig::from_value(options)?;
    Ok(math::color_parse::code_to_hex(&color, &config)?)
}

#[napi]
pub fn codes_to_hex(colors: Vec<String>, options: Option<Value>) -> napi::Result<Vec<String>> {
    let config = ColorConfig::from_value(options)?;
    Ok(engine::codes_to_hex(&colors, &config)?)
}

#[napi]
pub fn colors_between(c1: String, c2: String, n: i64, options: Option<Value>) -> napi::Result<Vec<String>> {
    let config = ColorConfig::from_value(options)?;
    Ok(math::gradient::colors_between(&c1, &c2, n, &config)?)
}

#[napi]
pub fn gradients(requests: Vec<GradientRequest>, options: Option<Value>) -> napi::Result<Vec<Vec<String>>> {
    let config = ColorConfig::from_value(options)?;
    Ok(engine::gradients(&requests, &config)?)
}

#[napi]
pub fn change_rgba_opacity(rgba: String, opacity: f64, options: Option<Value>) -> napi::Result<String> {
    let config = ColorConfig::from_value(options)?;
    Ok(math::opacity::change_rgba_opacity(&rgba, opacity, &config)?)
}

#[napi]
pub fn trans_color(color_str: String) -> String {
    math::hex::trans_color(&color_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trip_full_hex() {
        for h in ["#000000", "#6d8ff0", "#abcdef", "#ffffff"] {
            assert_eq!(code_to_hex(h.to_string(), None).unwrap(), h);
        }
    }

    #[test]
    fn exported_surface_examples() {
        assert_eq!(code_to_hex("red".to_string(), None).unwrap(), "#ff0000");
        assert_eq!(code_to_hex("#abc".to_string(), None).unwrap(), "#aabbcc");
        assert_eq!(
            code_to_rgb(Some("#6d8ff0".to_string()), 0.5).as_deref(),
            Some("rgba(109,143,240,0.5)")
        );
        assert_eq!(trans_color("#abc".to_string()), "#aabbcc");
        assert_eq!(trans_color("#aabbcc".to_string()), "#aabbcc");
        assert_eq!(
            change_rgba_opacity("rgba(109,143,240,0.5)".to_string(), 0.2, None).unwrap(),
            "rgba(109,143,240,0.2)"
        );
    }

    #[test]
    fn colors_between_length_and_endpoints() {
        let colors = colors_between("#ff0000".to_string(), "#ffffff".to_string(), 10, None).unwrap();
        assert_eq!(colors.len(), 12);
        assert_eq!(colors.first().map(String::as_str), Some("#ff0000"));
        assert_eq!(colors.last().map(String::as_str), Some("#ffffff"));
    }

    #[test]
    fn get_color_empty_palette_is_invalid_arg() {
        let err = get_color(Vec::new(), 3).unwrap_err();
        assert_eq!(err.status, napi::Status::InvalidArg);
    }

    #[test]
    fn negative_steps_is_invalid_arg() {
        let err = colors_between("#000".to_string(), "#fff".to_string(), -2, None).unwrap_err();
        assert_eq!(err.status, napi::Status::InvalidArg);
    }

    #[test]
    fn strict_option_threaded_through() {
        let err = code_to_hex("teal".to_string(), Some(json!({ "strict": true }))).unwrap_err();
        assert_eq!(err.status, napi::Status::GenericFailure);
        assert_eq!(
            code_to_hex("teal".to_string(), Some(json!({ "strict": false }))).unwrap(),
            "#aNaNaN"
        );
    }

    #[test]
    fn bad_options_rejected() {
        let err = code_to_hex("red".to_string(), Some(json!({ "strict": 1 }))).unwrap_err();
        assert_eq!(err.status, napi::Status::InvalidArg);
    }
}
