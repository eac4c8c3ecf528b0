use serde::Deserialize;
use serde_json::Value;

use crate::error::{ColorError, Result};

/// Options accepted by the parsing entry points.
///
/// Decoded from the optional JS `options` object, e.g. `{ strict: true }`.
/// Unknown keys are ignored so callers can share one options bag across
/// chart helpers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    /// Reject malformed input instead of emitting NaN markers.
    pub strict: bool,
}

impl ColorConfig {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// `None` and `null` both yield the lenient defaults.
    pub fn from_value(value: Option<Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(v) => serde_json::from_value(v).map_err(|e| ColorError::InvalidConfig {
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_options_are_lenient() {
        assert_eq!(ColorConfig::from_value(None).unwrap(), ColorConfig::default());
        assert!(!ColorConfig::from_value(Some(Value::Null)).unwrap().strict);
    }

    #[test]
    fn strict_flag_decoded() {
        let cfg = ColorConfig::from_value(Some(json!({ "strict": true }))).unwrap();
        assert!(cfg.strict);
    }

    #[test]
    fn unknown_keys_ignored() {
        let cfg = ColorConfig::from_value(Some(json!({ "theme": "dark" }))).unwrap();
        assert!(!cfg.strict);
    }

    #[test]
    fn wrong_type_is_config_error() {
        let err = ColorConfig::from_value(Some(json!({ "strict": "yes" }))).unwrap_err();
        assert!(matches!(err, ColorError::InvalidConfig { .. }));
    }
}
