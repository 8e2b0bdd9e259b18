//! Error type shared by the effect layers

/// Effect errors
///
/// None of these are fatal: the controller logs them and disables the
/// affected behavior.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FxError {
    #[error("required element not found: {0}")]
    MissingElement(&'static str),

    #[error("canvas has no 2d rendering context")]
    NoRenderingContext,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid effects configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FxError::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FxError::MissingElement("#matrixCanvas").to_string(),
            "required element not found: #matrixCanvas"
        );
        assert_eq!(
            FxError::NoRenderingContext.to_string(),
            "canvas has no 2d rendering context"
        );
        assert_eq!(
            FxError::InvalidConfig("glyph_size must be positive".to_string()).to_string(),
            "invalid effects configuration: glyph_size must be positive"
        );
    }
}
