use crate::metrics::{CharMetrics, FALLBACK_CHAR_HEIGHT, FALLBACK_CHAR_WIDTH};
use crate::GridSizer;

/// Errors produced while loading a [`CanvasConfig`] or building [`CharMetrics`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "toml")]
    #[error("invalid canvas config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid fallback {axis}: {value} (must be finite and greater than zero)")]
    InvalidFallback { axis: &'static str, value: f64 },
}

/// Page-level settings for an ASCII canvas.
///
/// All fields are optional; missing values use the built-in defaults.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasConfig {
    /// Signature stamped onto finished output
    pub signature: Option<String>,
    pub fallback_char_width: Option<f64>,
    pub fallback_char_height: Option<f64>,
}

impl CanvasConfig {
    /// Parse a canvas config from TOML.
    ///
    /// ```rust
    /// # #[cfg(feature = "toml")]
    /// # {
    /// use ascii_canvas_core::CanvasConfig;
    ///
    /// let config = CanvasConfig::from_toml_str("signature = \"Pollock\"\nfallback_char_width = 8.0").unwrap();
    /// let metrics = config.char_metrics().unwrap();
    /// assert_eq!((metrics.fallback_width(), metrics.fallback_height()), (8.0, 14.0));
    /// # }
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.char_metrics()?;
        Ok(config)
    }

    /// Glyph metrics with this config's fallbacks.
    pub fn char_metrics(&self) -> Result<CharMetrics, ConfigError> {
        CharMetrics::with_fallbacks(
            self.fallback_char_width.unwrap_or(FALLBACK_CHAR_WIDTH),
            self.fallback_char_height.unwrap_or(FALLBACK_CHAR_HEIGHT),
        )
    }

    /// Grid sizer using this config's glyph metrics.
    pub fn grid_sizer(&self) -> Result<GridSizer, ConfigError> {
        self.char_metrics().map(GridSizer::with_metrics)
    }

    /// The configured signature, or an empty string.
    pub fn signature(&self) -> &str {
        self.signature.as_deref().unwrap_or("")
    }
}
