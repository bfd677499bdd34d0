//! Configuration for the filtering engine.
//!
//! Every field has a default, so a partial JSON or TOML document is enough
//! to override a single knob.
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine configuration.
///
/// # Example
///
/// ```rust
/// use strikeview::Config;
///
/// let config = Config::default();
/// assert_eq!(config.radius_scale, 20.0);
///
/// let json = r#"{
///     "animation_speed_ms": 250,
///     "step_fraction": 0.1
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.animation_speed_ms, 250.0);
/// assert_eq!(config.radius_scale, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial radius scale applied to every point.
    #[serde(default = "Config::default_radius_scale")]
    pub radius_scale: f64,

    /// Initial delay between animation ticks, in milliseconds.
    #[serde(default = "Config::default_animation_speed_ms")]
    pub animation_speed_ms: f64,

    /// Fraction of the window width the window moves per tick.
    #[serde(default = "Config::default_step_fraction")]
    pub step_fraction: f64,

    /// A zero-width window advances by `(max - min) / min_width_divisor`.
    #[serde(default = "Config::default_min_width_divisor")]
    pub min_width_divisor: f64,

    /// Position of the soft range start inside the hard range.
    #[serde(default = "Config::default_soft_range_fraction")]
    pub soft_range_fraction: f64,

    #[serde(default)]
    pub layer: LayerStyle,

    #[serde(default)]
    pub view: ViewState,
}

impl Config {
    const fn default_radius_scale() -> f64 {
        20.0
    }

    const fn default_animation_speed_ms() -> f64 {
        1000.0
    }

    const fn default_step_fraction() -> f64 {
        0.05
    }

    const fn default_min_width_divisor() -> f64 {
        100.0
    }

    const fn default_soft_range_fraction() -> f64 {
        0.1
    }

    pub fn with_radius_scale(mut self, radius_scale: f64) -> Self {
        self.radius_scale = radius_scale;
        self
    }

    pub fn with_animation_speed_ms(mut self, speed_ms: f64) -> Self {
        self.animation_speed_ms = speed_ms;
        self
    }

    pub fn with_step_fraction(mut self, fraction: f64) -> Self {
        self.step_fraction = fraction;
        self
    }

    pub fn with_min_width_divisor(mut self, divisor: f64) -> Self {
        self.min_width_divisor = divisor;
        self
    }

    pub fn with_soft_range_fraction(mut self, fraction: f64) -> Self {
        self.soft_range_fraction = fraction;
        self
    }

    pub fn with_layer_style(mut self, layer: LayerStyle) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }

    /// Initial tick interval as a `Duration`.
    pub fn animation_interval(&self) -> Duration {
        Duration::from_secs_f64(self.animation_speed_ms / 1000.0)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.radius_scale.is_finite() || self.radius_scale <= 0.0 {
            return Err("Radius scale must be a positive, finite number".to_string());
        }

        if !self.animation_speed_ms.is_finite() || self.animation_speed_ms <= 0.0 {
            return Err("Animation speed must be a positive, finite number of milliseconds".to_string());
        }

        if !self.step_fraction.is_finite() || self.step_fraction <= 0.0 || self.step_fraction > 1.0
        {
            return Err("Step fraction must be in (0, 1]".to_string());
        }

        if !self.min_width_divisor.is_finite() || self.min_width_divisor < 1.0 {
            return Err("Minimum width divisor must be at least 1".to_string());
        }

        if !(0.0..=1.0).contains(&self.soft_range_fraction) {
            return Err("Soft range fraction must be in [0, 1]".to_string());
        }

        if !self.layer.radius_min_pixels.is_finite() || self.layer.radius_min_pixels < 0.0 {
            return Err("Minimum pixel radius must be a non-negative number".to_string());
        }

        if !(-90.0..=90.0).contains(&self.view.latitude)
            || !(-180.0..=180.0).contains(&self.view.longitude)
        {
            return Err("Initial view must be a valid geographic position".to_string());
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius_scale: Self::default_radius_scale(),
            animation_speed_ms: Self::default_animation_speed_ms(),
            step_fraction: Self::default_step_fraction(),
            min_width_divisor: Self::default_min_width_divisor(),
            soft_range_fraction: Self::default_soft_range_fraction(),
            layer: LayerStyle::default(),
            view: ViewState::default(),
        }
    }
}

/// Static drawing parameters handed to the scatterplot layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerStyle {
    /// RGBA fill color.
    #[serde(default = "LayerStyle::default_fill_color")]
    pub fill_color: [u8; 4],

    #[serde(default = "LayerStyle::default_radius_min_pixels")]
    pub radius_min_pixels: f64,

    /// Points always face the camera.
    #[serde(default = "LayerStyle::default_billboard")]
    pub billboard: bool,

    #[serde(default)]
    pub stroked: bool,
}

impl LayerStyle {
    const fn default_fill_color() -> [u8; 4] {
        [225, 210, 255, 180]
    }

    const fn default_radius_min_pixels() -> f64 {
        0.1
    }

    const fn default_billboard() -> bool {
        true
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            fill_color: Self::default_fill_color(),
            radius_min_pixels: Self::default_radius_min_pixels(),
            billboard: Self::default_billboard(),
            stroked: false,
        }
    }
}

/// Initial camera position of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            longitude: 20.0,
            latitude: 60.0,
            zoom: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.radius_scale, 20.0);
        assert_eq!(config.animation_speed_ms, 1000.0);
        assert_eq!(config.animation_interval(), Duration::from_secs(1));
        assert_eq!(config.layer.fill_color, [225, 210, 255, 180]);
        assert_eq!(config.view.zoom, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_keeps_overrides() {
        let config = Config::default()
            .with_animation_speed_ms(200.0)
            .with_step_fraction(0.25);
        let json = config.to_json().unwrap();
        let parsed = Config::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        assert!(Config::from_json(r#"{"radius_scale": -1}"#).is_err());
        assert!(Config::from_json(r#"{"animation_speed_ms": 0}"#).is_err());
        assert!(Config::from_json(r#"{"step_fraction": 1.5}"#).is_err());
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        assert!(Config::from_json(r#"{"basemap": "dark-matter"}"#).is_err());
    }

    #[test]
    fn test_partial_layer_style() {
        let config = Config::from_json(r#"{"layer": {"stroked": true}}"#).unwrap();
        assert!(config.layer.stroked);
        assert!(config.layer.billboard);
        assert_eq!(config.layer.radius_min_pixels, 0.1);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default().with_radius_scale(5.0);
        let text = config.to_toml().unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed.radius_scale, 5.0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(Config::from_toml("min_width_divisor = 0.5").is_err());
    }
}
