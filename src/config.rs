//! Viewport tunables.
//!
//! Every field has a default, so a JSON override only needs the keys it
//! changes:
//!
//! ```
//! use interactive_canvas::ViewportConfig;
//!
//! let config = ViewportConfig::from_json(r#"{ "scale_factor": 1.25 }"#).unwrap();
//! assert_eq!(config.scale_factor, 1.25);
//! assert_eq!(config.max_zoom_steps, 10);
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::WheelDelta;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Zoom multiplier for one step (wheel notch or click).
    pub scale_factor: f64,
    /// Upper bound on zoom steps applied by a single event.
    pub max_zoom_steps: i32,
    /// Smallest view scale (`sqrt(|det|)` of the transform) zooming may reach.
    pub min_scale: f64,
    /// Largest view scale zooming may reach.
    pub max_scale: f64,
    /// Zoom on a pointer click that did not drag (shift-click zooms out).
    pub click_to_zoom: bool,
    /// Pixel-mode `wheel` delta per zoom step.
    pub pixels_per_step: f64,
    /// Line-mode `wheel` delta per zoom step.
    pub lines_per_step: f64,
    /// Page-mode `wheel` delta per zoom step.
    pub pages_per_step: f64,
    /// Legacy `mousewheel` `wheelDelta` per zoom step (one notch is 120).
    pub legacy_delta_per_step: f64,
    /// Legacy `DOMMouseScroll` `detail` per zoom step (one notch is 3).
    pub legacy_detail_per_step: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            max_zoom_steps: 10,
            min_scale: 1e-3,
            max_scale: 1e3,
            click_to_zoom: true,
            pixels_per_step: 100.0,
            lines_per_step: 3.0,
            pages_per_step: 1.0,
            legacy_delta_per_step: 120.0,
            legacy_detail_per_step: 3.0,
        }
    }
}

impl ViewportConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns `Err` on malformed JSON or on values rejected by [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 1.0 {
            return Err(Error::InvalidConfig(format!(
                "scale_factor must be a finite number above 1, got {}",
                self.scale_factor
            )));
        }
        if self.max_zoom_steps < 1 {
            return Err(Error::InvalidConfig(format!(
                "max_zoom_steps must be at least 1, got {}",
                self.max_zoom_steps
            )));
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "min_scale must be in (0, 1], got {}",
                self.min_scale
            )));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "max_scale must be a finite number of at least 1, got {}",
                self.max_scale
            )));
        }
        let per_step = [
            ("pixels_per_step", self.pixels_per_step),
            ("lines_per_step", self.lines_per_step),
            ("pages_per_step", self.pages_per_step),
            ("legacy_delta_per_step", self.legacy_delta_per_step),
            ("legacy_detail_per_step", self.legacy_detail_per_step),
        ];
        for (name, value) in per_step {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }

    /// `factor` reduced so that a view at `current` scale stays within
    /// `[min_scale, max_scale]` after applying it.
    #[must_use]
    pub fn clamp_zoom_factor(&self, current: f64, factor: f64) -> f64 {
        (current * factor).clamp(self.min_scale, self.max_scale) / current
    }

    /// Fractional zoom steps for one wheel event. Positive zooms in.
    #[must_use]
    pub fn wheel_steps(&self, delta: WheelDelta) -> f64 {
        match delta {
            // Standard and DOMMouseScroll deltas are positive when scrolling down.
            WheelDelta::Pixels(dy) => -dy / self.pixels_per_step,
            WheelDelta::Lines(dy) => -dy / self.lines_per_step,
            WheelDelta::Pages(dy) => -dy / self.pages_per_step,
            WheelDelta::LegacyDetail(detail) => -detail / self.legacy_detail_per_step,
            // `wheelDelta` is positive when scrolling up.
            WheelDelta::LegacyWheelDelta(delta) => delta / self.legacy_delta_per_step,
        }
    }
}
