use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::Viewport,
    error::{FolioError, FolioResult},
};

/// Color scheme of the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Black background, white nodes.
    #[default]
    Dark,
    /// White background, zinc nodes.
    Light,
}

/// Primary input device of the host.
///
/// On touch devices the browser synthesizes pointer moves after each tap, so those are
/// ignored and only touch events drive the active item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Mouse or trackpad: hover drives the active item.
    #[default]
    Pointer,
    /// Touch screen: taps drive the active item.
    Touch,
}

/// Size-class dependent tuning. All distances are layout pixels, speeds are pixels per frame.
///
/// Fields missing from a config table fall back to the defaults of the same size class.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResponsiveParams {
    /// Distance node centers keep from every container edge.
    pub padding: f64,
    /// Node pairs closer than this are connected by a line.
    pub connection_distance: f64,
    /// Seeding circle radius as a fraction of the shorter viewport side.
    pub radius_fraction: f64,
    /// Full width of the uniform seeding jitter on each axis.
    pub jitter: f64,
    /// Full width of the uniform initial velocity on each axis.
    pub initial_speed: f64,
    /// Full width of the uniform per-frame acceleration on each axis.
    pub wander: f64,
    /// Velocity multiplier applied every frame.
    pub damping: f64,
    /// Fraction of speed kept when a node bounces off the bounds.
    pub bounce: f64,
    pub node_radius: f64,
    pub active_node_radius: f64,
    pub label_size: f64,
    pub active_label_size: f64,
    pub glow_radius: f64,
    pub active_halo_radius: f64,
    pub mouse_hit_radius: f64,
    pub touch_hit_radius: f64,
}

impl ResponsiveParams {
    /// Tuning for viewports at or above the narrow breakpoint.
    pub fn wide() -> Self {
        Self {
            padding: 50.0,
            connection_distance: 250.0,
            radius_fraction: 0.32,
            jitter: 30.0,
            initial_speed: 0.2,
            wander: 0.015,
            damping: 0.995,
            bounce: 0.9,
            node_radius: 18.0,
            active_node_radius: 24.0,
            label_size: 10.0,
            active_label_size: 12.0,
            glow_radius: 120.0,
            active_halo_radius: 45.0,
            mouse_hit_radius: 25.0,
            touch_hit_radius: 40.0,
        }
    }

    /// Tuning for viewports below the narrow breakpoint.
    pub fn narrow() -> Self {
        Self {
            padding: 30.0,
            connection_distance: 160.0,
            radius_fraction: 0.38,
            jitter: 15.0,
            node_radius: 14.0,
            active_node_radius: 18.0,
            label_size: 9.0,
            active_label_size: 11.0,
            glow_radius: 80.0,
            active_halo_radius: 34.0,
            mouse_hit_radius: 22.0,
            touch_hit_radius: 36.0,
            ..Self::wide()
        }
    }

    /// Hit-test radius; touch targets are larger than mouse targets.
    pub fn hit_radius(&self, input: InputKind) -> f64 {
        match input {
            InputKind::Pointer => self.mouse_hit_radius,
            InputKind::Touch => self.touch_hit_radius,
        }
    }

    fn validate(&self, which: &str) -> FolioResult<()> {
        let positive = [
            ("connection_distance", self.connection_distance),
            ("radius_fraction", self.radius_fraction),
            ("node_radius", self.node_radius),
            ("active_node_radius", self.active_node_radius),
            ("label_size", self.label_size),
            ("active_label_size", self.active_label_size),
            ("glow_radius", self.glow_radius),
            ("active_halo_radius", self.active_halo_radius),
            ("mouse_hit_radius", self.mouse_hit_radius),
            ("touch_hit_radius", self.touch_hit_radius),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(FolioError::validation(format!(
                    "{which}.{name} must be finite and > 0 (got {v})"
                )));
            }
        }
        let non_negative = [
            ("padding", self.padding),
            ("jitter", self.jitter),
            ("initial_speed", self.initial_speed),
            ("wander", self.wander),
            ("bounce", self.bounce),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(FolioError::validation(format!(
                    "{which}.{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(FolioError::validation(format!(
                "{which}.damping must be in (0, 1] (got {})",
                self.damping
            )));
        }
        Ok(())
    }
}

impl Default for ResponsiveParams {
    fn default() -> Self {
        Self::wide()
    }
}

/// Tooltip card geometry and entry motion.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub width: f64,
    pub height: f64,
    pub edge_padding: f64,
    /// Distance the tooltip sits above the node before clamping.
    pub offset_y: f64,
    /// Frames of the entry motion after the active item changes.
    pub enter_frames: u32,
    /// Starting downward offset of the entry motion.
    pub enter_rise: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 60.0,
            edge_padding: 8.0,
            offset_y: 65.0,
            enter_frames: 12,
            enter_rise: 8.0,
        }
    }
}

/// Visualizer configuration. Theme and input device are injected here rather than detected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub theme: Theme,
    pub input: InputKind,
    /// Widths below this use the narrow parameters.
    pub narrow_breakpoint: f64,
    /// Widths below this skip the canvas and use the static grid.
    pub grid_breakpoint: f64,
    /// Width change that forces a reseed.
    pub reseed_width_delta: f64,
    /// Upper bound on the device pixel ratio used for raster output.
    pub max_device_pixel_ratio: f64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub wide: ResponsiveParams,
    #[serde(deserialize_with = "narrow_params")]
    pub narrow: ResponsiveParams,
    pub tooltip: TooltipConfig,
}

/// Overlay a possibly partial `narrow` table on [`ResponsiveParams::narrow`].
fn narrow_params<'de, D>(deserializer: D) -> Result<ResponsiveParams, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::{Deserialize as _, de::Error as _};

    let overrides = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Object(overrides) = overrides else {
        return Err(D::Error::custom("narrow must be an object"));
    };
    let mut base = serde_json::to_value(ResponsiveParams::narrow()).map_err(D::Error::custom)?;
    if let serde_json::Value::Object(fields) = &mut base {
        fields.extend(overrides);
    }
    serde_json::from_value(base).map_err(D::Error::custom)
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            input: InputKind::Pointer,
            narrow_breakpoint: 640.0,
            grid_breakpoint: 480.0,
            reseed_width_delta: 100.0,
            max_device_pixel_ratio: 2.0,
            seed: None,
            wide: ResponsiveParams::wide(),
            narrow: ResponsiveParams::narrow(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read graph config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check every threshold and tuning value, returning the first offending field.
    pub fn validate(&self) -> FolioResult<()> {
        for (name, v) in [
            ("narrow_breakpoint", self.narrow_breakpoint),
            ("grid_breakpoint", self.grid_breakpoint),
            ("reseed_width_delta", self.reseed_width_delta),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(FolioError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.grid_breakpoint > self.narrow_breakpoint {
            return Err(FolioError::validation(
                "grid_breakpoint must be <= narrow_breakpoint",
            ));
        }
        if !self.max_device_pixel_ratio.is_finite() || self.max_device_pixel_ratio < 1.0 {
            return Err(FolioError::validation(
                "max_device_pixel_ratio must be finite and >= 1",
            ));
        }
        let t = &self.tooltip;
        for (name, v) in [
            ("tooltip.width", t.width),
            ("tooltip.height", t.height),
            ("tooltip.edge_padding", t.edge_padding),
            ("tooltip.offset_y", t.offset_y),
            ("tooltip.enter_rise", t.enter_rise),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(FolioError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        self.wide.validate("wide")?;
        self.narrow.validate("narrow")
    }

    /// Whether `viewport` uses the narrow tuning.
    pub fn is_narrow(&self, viewport: Viewport) -> bool {
        viewport.width < self.narrow_breakpoint
    }

    /// Whether `viewport` skips the canvas for the static grid.
    pub fn uses_grid(&self, viewport: Viewport) -> bool {
        viewport.width < self.grid_breakpoint
    }

    pub fn params_for(&self, viewport: Viewport) -> &ResponsiveParams {
        if self.is_narrow(viewport) {
            &self.narrow
        } else {
            &self.wide
        }
    }

    /// Device pixel ratio actually used for raster output.
    pub fn effective_dpr(&self, dpr: f64) -> f64 {
        if !dpr.is_finite() || dpr <= 0.0 {
            return 1.0;
        }
        dpr.min(self.max_device_pixel_ratio)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/config.rs"]
mod tests;
