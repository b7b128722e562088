use crate::{foundation::core::Rgba8, graph::config::Theme};

pub const ACCENT: Rgba8 = Rgba8::opaque(139, 92, 246);
pub const ACCENT_PINK: Rgba8 = Rgba8::opaque(236, 72, 153);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba8,
    /// Base color of an idle connection; alpha comes from distance.
    pub line: Rgba8,
    /// Extra alpha factor for idle connections.
    pub line_alpha_scale: u8,
    pub line_active: Rgba8,
    pub node: Rgba8,
    pub node_active: Rgba8,
    pub label: Rgba8,
    pub label_active: Rgba8,
    pub glow_center: Rgba8,
    pub glow_mid: Rgba8,
    pub halo: Rgba8,
    pub badge: Rgba8,
    pub tooltip_bg: Rgba8,
    pub tooltip_title: Rgba8,
    pub tooltip_subtitle: Rgba8,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Rgba8::opaque(0, 0, 0),
                line: Rgba8::opaque(255, 255, 255),
                line_alpha_scale: 255,
                line_active: ACCENT,
                node: Rgba8::opaque(255, 255, 255).with_alpha(0.95),
                node_active: ACCENT,
                label: Rgba8::opaque(0, 0, 0),
                label_active: Rgba8::opaque(255, 255, 255),
                glow_center: ACCENT.with_alpha(0.12),
                glow_mid: ACCENT_PINK.with_alpha(0.05),
                halo: ACCENT.with_alpha(0.35),
                badge: Rgba8::opaque(82, 82, 91),
                tooltip_bg: Rgba8::opaque(255, 255, 255),
                tooltip_title: Rgba8::opaque(24, 24, 27),
                tooltip_subtitle: Rgba8::opaque(82, 82, 91),
            },
            Theme::Light => Self {
                background: Rgba8::opaque(255, 255, 255),
                line: Rgba8::opaque(0, 0, 0),
                line_alpha_scale: 178,
                line_active: ACCENT,
                node: Rgba8::opaque(24, 24, 27).with_alpha(0.95),
                node_active: ACCENT,
                label: Rgba8::opaque(255, 255, 255),
                label_active: Rgba8::opaque(255, 255, 255),
                glow_center: ACCENT.with_alpha(0.08),
                glow_mid: ACCENT_PINK.with_alpha(0.03),
                halo: ACCENT.with_alpha(0.35),
                badge: Rgba8::opaque(161, 161, 170),
                tooltip_bg: Rgba8::opaque(24, 24, 27),
                tooltip_title: Rgba8::opaque(255, 255, 255),
                tooltip_subtitle: Rgba8::opaque(161, 161, 170),
            },
        }
    }

    /// Connection stroke for a pair `distance` apart, or `None` beyond `threshold`.
    pub fn connection(&self, distance: f64, threshold: f64, active: bool) -> Option<Rgba8> {
        if distance.is_nan() || distance >= threshold {
            return None;
        }
        let closeness = 1.0 - distance / threshold;
        if active {
            return Some(self.line_active.with_alpha(closeness * 0.5));
        }
        let scale = f64::from(self.line_alpha_scale) / 255.0;
        Some(self.line.with_alpha(closeness * 0.15 * scale))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/palette.rs"]
mod tests;
