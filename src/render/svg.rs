use std::fmt::Write as _;

use crate::{
    foundation::{core::Rgba8, error::FolioResult},
    graph::scene::{GraphScene, SceneOp, TextAlign},
    render::SceneBackend,
};

pub const DEFAULT_FONT_FAMILY: &str = "'DM Sans', system-ui, sans-serif";

/// Writes a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgBackend {
    pub font_family: String,
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl SceneBackend for SvgBackend {
    type Output = String;

    fn render(&mut self, scene: &GraphScene) -> FolioResult<String> {
        Ok(scene_to_svg(scene, &self.font_family))
    }
}

pub fn scene_to_svg(scene: &GraphScene, font_family: &str) -> String {
    let w = scene.viewport.width;
    let h = scene.viewport.height;
    let mut out = String::with_capacity(256 + scene.ops.len() * 96);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    let mut gradients = 0usize;
    let mut skipped = 0usize;
    for op in &scene.ops {
        if !is_finite_op(op) {
            skipped += 1;
            continue;
        }
        match op {
            SceneOp::Fill {
                rect,
                corner_radius,
                color,
            } => {
                let _ = writeln!(
                    out,
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" {}/>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    corner_radius,
                    paint("fill", *color),
                );
            }
            SceneOp::Line {
                from,
                to,
                color,
                width,
            } => {
                let _ = writeln!(
                    out,
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="{width}" {}/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    paint("stroke", *color),
                );
            }
            SceneOp::RadialGlow {
                center,
                radius,
                stops,
            } => {
                let id = format!("glow{gradients}");
                gradients += 1;
                let _ = writeln!(
                    out,
                    r#"<defs><radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{:.2}" cy="{:.2}" r="{:.2}">"#,
                    center.x, center.y, radius
                );
                for stop in stops {
                    let _ = writeln!(
                        out,
                        r#"<stop offset="{}" stop-color="{}" stop-opacity="{:.3}"/>"#,
                        stop.offset,
                        stop.color.to_hex(),
                        stop.color.alpha()
                    );
                }
                let _ = writeln!(out, "</radialGradient></defs>");
                let _ = writeln!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="url(#{id})"/>"#,
                    center.x, center.y, radius
                );
            }
            SceneOp::Circle {
                center,
                radius,
                color,
            } => {
                let _ = writeln!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                    center.x,
                    center.y,
                    radius,
                    paint("fill", *color),
                );
            }
            SceneOp::Label {
                anchor,
                text,
                size,
                weight,
                color,
                align,
            } => {
                let anchor_attr = match align {
                    TextAlign::Start => "start",
                    TextAlign::Middle => "middle",
                    TextAlign::End => "end",
                };
                let _ = writeln!(
                    out,
                    r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{size}" font-weight="{weight}" text-anchor="{anchor_attr}" dominant-baseline="central" {}>{}</text>"#,
                    anchor.x,
                    anchor.y,
                    escape_xml(font_family),
                    paint("fill", *color),
                    escape_xml(text),
                );
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "dropped scene ops with non-finite geometry");
    }

    out.push_str("</svg>\n");
    out
}

fn paint(attr: &str, color: Rgba8) -> String {
    format!(
        r#"{attr}="{}" {attr}-opacity="{:.3}""#,
        color.to_hex(),
        color.alpha()
    )
}

fn is_finite_op(op: &SceneOp) -> bool {
    match op {
        SceneOp::Fill {
            rect,
            corner_radius,
            ..
        } => all_finite(&[rect.x0, rect.y0, rect.x1, rect.y1, *corner_radius]),
        SceneOp::Line {
            from, to, width, ..
        } => all_finite(&[from.x, from.y, to.x, to.y, *width]),
        SceneOp::RadialGlow { center, radius, .. } | SceneOp::Circle { center, radius, .. } => {
            all_finite(&[center.x, center.y, *radius])
        }
        SceneOp::Label { anchor, size, .. } => all_finite(&[anchor.x, anchor.y, *size]),
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
