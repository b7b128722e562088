use crate::{
    foundation::core::{Point, Rect, Rgba8, Viewport},
    graph::{interaction::Tooltip, item::ItemId, palette::Palette, sim::Simulation},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// Draw operation in back-to-front order. Backends only translate, they never decide.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    Fill {
        rect: Rect,
        corner_radius: f64,
        color: Rgba8,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba8,
        width: f64,
    },
    RadialGlow {
        center: Point,
        radius: f64,
        stops: Vec<GradientStop>,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    /// Text vertically centered on `anchor`.
    Label {
        anchor: Point,
        text: String,
        size: f64,
        weight: u16,
        color: Rgba8,
        align: TextAlign,
    },
}

/// Backend-agnostic description of one frame of the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphScene {
    pub viewport: Viewport,
    pub ops: Vec<SceneOp>,
}

impl GraphScene {
    pub fn lines(&self) -> impl Iterator<Item = &SceneOp> {
        self.ops.iter().filter(|op| matches!(op, SceneOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &SceneOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, SceneOp::Circle { .. }))
    }

    /// Append the tooltip card on top of everything else.
    pub fn push_tooltip(&mut self, tooltip: &Tooltip, palette: &Palette) {
        let alpha = |c: Rgba8| c.with_alpha(c.alpha() * tooltip.opacity.clamp(0.0, 1.0));
        let r = tooltip.rect;
        self.ops.push(SceneOp::Fill {
            rect: r,
            corner_radius: 12.0,
            color: alpha(palette.tooltip_bg),
        });
        self.ops.push(SceneOp::Label {
            anchor: Point::new(r.x0 + 16.0, r.y0 + r.height() * 0.35),
            text: tooltip.title.clone(),
            size: 14.0,
            weight: 600,
            color: alpha(palette.tooltip_title),
            align: TextAlign::Start,
        });
        if !tooltip.subtitle.is_empty() {
            self.ops.push(SceneOp::Label {
                anchor: Point::new(r.x0 + 16.0, r.y0 + r.height() * 0.7),
                text: truncate(&tooltip.subtitle, 28),
                size: 12.0,
                weight: 400,
                color: alpha(palette.tooltip_subtitle),
                align: TextAlign::Start,
            });
        }
    }
}

/// Describe the current frame: background, connections, center glow, nodes, badge.
pub fn build_scene(sim: &Simulation, active: Option<&ItemId>) -> GraphScene {
    let viewport = sim.viewport();
    let params = sim.params();
    let palette = Palette::for_theme(sim.config().theme);
    let nodes = sim.nodes();
    let is_active = |id: &ItemId| active == Some(id);

    let mut ops = Vec::with_capacity(2 + nodes.len() * 3 + nodes.len() * nodes.len() / 2);
    ops.push(SceneOp::Fill {
        rect: viewport.rect(),
        corner_radius: 0.0,
        color: palette.background,
    });

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let hot = is_active(&a.item.id) || is_active(&b.item.id);
            let distance = a.position.distance(b.position);
            let Some(color) = palette.connection(distance, params.connection_distance, hot) else {
                continue;
            };
            ops.push(SceneOp::Line {
                from: a.position,
                to: b.position,
                color,
                width: if hot { 2.0 } else { 1.0 },
            });
        }
    }

    ops.push(SceneOp::RadialGlow {
        center: viewport.center(),
        radius: params.glow_radius,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: palette.glow_center,
            },
            GradientStop {
                offset: 0.6,
                color: palette.glow_mid,
            },
            GradientStop {
                offset: 1.0,
                color: Rgba8::TRANSPARENT,
            },
        ],
    });

    for node in nodes {
        let hot = is_active(&node.item.id);
        if hot {
            ops.push(SceneOp::RadialGlow {
                center: node.position,
                radius: params.active_halo_radius,
                stops: vec![
                    GradientStop {
                        offset: 0.0,
                        color: palette.halo,
                    },
                    GradientStop {
                        offset: 1.0,
                        color: Rgba8::TRANSPARENT,
                    },
                ],
            });
        }
        ops.push(SceneOp::Circle {
            center: node.position,
            radius: if hot {
                params.active_node_radius
            } else {
                params.node_radius
            },
            color: if hot { palette.node_active } else { palette.node },
        });
        ops.push(SceneOp::Label {
            anchor: node.position,
            text: node.item.initial().to_string(),
            size: if hot {
                params.active_label_size
            } else {
                params.label_size
            },
            weight: 600,
            color: if hot {
                palette.label_active
            } else {
                palette.label
            },
            align: TextAlign::Middle,
        });
    }

    ops.push(SceneOp::Label {
        anchor: Point::new(viewport.width - 16.0, viewport.height - 18.0),
        text: format!("{} projects", nodes.len()),
        size: 12.0,
        weight: 500,
        color: palette.badge,
        align: TextAlign::End,
    });

    GraphScene { viewport, ops }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/graph/scene.rs"]
mod tests;
