use crate::{
    foundation::{
        core::{Point, Rect, Viewport},
        ease::Ease,
    },
    graph::{
        config::{InputKind, TooltipConfig},
        item::ItemId,
        sim::Simulation,
    },
};

/// Hover/tap state: at most one active item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
    active: Option<ItemId>,
    pointer: Point,
    /// Frames since the active item last changed.
    age: u32,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Mouse moved inside the container. Returns whether the active item changed.
    pub fn pointer_move(&mut self, sim: &Simulation, point: Point) -> bool {
        self.pointer = point;
        let hit = sim.hit_test(point, InputKind::Pointer);
        self.set_active(hit)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.set_active(None)
    }

    /// Tap: selects the touched node, or dismisses it when it is already active.
    pub fn touch_start(&mut self, sim: &Simulation, point: Point) -> bool {
        self.pointer = point;
        match sim.hit_test(point, InputKind::Touch) {
            Some(id) if self.active.as_ref() == Some(&id) => self.set_active(None),
            hit => self.set_active(hit),
        }
    }

    pub fn touch_move(&mut self, sim: &Simulation, point: Point) -> bool {
        self.pointer = point;
        let hit = sim.hit_test(point, InputKind::Touch);
        self.set_active(hit)
    }

    /// Touch end keeps the current selection so the tooltip stays readable.
    pub fn touch_end(&mut self) -> bool {
        false
    }

    /// Drop the active item. Returns whether anything was active.
    pub fn clear(&mut self) -> bool {
        self.set_active(None)
    }

    /// Count one rendered frame for the tooltip entry motion.
    pub fn advance(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    fn set_active(&mut self, next: Option<ItemId>) -> bool {
        if self.active == next {
            return false;
        }
        self.active = next;
        self.age = 0;
        true
    }

    /// Tooltip for the active node, if it still exists.
    pub fn tooltip(&self, sim: &Simulation, cfg: &TooltipConfig) -> Option<Tooltip> {
        let node = sim.node(self.active.as_ref()?)?;
        let t = if cfg.enter_frames == 0 {
            1.0
        } else {
            f64::from(self.age) / f64::from(cfg.enter_frames)
        };
        let rise = Ease::OutCubic.lerp(cfg.enter_rise, 0.0, t);
        Some(Tooltip {
            item: node.item.id.clone(),
            title: node.item.name.clone(),
            subtitle: node.item.tagline.clone(),
            href: node.item.link_target(),
            rect: place_tooltip(node.position, sim.viewport(), cfg, rise),
            opacity: Ease::OutCubic.apply(t),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub item: ItemId,
    pub title: String,
    pub subtitle: String,
    pub href: String,
    pub rect: Rect,
    pub opacity: f64,
}

/// Center the box above `anchor`, shifted down by `rise`, then keep it inside the viewport.
pub fn place_tooltip(anchor: Point, viewport: Viewport, cfg: &TooltipConfig, rise: f64) -> Rect {
    let pad = cfg.edge_padding;
    let left = clamp_span(
        anchor.x - cfg.width * 0.5,
        pad,
        viewport.width - cfg.width - pad,
    );
    let top = clamp_span(
        anchor.y - cfg.offset_y + rise,
        pad,
        viewport.height - cfg.height - pad,
    );
    Rect::new(left, top, left + cfg.width, top + cfg.height)
}

/// Clamp into `[lo, hi]`, pinning to `lo` when the span is empty.
fn clamp_span(v: f64, lo: f64, hi: f64) -> f64 {
    if hi.is_nan() || hi < lo || v.is_nan() {
        return lo;
    }
    v.clamp(lo, hi)
}

#[cfg(test)]
#[path = "../../tests/unit/graph/interaction.rs"]
mod tests;
