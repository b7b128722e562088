use crate::{
    foundation::core::{Point, Viewport},
    graph::{
        config::{GraphConfig, InputKind},
        grid::{GraphLayout, graph_layout},
        interaction::{Interaction, Tooltip},
        item::Item,
        scene::{GraphScene, build_scene},
        sim::{ReseedReason, Simulation},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Host frame loop and resize notifications (`requestAnimationFrame` and friends).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;

    fn cancel_frame(&mut self, request: FrameRequest);

    /// Stop resize notifications for this view.
    fn detach_resize(&mut self);
}

/// Scheduler driven by the caller, e.g. offline rendering or tests.
#[derive(Clone, Debug)]
pub struct ManualScheduler {
    next_id: u64,
    pub requested: Vec<FrameRequest>,
    pub cancelled: Vec<FrameRequest>,
    pub resize_attached: bool,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self {
            next_id: 0,
            requested: Vec::new(),
            cancelled: Vec::new(),
            resize_attached: true,
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let req = FrameRequest(self.next_id);
        self.requested.push(req);
        req
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.cancelled.push(request);
    }

    fn detach_resize(&mut self) {
        self.resize_attached = false;
    }
}

/// Mounted visualizer: owns the simulation, the interaction state and the pending frame.
///
/// Below the grid breakpoint the canvas is not shown: no frames are scheduled and input is
/// ignored until a resize brings the viewport back above it. Unmounting (explicitly or on
/// drop) cancels the pending frame and detaches resize handling; every callback afterwards
/// is a no-op.
pub struct GraphView<S: FrameScheduler> {
    sim: Simulation,
    items: Vec<Item>,
    interaction: Interaction,
    scheduler: S,
    pending: Option<FrameRequest>,
    mounted: bool,
}

impl<S: FrameScheduler> GraphView<S> {
    pub fn mount(items: Vec<Item>, viewport: Viewport, config: GraphConfig, scheduler: S) -> Self {
        let mut sim = Simulation::new(config);
        sim.sync(&items, viewport);
        let mut view = Self {
            sim,
            items,
            interaction: Interaction::new(),
            scheduler,
            pending: None,
            mounted: true,
        };
        if !view.in_grid() {
            view.pending = Some(view.scheduler.request_frame());
        }
        tracing::debug!(
            items = view.items.len(),
            grid = view.in_grid(),
            "graph view mounted"
        );
        view
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending
    }

    pub fn layout(&self) -> GraphLayout {
        graph_layout(&self.items, self.sim.viewport(), self.sim.config())
    }

    fn in_grid(&self) -> bool {
        self.sim.config().uses_grid(self.sim.viewport())
    }

    /// Mounted and showing the canvas.
    fn canvas_live(&self) -> bool {
        self.mounted && !self.in_grid()
    }

    /// Frame callback: advance one frame, describe it and schedule the next one.
    ///
    /// Returns `None` without rescheduling while the grid layout is shown.
    pub fn on_frame(&mut self) -> Option<GraphScene> {
        if !self.mounted {
            return None;
        }
        self.pending = None;
        if self.in_grid() {
            return None;
        }
        self.sim.step(1.0);
        self.interaction.advance();
        let scene = build_scene(&self.sim, self.interaction.active());
        self.pending = Some(self.scheduler.request_frame());
        Some(scene)
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        if !self.canvas_live() {
            return None;
        }
        self.interaction
            .tooltip(&self.sim, &self.sim.config().tooltip)
    }

    pub fn set_items(&mut self, items: Vec<Item>) -> Option<ReseedReason> {
        if !self.mounted {
            return None;
        }
        self.items = items;
        self.resync(self.sim.viewport())
    }

    pub fn resize(&mut self, viewport: Viewport) -> Option<ReseedReason> {
        if !self.mounted {
            return None;
        }
        self.resync(viewport)
    }

    fn resync(&mut self, viewport: Viewport) -> Option<ReseedReason> {
        let reason = self.sim.sync(&self.items, viewport);
        let stale = self
            .interaction
            .active()
            .is_some_and(|id| self.sim.node(id).is_none());
        if stale || self.in_grid() {
            self.interaction.clear();
        }

        if self.in_grid() {
            if let Some(req) = self.pending.take() {
                self.scheduler.cancel_frame(req);
                tracing::debug!(request = req.0, "switched to grid, frames paused");
            }
        } else if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
            tracing::debug!("canvas shown, frames resumed");
        }
        reason
    }

    /// Ignored on touch devices, where pointer moves are synthesized from taps.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        if !self.canvas_live() || self.sim.config().input == InputKind::Touch {
            return false;
        }
        self.interaction.pointer_move(&self.sim, point)
    }

    pub fn pointer_leave(&mut self) -> bool {
        if !self.canvas_live() {
            return false;
        }
        self.interaction.pointer_leave()
    }

    pub fn touch_start(&mut self, point: Point) -> bool {
        if !self.canvas_live() {
            return false;
        }
        self.interaction.touch_start(&self.sim, point)
    }

    pub fn touch_move(&mut self, point: Point) -> bool {
        if !self.canvas_live() {
            return false;
        }
        self.interaction.touch_move(&self.sim, point)
    }

    pub fn touch_end(&mut self) -> bool {
        if !self.canvas_live() {
            return false;
        }
        self.interaction.touch_end()
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(req) = self.pending.take() {
            self.scheduler.cancel_frame(req);
            tracing::debug!(request = req.0, "cancelled pending frame");
        }
        self.scheduler.detach_resize();
        tracing::debug!("graph view unmounted");
    }
}

impl<S: FrameScheduler> Drop for GraphView<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/view.rs"]
mod tests;
