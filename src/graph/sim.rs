use std::f64::consts::TAU;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    foundation::{
        core::{Point, Rect, Vec2, Viewport},
        math::fingerprint_ids,
    },
    graph::{
        config::{GraphConfig, InputKind, ResponsiveParams},
        item::{Item, ItemId},
    },
};

/// One drifting node per item.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Point,
    pub velocity: Vec2,
    pub item: Item,
}

/// Why [`Simulation::sync`] re-laid the nodes out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReseedReason {
    /// First sync, or the ids/order of the item list changed.
    Items,
    /// The previous seed happened while the viewport had no usable size.
    Viewport,
    /// Width moved by more than `reseed_width_delta` since the last seed.
    Resize,
}

/// Owned, explicitly stepped node simulation.
///
/// Positions stay inside `[padding, size - padding]` after every [`Simulation::step`].
#[derive(Clone, Debug)]
pub struct Simulation {
    config: GraphConfig,
    viewport: Viewport,
    nodes: Vec<Node>,
    items_fingerprint: Option<u64>,
    seeded_width: Option<f64>,
    rng: StdRng,
    frames: u64,
}

impl Simulation {
    /// Uses `config.seed` when set, entropy otherwise.
    pub fn new(config: GraphConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_seed(config: GraphConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GraphConfig, rng: StdRng) -> Self {
        Self {
            config,
            viewport: Viewport::new(0.0, 0.0),
            nodes: Vec::new(),
            items_fingerprint: None,
            seeded_width: None,
            rng,
            frames: 0,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &ItemId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.item.id == id)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn params(&self) -> &ResponsiveParams {
        self.config.params_for(self.viewport)
    }

    /// Region node centers are confined to.
    pub fn bounds(&self) -> Rect {
        self.viewport.inset(self.params().padding)
    }

    /// Bring the simulation in line with the current items and viewport.
    ///
    /// Reseeds on a changed item list or a coarse width change; smaller resizes only move the
    /// bounds and nodes are pulled back inside on the next step. Edits to items whose ids are
    /// unchanged are applied to the existing nodes in place.
    pub fn sync(&mut self, items: &[Item], viewport: Viewport) -> Option<ReseedReason> {
        let fingerprint = fingerprint_ids(items.iter().map(|i| i.id.as_str()));
        let reason = if self.items_fingerprint != Some(fingerprint) {
            Some(ReseedReason::Items)
        } else {
            match self.seeded_width {
                None if viewport.is_usable() => Some(ReseedReason::Viewport),
                Some(w) if (viewport.width - w).abs() > self.config.reseed_width_delta => {
                    Some(ReseedReason::Resize)
                }
                _ => None,
            }
        };

        match reason {
            Some(reason) => {
                tracing::debug!(?reason, width = viewport.width, "reseeding graph");
                self.seed(items, viewport);
            }
            None => {
                self.viewport = viewport;
                // Same ids in the same order: keep positions, pick up edited names and links.
                for (node, item) in self.nodes.iter_mut().zip(items) {
                    if node.item != *item {
                        node.item = item.clone();
                    }
                }
            }
        }
        reason
    }

    /// Lay nodes out on a circle around the center with jitter and a small random velocity.
    #[tracing::instrument(level = "debug", skip(self, items), fields(items = items.len()))]
    pub fn seed(&mut self, items: &[Item], viewport: Viewport) {
        self.viewport = viewport;
        self.items_fingerprint = Some(fingerprint_ids(items.iter().map(|i| i.id.as_str())));

        if !viewport.is_usable() {
            tracing::warn!(?viewport, "seeding without a usable viewport");
            self.seeded_width = None;
            self.nodes = items
                .iter()
                .map(|item| Node {
                    position: Point::ZERO,
                    velocity: Vec2::ZERO,
                    item: item.clone(),
                })
                .collect();
            return;
        }

        self.seeded_width = Some(viewport.width);
        let Self { config, rng, .. } = self;
        let params = config.params_for(viewport);
        let bounds = viewport.inset(params.padding);
        let center = viewport.center();
        let radius = viewport.min_side() * params.radius_fraction;
        let n = items.len() as f64;

        let nodes = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let angle = (i as f64 / n) * TAU;
                let x = center.x + angle.cos() * radius + centered(rng) * params.jitter;
                let y = center.y + angle.sin() * radius + centered(rng) * params.jitter;
                Node {
                    position: Point::new(
                        x.clamp(bounds.x0, bounds.x1),
                        y.clamp(bounds.y0, bounds.y1),
                    ),
                    velocity: Vec2::new(
                        centered(rng) * params.initial_speed,
                        centered(rng) * params.initial_speed,
                    ),
                    item: item.clone(),
                }
            })
            .collect();
        self.nodes = nodes;
    }

    /// Advance by `dt` frames (`1.0` is one 60 Hz frame).
    pub fn step(&mut self, dt: f64) {
        if !self.viewport.is_usable() || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let Self {
            config,
            viewport,
            nodes,
            rng,
            ..
        } = self;
        let params = config.params_for(*viewport);
        let bounds = viewport.inset(params.padding);
        let damping = params.damping.powf(dt);

        for node in nodes.iter_mut() {
            node.position += node.velocity * dt;

            bounce(
                &mut node.position.x,
                &mut node.velocity.x,
                bounds.x0,
                bounds.x1,
                params.bounce,
            );
            bounce(
                &mut node.position.y,
                &mut node.velocity.y,
                bounds.y0,
                bounds.y1,
                params.bounce,
            );

            node.velocity.x += centered(rng) * params.wander * dt;
            node.velocity.y += centered(rng) * params.wander * dt;
            node.velocity *= damping;
        }
        self.frames += 1;
    }

    /// Item of the first node within the hit radius of `point`.
    pub fn hit_test(&self, point: Point, input: InputKind) -> Option<ItemId> {
        self.node_at(point, input).map(|n| n.item.id.clone())
    }

    pub fn node_at(&self, point: Point, input: InputKind) -> Option<&Node> {
        let radius = self.params().hit_radius(input);
        self.nodes
            .iter()
            .find(|n| n.position.distance(point) < radius)
    }
}

/// Uniform in `[-0.5, 0.5)`.
fn centered(rng: &mut StdRng) -> f64 {
    rng.gen_range(-0.5..0.5)
}

/// Soft bounce: reverse and damp the velocity when outside `[lo, hi]`, then clamp.
fn bounce(pos: &mut f64, vel: &mut f64, lo: f64, hi: f64, factor: f64) {
    if *pos < lo || *pos > hi {
        *vel *= -factor;
    }
    *pos = pos.clamp(lo, hi);
}

#[cfg(test)]
#[path = "../../tests/unit/graph/sim.rs"]
mod tests;
