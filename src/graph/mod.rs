//! Drifting project node graph.
//!
//! [`sim::Simulation`] owns positions and velocities and is stepped explicitly,
//! [`scene::build_scene`] turns a simulation into draw operations, and [`view::GraphView`]
//! ties both to a host frame loop.

pub(crate) mod config;
pub(crate) mod grid;
pub(crate) mod interaction;
pub(crate) mod item;
pub(crate) mod palette;
pub(crate) mod scene;
pub(crate) mod sim;
pub(crate) mod view;
