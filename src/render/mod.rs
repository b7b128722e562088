pub(crate) mod raster;
pub(crate) mod svg;

use crate::{foundation::error::FolioResult, graph::scene::GraphScene};

/// Turns a scene description into backend output (markup, pixels, ...).
pub trait SceneBackend {
    type Output;

    fn render(&mut self, scene: &GraphScene) -> FolioResult<Self::Output>;
}
