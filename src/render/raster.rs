use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::error::{FolioError, FolioResult},
    graph::scene::GraphScene,
    render::{SceneBackend, svg::SvgBackend},
};

const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels, row-major.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterizes scenes through their SVG form at a capped device pixel ratio.
pub struct RasterBackend {
    device_pixel_ratio: f64,
    svg: SvgBackend,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl RasterBackend {
    /// `device_pixel_ratio` should already be capped (see `GraphConfig::effective_dpr`).
    pub fn new(device_pixel_ratio: f64) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            device_pixel_ratio,
            svg: SvgBackend::default(),
            fontdb: Arc::new(db),
        }
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn surface_size(&self, scene: &GraphScene) -> FolioResult<(u32, u32)> {
        fn to_px(v: f64) -> FolioResult<u32> {
            if !v.is_finite() || v < 1.0 {
                return Err(FolioError::render(format!(
                    "surface dimension must be >= 1px (got {v})"
                )));
            }
            let px = v.round();
            if px > f64::from(MAX_DIM) {
                return Err(FolioError::render(format!(
                    "surface dimension too large: {px} (max {MAX_DIM})"
                )));
            }
            Ok(px as u32)
        }

        let dpr = self.device_pixel_ratio;
        Ok((
            to_px(scene.viewport.width * dpr)?,
            to_px(scene.viewport.height * dpr)?,
        ))
    }
}

impl SceneBackend for RasterBackend {
    type Output = FrameRgba;

    #[tracing::instrument(level = "debug", skip_all, fields(ops = scene.ops.len()))]
    fn render(&mut self, scene: &GraphScene) -> FolioResult<FrameRgba> {
        let (width, height) = self.surface_size(scene)?;
        let svg = self.svg.render(scene)?;

        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse scene svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| FolioError::render("failed to allocate pixmap"))?;
        let scale = self.device_pixel_ratio as f32;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        let mut data = pixmap.data().to_vec();
        demultiply_rgba8_in_place(&mut data);
        Ok(FrameRgba {
            width,
            height,
            data,
        })
    }
}

/// Write a frame as PNG, creating parent directories.
pub fn save_png(frame: &FrameRgba, path: &Path) -> FolioResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
