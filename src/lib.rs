//! Folio is the rendering core of a personal portfolio site.
//!
//! Two independent pieces live here:
//!
//! - A lenient markdown-subset renderer: [`render_markdown`] turns post text into a flat
//!   sequence of [`Block`]s and never fails.
//! - A drifting project node graph: a [`Simulation`] of [`Item`]s, pointer/touch
//!   [`Interaction`], a backend-neutral [`GraphScene`], and a [`GraphLayout::Grid`]
//!   fallback for very narrow viewports. [`GraphView`] ties them to a frame scheduler.
//!
//! Scenes are drawn by a [`SceneBackend`]: [`SvgBackend`] emits SVG text and
//! [`RasterBackend`] rasterizes that SVG into RGBA pixels.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod graph;
pub(crate) mod markdown;
pub(crate) mod render;

pub use crate::foundation::core::{Point, Rect, Rgba8, Vec2, Viewport};
pub use crate::foundation::ease::Ease;
pub use crate::foundation::error::{FolioError, FolioResult};

pub use crate::markdown::block::{Block, parse_blocks};
pub use crate::markdown::inline::{Inline, parse_inline, visible_text};
pub use crate::markdown::serialize::{blocks_to_markdown, inline_to_markdown};
pub use crate::markdown::{default_fallback, render_markdown, render_markdown_or, render_post_body};

pub use crate::graph::config::{GraphConfig, InputKind, ResponsiveParams, Theme, TooltipConfig};
pub use crate::graph::grid::{GRID_COLUMNS, GraphLayout, GridCard, graph_layout, grid_cards};
pub use crate::graph::interaction::{Interaction, Tooltip, place_tooltip};
pub use crate::graph::item::{Item, ItemId};
pub use crate::graph::palette::{ACCENT, ACCENT_PINK, Palette};
pub use crate::graph::scene::{GradientStop, GraphScene, SceneOp, TextAlign, build_scene};
pub use crate::graph::sim::{Node, ReseedReason, Simulation};
pub use crate::graph::view::{FrameRequest, FrameScheduler, GraphView, ManualScheduler};

pub use crate::render::SceneBackend;
pub use crate::render::raster::{FrameRgba, RasterBackend, save_png};
pub use crate::render::svg::{DEFAULT_FONT_FAMILY, SvgBackend, scene_to_svg};
