use crate::{
    foundation::core::Viewport,
    graph::{
        config::GraphConfig,
        item::{Item, ItemId},
    },
};

pub const GRID_COLUMNS: usize = 2;

/// Static card used instead of the canvas on very small screens.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GridCard {
    pub id: ItemId,
    pub initials: String,
    pub name: String,
    pub subtitle: String,
    pub href: String,
    pub row: usize,
    pub column: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphLayout {
    Canvas,
    Grid(Vec<GridCard>),
}

/// Pick the canvas or the static grid for this viewport.
pub fn graph_layout(items: &[Item], viewport: Viewport, config: &GraphConfig) -> GraphLayout {
    if config.uses_grid(viewport) {
        GraphLayout::Grid(grid_cards(items))
    } else {
        GraphLayout::Canvas
    }
}

/// Row-major two-column cards in item order.
pub fn grid_cards(items: &[Item]) -> Vec<GridCard> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| GridCard {
            id: item.id.clone(),
            initials: item.initials(),
            name: item.name.clone(),
            subtitle: item.tagline.clone(),
            href: item.link_target(),
            row: idx / GRID_COLUMNS,
            column: idx % GRID_COLUMNS,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/graph/grid.rs"]
mod tests;
