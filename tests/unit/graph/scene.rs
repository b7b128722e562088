use super::*;
use crate::graph::{
    config::{GraphConfig, Theme},
    interaction::Interaction,
    item::Item,
};

fn sim_with(n: usize, theme: Theme) -> Simulation {
    let mut cfg = GraphConfig::default();
    cfg.theme = theme;
    cfg.wide.jitter = 0.0;
    cfg.wide.initial_speed = 0.0;
    cfg.wide.connection_distance = 400.0;
    let mut sim = Simulation::with_seed(cfg, 4);
    let items: Vec<Item> = (0..n)
        .map(|i| Item::new(&format!("p{i}"), &format!("node{i}")))
        .collect();
    sim.seed(&items, Viewport::new(800.0, 600.0));
    sim
}

fn kinds(scene: &GraphScene) -> Vec<&'static str> {
    scene
        .ops
        .iter()
        .map(|op| match op {
            SceneOp::Fill { .. } => "fill",
            SceneOp::Line { .. } => "line",
            SceneOp::RadialGlow { .. } => "glow",
            SceneOp::Circle { .. } => "circle",
            SceneOp::Label { .. } => "label",
        })
        .collect()
}

#[test]
fn draw_order_is_background_lines_glow_nodes_badge() {
    let sim = sim_with(3, Theme::Dark);
    let scene = build_scene(&sim, None);
    assert_eq!(
        kinds(&scene),
        vec![
            "fill", "line", "line", "line", "glow", "circle", "label", "circle", "label",
            "circle", "label", "label",
        ]
    );
}

#[test]
fn single_node_has_no_lines_but_still_renders() {
    let sim = sim_with(1, Theme::Dark);
    let scene = build_scene(&sim, None);
    assert_eq!(scene.lines().count(), 0);
    assert_eq!(scene.circles().count(), 1);
    assert!(scene.ops.iter().any(|op| matches!(op, SceneOp::RadialGlow { .. })));
}

#[test]
fn empty_graph_draws_background_glow_and_badge() {
    let sim = sim_with(0, Theme::Light);
    let scene = build_scene(&sim, None);
    assert_eq!(kinds(&scene), vec!["fill", "glow", "label"]);
    let Some(SceneOp::Label { text, .. }) = scene.ops.last() else {
        panic!("badge missing");
    };
    assert_eq!(text, "0 projects");
}

#[test]
fn far_apart_nodes_are_not_connected() {
    let mut cfg = GraphConfig::default();
    cfg.wide.connection_distance = 10.0;
    let mut sim = Simulation::with_seed(cfg, 4);
    sim.seed(
        &[Item::new("a", "A"), Item::new("b", "B")],
        Viewport::new(800.0, 600.0),
    );
    assert_eq!(build_scene(&sim, None).lines().count(), 0);
}

#[test]
fn active_node_is_enlarged_haloed_and_recolored() {
    let sim = sim_with(3, Theme::Dark);
    let active = ItemId::from("p1");
    let scene = build_scene(&sim, Some(&active));
    let palette = Palette::for_theme(Theme::Dark);

    let radii: Vec<f64> = scene
        .circles()
        .map(|op| match op {
            SceneOp::Circle { radius, .. } => *radius,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(radii, vec![18.0, 24.0, 18.0]);

    let glows = scene
        .ops
        .iter()
        .filter(|op| matches!(op, SceneOp::RadialGlow { .. }))
        .count();
    assert_eq!(glows, 2);

    let widths: Vec<f64> = scene
        .lines()
        .map(|op| match op {
            SceneOp::Line { width, color, .. } => {
                if *width == 2.0 {
                    assert_eq!((color.r, color.g, color.b), (139, 92, 246));
                }
                *width
            }
            _ => unreachable!(),
        })
        .collect();
    // p0-p1 and p1-p2 touch the active node, p0-p2 does not.
    assert_eq!(widths, vec![2.0, 1.0, 2.0]);
    assert!(scene.ops.contains(&SceneOp::Circle {
        center: sim.nodes()[1].position,
        radius: 24.0,
        color: palette.node_active,
    }));
}

#[test]
fn labels_use_the_item_initial() {
    let sim = sim_with(2, Theme::Dark);
    let scene = build_scene(&sim, None);
    let letters: Vec<&str> = scene
        .ops
        .iter()
        .filter_map(|op| match op {
            SceneOp::Label {
                text,
                align: TextAlign::Middle,
                ..
            } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(letters, vec!["N", "N"]);
}

#[test]
fn tooltip_card_is_appended_last() {
    let sim = sim_with(3, Theme::Dark);
    let mut ix = Interaction::new();
    ix.pointer_move(&sim, sim.nodes()[0].position);
    let tooltip = ix.tooltip(&sim, &sim.config().tooltip).unwrap();

    let mut scene = build_scene(&sim, ix.active());
    let before = scene.ops.len();
    scene.push_tooltip(&tooltip, &Palette::for_theme(Theme::Dark));
    assert_eq!(scene.ops.len(), before + 2);
    assert!(matches!(scene.ops[before], SceneOp::Fill { .. }));
}

#[test]
fn long_subtitles_are_truncated() {
    assert_eq!(truncate("short", 28), "short");
    let t = truncate(&"x".repeat(40), 10);
    assert_eq!(t.chars().count(), 10);
    assert!(t.ends_with('…'));
}
