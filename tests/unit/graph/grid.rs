use super::*;

fn sample() -> Vec<Item> {
    vec![
        Item::new("fundora", "Fundora").with_tagline("RL investment advisor"),
        Item::new("atlas", "Vision Atlas").with_url("https://atlas.dev"),
        Item::new("sarathi", "Sarathi Studio"),
    ]
}

#[test]
fn narrow_screens_get_the_grid() {
    let cfg = GraphConfig::default();
    let layout = graph_layout(&sample(), Viewport::new(360.0, 640.0), &cfg);
    let GraphLayout::Grid(cards) = layout else {
        panic!("expected grid");
    };
    assert_eq!(cards.len(), 3);
}

#[test]
fn wide_screens_keep_the_canvas() {
    let cfg = GraphConfig::default();
    assert_eq!(
        graph_layout(&sample(), Viewport::new(1024.0, 350.0), &cfg),
        GraphLayout::Canvas
    );
}

#[test]
fn cards_fill_two_columns_row_major() {
    let cards = grid_cards(&sample());
    let cells: Vec<(usize, usize)> = cards.iter().map(|c| (c.row, c.column)).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0)]);
}

#[test]
fn cards_carry_avatar_and_link() {
    let cards = grid_cards(&sample());
    assert_eq!(cards[0].initials, "F");
    assert_eq!(cards[0].subtitle, "RL investment advisor");
    assert_eq!(cards[0].href, "/projects/fundora");
    assert_eq!(cards[1].initials, "VA");
    assert_eq!(cards[1].href, "https://atlas.dev");
}

#[test]
fn empty_list_gives_empty_grid() {
    assert!(grid_cards(&[]).is_empty());
}
