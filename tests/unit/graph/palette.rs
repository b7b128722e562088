use super::*;

#[test]
fn themes_invert_background_and_nodes() {
    let dark = Palette::for_theme(Theme::Dark);
    let light = Palette::for_theme(Theme::Light);
    assert_eq!(dark.background, Rgba8::opaque(0, 0, 0));
    assert_eq!(light.background, Rgba8::opaque(255, 255, 255));
    assert_eq!(dark.node_active, light.node_active);
}

#[test]
fn connection_fades_with_distance() {
    let p = Palette::for_theme(Theme::Dark);
    let near = p.connection(10.0, 250.0, false).unwrap();
    let far = p.connection(200.0, 250.0, false).unwrap();
    assert!(near.a > far.a);
    assert_eq!(p.connection(250.0, 250.0, false), None);
    assert_eq!(p.connection(f64::NAN, 250.0, false), None);
}

#[test]
fn active_connections_are_brighter_and_accented() {
    let p = Palette::for_theme(Theme::Light);
    let idle = p.connection(50.0, 250.0, false).unwrap();
    let hot = p.connection(50.0, 250.0, true).unwrap();
    assert!(hot.a > idle.a);
    assert_eq!((hot.r, hot.g, hot.b), (139, 92, 246));
}

#[test]
fn zero_distance_peaks_at_fixed_opacity() {
    let p = Palette::for_theme(Theme::Dark);
    assert_eq!(p.connection(0.0, 250.0, true).unwrap().a, 128);
    assert_eq!(p.connection(0.0, 250.0, false).unwrap().a, 38);
}
