use super::*;

#[test]
fn inset_matches_padding_on_both_axes() {
    let r = Viewport::new(800.0, 600.0).inset(50.0);
    assert_eq!(r, Rect::new(50.0, 50.0, 750.0, 550.0));
}

#[test]
fn inset_collapses_to_center_when_too_small() {
    let r = Viewport::new(60.0, 600.0).inset(50.0);
    assert_eq!(r.x0, 30.0);
    assert_eq!(r.x1, 30.0);
    assert_eq!(r.y0, 50.0);
}

#[test]
fn usable_rejects_zero_and_nan() {
    assert!(Viewport::new(1.0, 1.0).is_usable());
    assert!(!Viewport::new(0.0, 10.0).is_usable());
    assert!(!Viewport::new(f64::NAN, 10.0).is_usable());
    assert!(!Viewport::new(10.0, f64::INFINITY).is_usable());
}

#[test]
fn alpha_fraction_rounds_and_clamps() {
    let c = Rgba8::opaque(139, 92, 246);
    assert_eq!(c.with_alpha(0.5).a, 128);
    assert_eq!(c.with_alpha(2.0).a, 255);
    assert_eq!(c.with_alpha(-1.0).a, 0);
    assert_eq!(c.to_hex(), "#8b5cf6");
}
