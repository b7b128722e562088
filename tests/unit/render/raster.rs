use super::*;
use crate::{
    foundation::core::{Point, Rgba8, Viewport},
    graph::scene::SceneOp,
};

fn solid_scene(viewport: Viewport, color: Rgba8) -> GraphScene {
    GraphScene {
        viewport,
        ops: vec![SceneOp::Fill {
            rect: viewport.rect(),
            corner_radius: 0.0,
            color,
        }],
    }
}

#[test]
fn demultiply_restores_straight_channels() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 255, 9, 9, 9, 0];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[9, 9, 9, 0]);
}

#[test]
fn surface_scales_with_device_pixel_ratio() {
    let backend = RasterBackend {
        device_pixel_ratio: 2.0,
        svg: SvgBackend::default(),
        fontdb: Arc::new(usvg::fontdb::Database::new()),
    };
    let scene = solid_scene(Viewport::new(40.0, 30.0), Rgba8::opaque(0, 0, 0));
    assert_eq!(backend.surface_size(&scene).unwrap(), (80, 60));

    let empty = solid_scene(Viewport::new(0.0, 30.0), Rgba8::opaque(0, 0, 0));
    assert!(matches!(
        backend.surface_size(&empty),
        Err(FolioError::Render(_))
    ));
}

#[test]
fn renders_background_and_circle() {
    let mut backend = RasterBackend {
        device_pixel_ratio: 1.0,
        svg: SvgBackend::default(),
        fontdb: Arc::new(usvg::fontdb::Database::new()),
    };
    let mut scene = solid_scene(Viewport::new(40.0, 40.0), Rgba8::opaque(0, 0, 0));
    scene.ops.push(SceneOp::Circle {
        center: Point::new(20.0, 20.0),
        radius: 8.0,
        color: Rgba8::opaque(255, 255, 255),
    });
    let frame = backend.render(&scene).unwrap();
    assert_eq!((frame.width, frame.height), (40, 40));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(20, 20), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(40, 0), None);
}

#[test]
fn png_round_trips_through_disk() {
    let dir = std::path::PathBuf::from("target").join("raster_unit");
    let path = dir.join("solid.png");
    let _ = std::fs::remove_file(&path);
    let frame = FrameRgba {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 0, 0, 255, 255],
    };
    save_png(&frame, &path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 255, 255]);
}
