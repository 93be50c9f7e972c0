//! Integration tests for snapshot export.

use continuous_core::ShapeDescriptor;
use continuous_renderer::{PixmapContainer, SurfaceManager};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

#[test]
fn test_save_png_after_render() {
    let mut container = PixmapContainer::default();
    let mut m = SurfaceManager::new(120, 80, &mut container).expect("manager");
    m.render(&[
        ShapeDescriptor::rect(0.5, 0.5, 0.5, 0.5, "green", true),
        ShapeDescriptor::circle(0.2, 0.2, 6.0, "orange", false),
    ]);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tick.png");
    m.surface().save_png(&path).expect("save");

    let bytes = std::fs::read(&path).expect("read");
    assert_eq!(&bytes[0..4], &PNG_MAGIC);
    assert_eq!(bytes, m.surface().encode_png().expect("encode"));
}

#[test]
fn test_drawn_snapshot_differs_from_blank() {
    let mut container = PixmapContainer::default();
    let mut m = SurfaceManager::new(64, 64, &mut container).expect("manager");
    let blank = m.surface().to_data_uri().expect("blank");

    m.render(&[ShapeDescriptor::circle(0.5, 0.5, 10.0, "purple", true)]);
    let drawn = m.surface().to_data_uri().expect("drawn");
    assert_ne!(blank, drawn);

    m.reset();
    assert_eq!(m.surface().to_data_uri().expect("reset"), blank);
}

#[test]
fn test_save_png_to_missing_directory_fails() {
    let mut container = PixmapContainer::default();
    let m = SurfaceManager::new(8, 8, &mut container).expect("manager");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("tick.png");
    assert!(m.surface().save_png(&path).is_err());
}
