use image::{Rgba, RgbaImage};

use rusty_gaze::{
    Detection, FrameRenderer, GazeDirection, NormalizationRatio, PackedFrame, RasterSurface, Surface,
};

const EYE: i64 = 0;
const PUPIL: i64 = 1;

fn frame() -> Vec<Detection> {
    vec![
        Detection::new([0.30, 0.40, 0.70, 0.60], 0.92, EYE),
        Detection::new([0.38, 0.45, 0.46, 0.55], 0.81, PUPIL),
        Detection::new([0.10, 0.10, 0.20, 0.20], 0.05, EYE),
    ]
}

#[test]
fn renders_identically_twice() {
    let renderer = FrameRenderer::default();
    let mut surface = RasterSurface::new(320, 240);

    let first = renderer.render(&mut surface, 0.25, &frame(), NormalizationRatio::default());
    let snapshot = surface.image().clone();
    let second = renderer.render(&mut surface, 0.25, &frame(), NormalizationRatio::default());

    assert_eq!(first, Some(GazeDirection::Left));
    assert_eq!(first, second);
    assert_eq!(surface.image(), &snapshot);
}

#[test]
fn low_scores_leave_surface_blank() {
    let renderer = FrameRenderer::default();
    let bg = RgbaImage::from_pixel(100, 80, Rgba([12, 34, 56, 255]));
    let mut surface = RasterSurface::with_background(bg.clone());

    let dets = [
        Detection::new([0.1, 0.1, 0.9, 0.9], 0.25, EYE),
        Detection::new([0.4, 0.4, 0.5, 0.5], 0.1, PUPIL),
    ];
    let gaze = renderer.render(&mut surface, 0.25, &dets, NormalizationRatio::default());

    assert_eq!(gaze, None);
    assert_eq!(surface.image(), &bg);
}

#[test]
fn box_near_top_edge_keeps_label_on_surface() {
    let renderer = FrameRenderer::default();
    let bg = RgbaImage::from_pixel(200, 200, Rgba([0, 0, 0, 255]));
    let mut surface = RasterSurface::with_background(bg);

    // Box top at y=4, the badge would start at 4 - (14 + 2.5)
    let dets = [Detection::new([0.25, 0.02, 0.75, 0.5], 0.9, EYE)];
    renderer.render(&mut surface, 0.25, &dets, NormalizationRatio::default());

    // Badge is solid #FF3838 from row 0; its top-left corner sits above the glyphs
    let badge_px = surface.image().get_pixel(49, 0);
    assert_eq!(*badge_px, Rgba([0xFF, 0x38, 0x38, 255]));
    // Box interior carries the 20% tint over black
    let inside = surface.image().get_pixel(100, 60);
    assert_eq!(*inside, Rgba([51, 11, 11, 255]));
}

#[test]
fn packed_frame_from_json_renders() {
    let json = r#"{
        "boxes": [0.2, 0.2, 0.8, 0.8, 0.55, 0.4, 0.65, 0.6],
        "scores": [0.88, 0.77],
        "classes": [0, 1],
        "ratio": [1.0, 1.0]
    }"#;
    let frame: PackedFrame = serde_json::from_str(json).unwrap();
    let renderer = FrameRenderer::default();
    let mut surface = RasterSurface::new(160, 120);

    let report = renderer
        .render_packed(&mut surface, 0.25, &frame.boxes, &frame.scores, &frame.classes, frame.ratio)
        .unwrap();

    assert_eq!(report.boxes.len(), 2);
    assert_eq!(report.gaze.map(|g| g.direction), Some(GazeDirection::Right));
    assert_eq!(surface.width(), 160);
    assert!(surface.image().pixels().any(|p| p[3] > 0));
}

#[test]
fn mismatched_arrays_are_rejected() {
    let renderer = FrameRenderer::default();
    let mut surface = RasterSurface::new(50, 50);
    let err = renderer
        .render_packed(&mut surface, 0.25, &[0.1, 0.1, 0.2, 0.2], &[0.9, 0.8], &[0, 1], NormalizationRatio::default())
        .unwrap_err();
    assert!(err.to_string().contains("1 boxes supplied for 2 scores"));
}
