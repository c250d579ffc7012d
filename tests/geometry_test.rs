use ocr_cipher::geometry::{BoundingRegion, Position, RectOrigin};

// ============================================================
// 1. lbrt construction
// ============================================================

#[test]
fn test_from_lbrt_round_trips_through_bottom_left_rect() {
    let (left, bottom, right, top) = (236, 442, 248, 460);
    let region = BoundingRegion::from_lbrt(left, bottom, right, top, 640, 480)
        .expect("should build region");

    assert_eq!(
        region.to_rect(RectOrigin::BottomLeft),
        (left, top, left + (right - left), top - (top - bottom))
    );
}

#[test]
fn test_from_lbrt_extents() {
    let region = BoundingRegion::from_lbrt(10, 20, 30, 50, 100, 100).expect("should build region");
    assert_eq!(region.left(), 10);
    assert_eq!(region.top(), 50);
    assert_eq!(region.width(), 20);
    assert_eq!(region.height(), 30);
    assert_eq!(region.img_width(), 100);
    assert_eq!(region.img_height(), 100);
}

#[test]
fn test_from_lbrt_inverted_horizontal_extent_fails() {
    let result = BoundingRegion::from_lbrt(30, 20, 10, 50, 100, 100);
    assert!(result.is_err(), "right < left should fail");
}

#[test]
fn test_from_lbrt_inverted_vertical_extent_fails() {
    let result = BoundingRegion::from_lbrt(10, 50, 30, 20, 100, 100);
    assert!(result.is_err(), "top < bottom should fail");
}

// ============================================================
// 2. Origin conversion
// ============================================================

#[test]
fn test_to_rect_top_left_flips_y_axis() {
    let region = BoundingRegion::from_lbrt(10, 20, 30, 50, 100, 100).expect("should build region");
    // top=50 from the bottom of a 100-high image puts the box top at pixel
    // row 50; the box bottom (20 from the bottom) lands at row 80.
    assert_eq!(region.to_rect(RectOrigin::TopLeft), (10, 50, 30, 80));
}

#[test]
fn test_to_rect_top_left_of_box_touching_image_top_is_zero() {
    let region = BoundingRegion::from_lbrt(5, 90, 15, 100, 100, 100).expect("should build region");
    let (_, y0, _, _) = region.to_rect(RectOrigin::TopLeft);
    assert_eq!(y0, 0);
}

#[test]
fn test_anchor_is_top_left_corner_in_pixel_coordinates() {
    let region = BoundingRegion::from_lbrt(10, 20, 30, 50, 100, 100).expect("should build region");
    assert_eq!(region.anchor(), Position::new(10, 50));
}

// ============================================================
// 3. Corner-quad normalization
// ============================================================

#[test]
fn test_from_corners_matches_from_lbrt() {
    // Axis-aligned quad in pixel coordinates (y down): rows 50..80, cols 10..30.
    let from_corners = BoundingRegion::from_corners(
        Position::new(10, 50),
        Position::new(30, 50),
        Position::new(10, 80),
        Position::new(30, 80),
        100,
        100,
    )
    .expect("should build region");

    let from_lbrt =
        BoundingRegion::from_lbrt(10, 20, 30, 50, 100, 100).expect("should build region");

    assert_eq!(from_corners, from_lbrt);
}

#[test]
fn test_from_corners_takes_axis_aligned_hull_of_skewed_quad() {
    let region = BoundingRegion::from_corners(
        Position::new(12, 50),
        Position::new(30, 52),
        Position::new(10, 78),
        Position::new(28, 80),
        100,
        100,
    )
    .expect("should build region");

    assert_eq!(region.to_rect(RectOrigin::TopLeft), (10, 50, 30, 80));
}
