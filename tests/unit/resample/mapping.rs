use super::*;

#[test]
fn halving_maps_every_other_source_pixel() {
    let src = PixelBuffer::filled(4, 6, 0).unwrap();
    let map = CoordMap::new(&src, 2, 3).unwrap();
    assert_eq!(map.width_ratio(), 0.5);
    assert_eq!(map.height_ratio(), 0.5);
    assert_eq!(map.src_x(0), 0.0);
    assert_eq!(map.src_x(1), 2.0);
    assert_eq!(map.src_y(2), 4.0);
    assert_eq!(map.max_x(), 3);
    assert_eq!(map.max_y(), 5);
}

#[test]
fn mapping_is_top_left_aligned() {
    let src = PixelBuffer::filled(10, 10, 0).unwrap();
    let map = CoordMap::new(&src, 3, 3).unwrap();
    assert_eq!(map.src_x(0), 0.0);
    assert!((map.src_x(1) - 10.0 / 3.0).abs() < 1e-12);
    assert!(map.src_x(2) < 10.0);
}

#[test]
fn zero_source_dimension_is_rejected() {
    let src = PixelBuffer::from_pixels(0, 3, Vec::new()).unwrap();
    let err = CoordMap::new(&src, 1, 1).unwrap_err();
    assert!(matches!(err, BrickscaleError::InvalidDimension(_)));

    let src = PixelBuffer::from_pixels(3, 0, Vec::new()).unwrap();
    assert!(matches!(
        CoordMap::new(&src, 1, 1),
        Err(BrickscaleError::InvalidDimension(_))
    ));
}

#[test]
fn zero_target_dimension_is_rejected() {
    let src = PixelBuffer::filled(3, 3, 0).unwrap();
    assert!(matches!(
        validate_dimensions(&src, 0, 2),
        Err(BrickscaleError::InvalidDimension(_))
    ));
    assert!(matches!(
        validate_dimensions(&src, 2, 0),
        Err(BrickscaleError::InvalidDimension(_))
    ));
}
