use super::*;

const RED: u32 = 0xFFFF_0000;

fn brick(width: u32, height: u32, x: u32, y: u32) -> BrickPlacement {
    BrickPlacement {
        width,
        height,
        color: RED,
        x,
        y,
    }
}

#[test]
fn shade_darkens_opaque_pixels() {
    assert_eq!(shade(0xFFFF_FFFF, 127), 0xFF80_8080);
    assert_eq!(shade(0xFF00_0000, 50), 0xFF00_0000);
    assert_eq!(shade(RED, 0), RED);
}

#[test]
fn canvas_scales_to_target_width() {
    let out = render_placements(&[brick(2, 1, 0, 0)], 10).unwrap();
    assert_eq!((out.width(), out.height()), (10, 5));

    // Tiny targets never shrink below one pixel per cell.
    let out = render_placements(&[brick(2, 1, 0, 0), brick(1, 3, 2, 0)], 1).unwrap();
    assert_eq!((out.width(), out.height()), (3, 3));
}

#[test]
fn brick_has_outline_studs_and_flat_fill() {
    let out = render_placements(&[brick(2, 1, 0, 0)], 10).unwrap();
    // scale 5, padding 1, stud diameter 3 centered at (2.5, 2.5) for the first cell.
    assert_eq!(out.pixel(0, 0), shade(RED, EDGE_ALPHA));
    assert_eq!(out.pixel(9, 0), shade(RED, EDGE_ALPHA));
    assert_eq!(out.pixel(0, 4), shade(RED, EDGE_ALPHA));
    let stud = shade(shade(RED, STUD_ALPHA), STUD_ALPHA);
    assert_eq!(out.pixel(2, 2), stud);
    assert_eq!(out.pixel(1, 1), shade(stud, STUD_EDGE_ALPHA));
    assert_eq!(out.pixel(4, 2), RED);
    // Right and bottom outline sides fall outside the brick, here past the canvas edge.
    assert_eq!(out.pixel(9, 4), RED);
}

#[test]
fn outline_spills_one_pixel_past_right_and_bottom() {
    // scale 10 on a 3x3 grid.
    let out = render_placements(&[brick(1, 1, 0, 0), brick(1, 1, 2, 2)], 30).unwrap();
    let spill = shade(0, EDGE_ALPHA);
    assert_eq!(spill, 0x7F00_0000);
    assert_eq!(out.pixel(10, 5), spill);
    assert_eq!(out.pixel(5, 10), spill);
    assert_eq!(out.pixel(10, 10), spill);
    assert_eq!(out.pixel(9, 5), RED);
    // Uncovered and untouched by any outline.
    assert_eq!(out.pixel(25, 5), 0);
    assert_eq!(out.pixel(5, 25), 0);
}

#[test]
fn later_neighbor_covers_the_spilled_outline() {
    const BLUE: u32 = 0xFF00_00FF;
    let left = brick(1, 1, 0, 0);
    let right = BrickPlacement {
        color: BLUE,
        ..brick(1, 1, 1, 0)
    };

    // Left first: the right brick's fill replaces the spill, then its own outline shades it.
    let out = render_placements(&[left, right], 20).unwrap();
    assert_eq!(out.pixel(10, 5), shade(BLUE, EDGE_ALPHA));

    // Right first: the left brick's spill lands on the right brick's outline.
    let out = render_placements(&[right, left], 20).unwrap();
    assert_eq!(out.pixel(10, 5), shade(shade(BLUE, EDGE_ALPHA), EDGE_ALPHA));
}

#[test]
fn empty_or_oversized_grids_are_rejected() {
    assert!(matches!(
        render_placements(&[], 100),
        Err(BrickscaleError::InvalidDimension(_))
    ));
    assert!(matches!(
        render_placements(&[brick(1, 1, 100_000, 100_000)], 1),
        Err(BrickscaleError::InvalidDimension(_))
    ));
}
