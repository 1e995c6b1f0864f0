//! Rasterizes tiler placements into a preview image: flat brick colors, a dark outline per
//! brick and one shaded stud per grid cell.
//!
//! Bricks are drawn in placement order and the output follows the AWT preview the tiler
//! ships with. The outline is the closed rectangle `x0..=x1`, `y0..=y1`, so its right and
//! bottom sides land on the first column and row past the brick, where a later neighbor's
//! fill covers them. Each stud disc is shaded twice, then its rim once more.

use crate::foundation::{
    buffer::PixelBuffer,
    error::{BrickscaleError, BrickscaleResult},
    pixel::{pack, unpack},
};
use crate::mosaic::placement::BrickPlacement;

pub const DEFAULT_TARGET_WIDTH: u32 = 5000;

const EDGE_ALPHA: u8 = 127;
const STUD_ALPHA: u8 = 25;
const STUD_EDGE_ALPHA: u8 = 50;
const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Renders `placements` at an integer scale of `max(1, target_width / grid_width)` pixels per
/// grid cell. Uncovered canvas stays fully transparent.
#[tracing::instrument(skip(placements), fields(bricks = placements.len()))]
pub fn render_placements(
    placements: &[BrickPlacement],
    target_width: u32,
) -> BrickscaleResult<PixelBuffer> {
    let grid_w = placements
        .iter()
        .map(BrickPlacement::right)
        .max()
        .unwrap_or(0);
    let grid_h = placements
        .iter()
        .map(BrickPlacement::bottom)
        .max()
        .unwrap_or(0);
    if grid_w == 0 || grid_h == 0 {
        return Err(BrickscaleError::invalid_dimension(
            "placements cover an empty grid",
        ));
    }

    let scale = (target_width / grid_w).max(1);
    let (Some(width), Some(height)) = (grid_w.checked_mul(scale), grid_h.checked_mul(scale))
    else {
        return Err(BrickscaleError::invalid_dimension(
            "mosaic canvas size overflow",
        ));
    };
    if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
        return Err(BrickscaleError::invalid_dimension(format!(
            "mosaic canvas {width}x{height} is too large"
        )));
    }
    tracing::debug!(grid_w, grid_h, scale, width, height, "mosaic canvas");

    let mut canvas = Canvas(PixelBuffer::filled(width, height, 0)?);
    for brick in placements {
        draw_brick(&mut canvas, brick, scale);
    }
    Ok(canvas.0)
}

struct Canvas(PixelBuffer);

impl Canvas {
    fn apply(&mut self, x: u32, y: u32, f: impl FnOnce(u32) -> u32) {
        let (w, h) = (self.0.width(), self.0.height());
        if x < w && y < h {
            let px = &mut self.0.pixels_mut()[y as usize * w as usize + x as usize];
            *px = f(*px);
        }
    }
}

fn draw_brick(canvas: &mut Canvas, brick: &BrickPlacement, scale: u32) {
    let x0 = brick.x * scale;
    let y0 = brick.y * scale;
    let x1 = brick.right() * scale;
    let y1 = brick.bottom() * scale;

    for y in y0..y1 {
        for x in x0..x1 {
            canvas.apply(x, y, |_| brick.color);
        }
    }
    for y in y0..=y1 {
        for x in x0..=x1 {
            if x == x0 || y == y0 || x == x1 || y == y1 {
                canvas.apply(x, y, |px| shade(px, EDGE_ALPHA));
            }
        }
    }

    let padding = scale / 5;
    let diameter = scale.saturating_sub(padding * 2);
    if diameter == 0 {
        return;
    }
    for j in 0..brick.height {
        for i in 0..brick.width {
            let cell_x = (brick.x + i) * scale;
            let cell_y = (brick.y + j) * scale;
            draw_stud(canvas, cell_x + padding, cell_y + padding, diameter);
        }
    }
}

/// Disc inscribed in the `diameter`-sized square at `(left, top)`, shaded twice, with a
/// darker rim on top.
fn draw_stud(canvas: &mut Canvas, left: u32, top: u32, diameter: u32) {
    let r = f64::from(diameter) / 2.0;
    let cx = f64::from(left) + r;
    let cy = f64::from(top) + r;
    for y in top..top + diameter {
        for x in left..left + diameter {
            let dx = f64::from(x) + 0.5 - cx;
            let dy = f64::from(y) + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > r {
                continue;
            }
            let rim = dist > r - 1.0;
            canvas.apply(x, y, |px| {
                let px = shade(shade(px, STUD_ALPHA), STUD_ALPHA);
                if rim { shade(px, STUD_EDGE_ALPHA) } else { px }
            });
        }
    }
}

/// Black composited over `dst` at `alpha` (straight alpha, source-over).
pub fn shade(dst: u32, alpha: u8) -> u32 {
    let d = unpack(dst);
    let inv = 255 - u16::from(alpha);
    let a = u16::from(alpha) + u16::from(mul_div255(u16::from(d.a), inv));
    pack(
        a.min(255) as u8,
        mul_div255(u16::from(d.r), inv),
        mul_div255(u16::from(d.g), inv),
        mul_div255(u16::from(d.b), inv),
    )
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/mosaic/render.rs"]
mod tests;
