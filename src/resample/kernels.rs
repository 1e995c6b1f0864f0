//! Per-pixel sampling kernels.
//!
//! Each kernel computes one destination sample from the immutable source and the shared
//! [`CoordMap`]. Neighbor coordinates are clamped into the source, so borders replicate their
//! edge pixels. Channel values are clamped exactly once, right before packing.

use crate::foundation::{
    buffer::PixelBuffer,
    pixel::{clamp, pack_clamped, unpack},
};
use crate::resample::mapping::CoordMap;

/// Truncating nearest neighbor: `(trunc(src_x), trunc(src_y))`.
///
/// Truncation (not rounding) is part of the output contract; downstream tooling was
/// calibrated against it. See [`nearest_rounded`] for the rounding variant.
#[inline]
pub fn nearest(src: &PixelBuffer, map: &CoordMap, x: u32, y: u32) -> u32 {
    let sx = clamp(map.src_x(x) as i32, map.max_x());
    let sy = clamp(map.src_y(y) as i32, map.max_y());
    src.at(sx, sy)
}

#[inline]
pub fn nearest_rounded(src: &PixelBuffer, map: &CoordMap, x: u32, y: u32) -> u32 {
    let sx = clamp(map.src_x(x).round() as i32, map.max_x());
    let sy = clamp(map.src_y(y).round() as i32, map.max_y());
    src.at(sx, sy)
}

#[inline]
pub fn bilinear(src: &PixelBuffer, map: &CoordMap, x: u32, y: u32) -> u32 {
    let sx = map.src_x(x);
    let sy = map.src_y(y);

    let x0 = clamp(sx.floor() as i32, map.max_x());
    let y0 = clamp(sy.floor() as i32, map.max_y());
    let x1 = clamp(x0 + 1, map.max_x());
    let y1 = clamp(y0 + 1, map.max_y());

    let dx = sx - f64::from(x0);
    let dy = sy - f64::from(y0);

    let c00 = unpack(src.at(x0, y0)).channels();
    let c10 = unpack(src.at(x1, y0)).channels();
    let c01 = unpack(src.at(x0, y1)).channels();
    let c11 = unpack(src.at(x1, y1)).channels();

    let channel = |c: usize| bilinear_interpolate(c00[c], c10[c], c01[c], c11[c], dx, dy);
    pack_clamped(std::array::from_fn(channel))
}

/// Weighted average of the four corners, truncated toward zero and clamped to `[0, 255]`.
pub fn bilinear_interpolate(c00: i32, c10: i32, c01: i32, c11: i32, dx: f64, dy: f64) -> i32 {
    let v = (1.0 - dx) * (1.0 - dy) * f64::from(c00)
        + dx * (1.0 - dy) * f64::from(c10)
        + (1.0 - dx) * dy * f64::from(c01)
        + dx * dy * f64::from(c11);
    clamp(v as i32, 255)
}

/// Separable 4x4 cubic convolution.
///
/// The X pass yields four unclamped intermediates per channel (overshoot is expected); the
/// Y pass combines them and only that result is clamped.
#[inline]
pub fn bicubic(src: &PixelBuffer, map: &CoordMap, x: u32, y: u32) -> u32 {
    let sx = map.src_x(x);
    let sy = map.src_y(y);

    let xs = taps(sx, map.max_x());
    let ys = taps(sy, map.max_y());

    let dx = sx - f64::from(xs[1]);
    let dy = sy - f64::from(ys[1]);

    let sample = |tx: i32, ty: i32| unpack(src.at(tx, ty)).channels();
    // rows[j][i] = channels of (xs[i], ys[j])
    let rows: [[[i32; 4]; 4]; 4] = ys.map(|ty| xs.map(|tx| sample(tx, ty)));

    pack_clamped(std::array::from_fn(|c| {
        let pass_x: [i32; 4] = std::array::from_fn(|j| {
            let r = &rows[j];
            cubic_interpolate(r[0][c], r[1][c], r[2][c], r[3][c], dx) as i32
        });
        cubic_interpolate(pass_x[0], pass_x[1], pass_x[2], pass_x[3], dy) as i32
    }))
}

/// Hermite basis with central-difference tangents, evaluated at offset `d` past `c1`.
///
/// Tangents use integer halving (truncating toward zero). The powers go through `powf`;
/// `powi` rounds `d³` differently and shifts some truncated samples by one.
pub fn cubic_interpolate(c0: i32, c1: i32, c2: i32, c3: i32, d: f64) -> f64 {
    let slope1 = f64::from((c2 - c0) / 2);
    let slope2 = f64::from((c3 - c1) / 2);
    let d2 = d.powf(2.0);
    let d3 = d.powf(3.0);
    (2.0 * d3 - 3.0 * d2 + 1.0) * f64::from(c1)
        + (d3 - 2.0 * d2 + d) * slope1
        + (-2.0 * d3 + 3.0 * d2) * f64::from(c2)
        + (d3 - d2) * slope2
}

/// `floor(s) - 1 ..= floor(s) + 2`, each clamped to `[0, max]` independently.
fn taps(s: f64, max: i32) -> [i32; 4] {
    let base = s.floor() as i32;
    [
        clamp(base.saturating_sub(1), max),
        clamp(base, max),
        clamp(base.saturating_add(1), max),
        clamp(base.saturating_add(2), max),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/resample/kernels.rs"]
mod tests;
