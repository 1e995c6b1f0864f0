//! Brickscale shrinks raster images to a brick-mosaic resolution and exports them as the
//! hex-matrix text consumed by an external tiling optimizer.
//!
//! # Pipeline overview
//!
//! 1. **Load**: image file -> [`PixelBuffer`] of packed ARGB (the `image` crate decodes)
//! 2. **Resample**: [`downscale`] with one [`Algorithm`] to the target size
//! 3. **Export**: [`encode`] / [`save_hex_matrix`] and optionally [`save_png`]
//! 4. **Tile** (optional): hand the matrix to the optimizer executable with [`run_tiler`]
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce identical bytes, with or without threads.
//! - **No IO in the engine**: resampling and hex encoding never touch the filesystem.
//! - **Straight 8-bit ARGB** end-to-end: no premultiplication, no gamma.
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod hexmatrix;
mod mosaic;
mod pipeline;
mod resample;
mod tiler;

pub use assets::decode::{
    buffer_to_rgba, decode_image, encode_png, load_image, rgba_to_buffer, save_png,
};
pub use foundation::buffer::PixelBuffer;
pub use foundation::error::{BrickscaleError, BrickscaleResult};
pub use foundation::paths::ensure_parent_dir;
pub use foundation::pixel::{ALPHA_MASK, Argb, RGB_MASK, clamp, pack, pack_clamped, unpack};
pub use hexmatrix::codec::{HEX_MATRIX_FORMAT_VERSION, HexHeader, HexMatrixConfig, decode, encode};
pub use hexmatrix::io::{load_hex_matrix, save_hex_matrix, write_hex_matrix};
pub use mosaic::placement::{BrickPlacement, load_placements, parse_placements};
pub use mosaic::render::{DEFAULT_TARGET_WIDTH, render_placements, shade};
pub use pipeline::job::{ResampleJob, TilerJob};
pub use pipeline::runner::{JobReport, run_job};
pub use resample::kernels::{bilinear_interpolate, cubic_interpolate};
pub use resample::mapping::CoordMap;
pub use resample::resampler::{Algorithm, ResampleRequest, ResampleThreading, downscale, resample};
pub use tiler::runner::{TilerConfig, TilerOutput, run_tiler};
