//! Container-format boundary. The `image` crate does the PNG/JPEG work; this module only
//! converts between its RGBA8 rasters and packed ARGB [`PixelBuffer`]s.

use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::foundation::{
    buffer::PixelBuffer,
    error::{BrickscaleError, BrickscaleResult},
    paths::ensure_parent_dir,
    pixel::{pack, unpack},
};

pub fn decode_image(bytes: &[u8]) -> BrickscaleResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    rgba_to_buffer(&dyn_img.to_rgba8())
}

pub fn load_image(path: &Path) -> BrickscaleResult<PixelBuffer> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let dyn_img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode image '{}'", path.display()))?;
    let buffer = rgba_to_buffer(&dyn_img.to_rgba8())?;
    tracing::debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        "image loaded"
    );
    Ok(buffer)
}

pub fn rgba_to_buffer(rgba: &image::RgbaImage) -> BrickscaleResult<PixelBuffer> {
    let (width, height) = rgba.dimensions();
    let pixels = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            pack(a, r, g, b)
        })
        .collect();
    PixelBuffer::from_pixels(width, height, pixels)
}

pub fn buffer_to_rgba(buffer: &PixelBuffer) -> BrickscaleResult<image::RgbaImage> {
    let mut raw = Vec::with_capacity(buffer.pixels().len() * 4);
    for &px in buffer.pixels() {
        let c = unpack(px);
        raw.extend_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    image::RgbaImage::from_raw(buffer.width(), buffer.height(), raw).ok_or_else(|| {
        BrickscaleError::invalid_dimension("rgba raster does not match buffer dimensions")
    })
}

pub fn encode_png(buffer: &PixelBuffer) -> BrickscaleResult<Vec<u8>> {
    if buffer.is_empty() {
        return Err(BrickscaleError::invalid_dimension(
            "cannot encode an empty buffer as png",
        ));
    }
    let rgba = buffer_to_rgba(buffer)?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

pub fn save_png(buffer: &PixelBuffer, path: &Path) -> BrickscaleResult<()> {
    ensure_parent_dir(path)?;
    let bytes = encode_png(buffer)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "png written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
