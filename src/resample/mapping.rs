use crate::foundation::{
    buffer::PixelBuffer,
    error::{BrickscaleError, BrickscaleResult},
};

/// Inverse mapping from destination pixels back into source space.
///
/// Top-left aligned: destination `(0, 0)` lands exactly on source `(0, 0)` and there is no
/// half-pixel center offset. Every algorithm goes through this mapping so their outputs stay
/// comparable pixel for pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordMap {
    width_ratio: f64,
    height_ratio: f64,
    src_width: u32,
    src_height: u32,
}

impl CoordMap {
    pub fn new(src: &PixelBuffer, dest_width: u32, dest_height: u32) -> BrickscaleResult<Self> {
        validate_dimensions(src, dest_width, dest_height)?;
        Ok(Self {
            width_ratio: f64::from(dest_width) / f64::from(src.width()),
            height_ratio: f64::from(dest_height) / f64::from(src.height()),
            src_width: src.width(),
            src_height: src.height(),
        })
    }

    pub fn src_x(&self, x: u32) -> f64 {
        f64::from(x) / self.width_ratio
    }

    pub fn src_y(&self, y: u32) -> f64 {
        f64::from(y) / self.height_ratio
    }

    pub fn max_x(&self) -> i32 {
        self.src_width as i32 - 1
    }

    pub fn max_y(&self) -> i32 {
        self.src_height as i32 - 1
    }

    pub fn width_ratio(&self) -> f64 {
        self.width_ratio
    }

    pub fn height_ratio(&self) -> f64 {
        self.height_ratio
    }
}

/// Rejects any zero dimension before a single output pixel is allocated.
pub fn validate_dimensions(
    src: &PixelBuffer,
    dest_width: u32,
    dest_height: u32,
) -> BrickscaleResult<()> {
    if src.width() == 0 || src.height() == 0 {
        return Err(BrickscaleError::invalid_dimension(format!(
            "source must be at least 1x1, got {}x{}",
            src.width(),
            src.height()
        )));
    }
    if dest_width == 0 || dest_height == 0 {
        return Err(BrickscaleError::invalid_dimension(format!(
            "target must be at least 1x1, got {dest_width}x{dest_height}"
        )));
    }
    // Neighbor coordinates are clamped as i32.
    if src.width() > i32::MAX as u32 || src.height() > i32::MAX as u32 {
        return Err(BrickscaleError::invalid_dimension(
            "source dimensions exceed the addressable range",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/resample/mapping.rs"]
mod tests;
