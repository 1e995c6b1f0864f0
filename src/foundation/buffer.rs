use crate::foundation::error::{BrickscaleError, BrickscaleResult};

/// Row-major grid of packed ARGB samples, origin top-left.
///
/// `pixels.len() == width * height` holds for every value of this type. Dimensions are fixed
/// at construction; there is no in-place resize. A zero dimension is representable (the
/// buffer then holds no pixels) but the resampler refuses to read from such a buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> BrickscaleResult<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(BrickscaleError::invalid_dimension(format!(
                "{width}x{height} buffer needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn filled(width: u32, height: u32, value: u32) -> BrickscaleResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![value; len],
        })
    }

    /// Builds a buffer by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> u32,
    ) -> BrickscaleResult<Self> {
        let len = pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Panics when `(x, y)` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        self.pixels[self.index(x, y)]
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[self.index(x, y)])
    }

    pub fn row(&self, y: u32) -> &[u32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact(0) panics; an empty-width buffer has no rows worth yielding.
        let w = (self.width as usize).max(1);
        self.pixels.chunks_exact(w)
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Same pixel as `pixel(x, y)` but addressed with already-clamped signed coordinates.
    #[inline]
    pub(crate) fn at(&self, x: i32, y: i32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn pixel_count(width: u32, height: u32) -> BrickscaleResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| BrickscaleError::invalid_dimension("pixel buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/buffer.rs"]
mod tests;
