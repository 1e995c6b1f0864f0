//! Packed ARGB helpers.
//!
//! A packed sample stores alpha in bits 31..24, red in 23..16, green in 15..8 and blue in
//! 7..0. Interpolation math runs on plain integers/floats and is clamped back into range
//! with [`clamp`] only when the caller decides the value is final, so [`pack`] never clamps.

/// Opaque alpha, already shifted into place.
pub const ALPHA_MASK: u32 = 0xFF00_0000;
/// Red, green and blue bits of a packed sample.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// One unpacked sample. Never stored; rebuilt from a packed value whenever needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Channels in `[a, r, g, b]` order, widened for arithmetic.
    pub fn channels(self) -> [i32; 4] {
        [
            i32::from(self.a),
            i32::from(self.r),
            i32::from(self.g),
            i32::from(self.b),
        ]
    }

    pub fn pack(self) -> u32 {
        pack(self.a, self.r, self.g, self.b)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        unpack(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.pack()
    }
}

pub fn unpack(value: u32) -> Argb {
    Argb {
        a: (value >> 24) as u8,
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    }
}

pub fn pack(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// `max(0, min(max, value))`.
///
/// Used both for channel values (`max = 255`) and for neighbor coordinates
/// (`max = dimension - 1`), which makes every border replicate its edge pixels.
pub fn clamp(value: i32, max: i32) -> i32 {
    value.min(max).max(0)
}

/// Clamps four already-computed channels to `[0, 255]` and packs them.
pub fn pack_clamped(channels: [i32; 4]) -> u32 {
    let [a, r, g, b] = channels.map(|c| clamp(c, 255) as u8);
    pack(a, r, g, b)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/pixel.rs"]
mod tests;
