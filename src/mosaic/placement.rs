//! Brick placements emitted by the tiling optimizer.
//!
//! One placement per line: `<w>-<h>/<RRGGBB>,<x>,<y>`, in brick-grid units. Blank lines are
//! skipped.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    error::{BrickscaleError, BrickscaleResult},
    pixel::ALPHA_MASK,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BrickPlacement {
    pub width: u32,
    pub height: u32,
    /// Opaque packed ARGB.
    pub color: u32,
    pub x: u32,
    pub y: u32,
}

impl BrickPlacement {
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

pub fn parse_placements(text: &str) -> BrickscaleResult<Vec<BrickPlacement>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line.trim(), i + 1))
        .collect()
}

pub fn load_placements(path: &Path) -> BrickscaleResult<Vec<BrickPlacement>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read placements '{}'", path.display()))?;
    parse_placements(&text)
}

fn parse_line(line: &str, line_no: usize) -> BrickscaleResult<BrickPlacement> {
    let bad = |what: &str| {
        BrickscaleError::parse(format!("line {line_no}: {what} in placement '{line}'"))
    };

    let mut fields = line.split(',');
    let (Some(brick), Some(x), Some(y), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(bad("expected '<w>-<h>/<RRGGBB>,<x>,<y>'"));
    };

    let (size, color) = brick.split_once('/').ok_or_else(|| bad("missing '/'"))?;
    let (w, h) = size.split_once('-').ok_or_else(|| bad("missing '-'"))?;

    let width = parse_dim(w).ok_or_else(|| bad("bad brick width"))?;
    let height = parse_dim(h).ok_or_else(|| bad("bad brick height"))?;
    let color = color.trim();
    if color.len() != 6 || !color.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad("bad color"));
    }
    let color = u32::from_str_radix(color, 16).map_err(|_| bad("bad color"))? | ALPHA_MASK;
    let x = x.trim().parse().map_err(|_| bad("bad x"))?;
    let y = y.trim().parse().map_err(|_| bad("bad y"))?;

    Ok(BrickPlacement {
        width,
        height,
        color,
        x,
        y,
    })
}

fn parse_dim(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
#[path = "../../tests/unit/mosaic/placement.rs"]
mod tests;
