//! Hex-matrix text format.
//!
//! One line per row, one uppercase `RRGGBB` token per pixel, tokens separated by a single
//! space, every line terminated by `\n`. Alpha is not serialized; decoding restores it as
//! opaque.
//!
//! The integrations that consume this file disagree on the first line: the tiler reads a
//! `"<width> <height>"` header, other readers expect a bare row count, others nothing at all.
//! The header is therefore an explicit [`HexHeader`] choice carried in [`HexMatrixConfig`]
//! and never inferred from the text.

use crate::foundation::{
    buffer::PixelBuffer,
    error::{BrickscaleError, BrickscaleResult},
    pixel::{ALPHA_MASK, RGB_MASK},
};

/// Revision of the layout described above. Bumped whenever the bytes written for an existing
/// [`HexHeader`] change.
pub const HEX_MATRIX_FORMAT_VERSION: u32 = 1;

/// First-line convention of a hex matrix.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexHeader {
    /// Matrix rows only.
    #[default]
    None,
    /// `"<width> <height>"` (what the tiler executable reads).
    Dimensions,
    /// `"<height>"`.
    RowCount,
}

impl HexHeader {
    pub fn name(self) -> &'static str {
        match self {
            HexHeader::None => "none",
            HexHeader::Dimensions => "dimensions",
            HexHeader::RowCount => "row_count",
        }
    }
}

impl std::str::FromStr for HexHeader {
    type Err = BrickscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "none" => Ok(HexHeader::None),
            "dimensions" => Ok(HexHeader::Dimensions),
            "row_count" => Ok(HexHeader::RowCount),
            other => Err(BrickscaleError::validation(format!(
                "unknown hex matrix header '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HexMatrixConfig {
    pub version: u32,
    pub header: HexHeader,
}

impl Default for HexMatrixConfig {
    fn default() -> Self {
        Self {
            version: HEX_MATRIX_FORMAT_VERSION,
            header: HexHeader::None,
        }
    }
}

impl HexMatrixConfig {
    pub fn with_header(header: HexHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> BrickscaleResult<()> {
        if self.version != HEX_MATRIX_FORMAT_VERSION {
            return Err(BrickscaleError::validation(format!(
                "unsupported hex matrix format version {} (expected {HEX_MATRIX_FORMAT_VERSION})",
                self.version
            )));
        }
        Ok(())
    }
}

pub fn encode(buffer: &PixelBuffer, config: &HexMatrixConfig) -> BrickscaleResult<String> {
    config.validate()?;
    // 7 bytes per token (6 digits + separator/newline).
    let mut out = String::with_capacity(buffer.pixels().len() * 7 + 24);

    match config.header {
        HexHeader::None => {}
        HexHeader::Dimensions => {
            out.push_str(&format!("{} {}\n", buffer.width(), buffer.height()));
        }
        HexHeader::RowCount => {
            out.push_str(&format!("{}\n", buffer.height()));
        }
    }

    for row in buffer.rows() {
        for (i, px) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:06X}", px & RGB_MASK));
        }
        out.push('\n');
    }
    Ok(out)
}

pub fn decode(text: &str, config: &HexMatrixConfig) -> BrickscaleResult<PixelBuffer> {
    config.validate()?;

    let mut lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .collect();
    while lines.last().is_some_and(|(_, l)| l.trim().is_empty()) {
        lines.pop();
    }

    let mut lines = lines.into_iter();
    let (declared_width, declared_height) = match config.header {
        HexHeader::None => (None, None),
        HexHeader::Dimensions => {
            let (line_no, line) = lines
                .next()
                .ok_or_else(|| BrickscaleError::incomplete_sample("missing dimensions header"))?;
            let fields = line.split_whitespace().collect::<Vec<_>>();
            let [w, h] = fields.as_slice() else {
                return Err(BrickscaleError::incomplete_sample(format!(
                    "line {line_no}: expected '<width> <height>' header, got '{line}'"
                )));
            };
            (
                Some(parse_header_dim(w, line_no)?),
                Some(parse_header_dim(h, line_no)?),
            )
        }
        HexHeader::RowCount => {
            let (line_no, line) = lines
                .next()
                .ok_or_else(|| BrickscaleError::incomplete_sample("missing row-count header"))?;
            (None, Some(parse_header_dim(line.trim(), line_no)?))
        }
    };

    let mut width = declared_width;
    let mut height = 0u32;
    let mut pixels = Vec::new();
    for (line_no, line) in lines {
        let before = pixels.len();
        for token in line.split(' ') {
            pixels.push(parse_token(token, line_no)? | ALPHA_MASK);
        }
        let count = (pixels.len() - before) as u32;
        match width {
            Some(w) if w != count => {
                return Err(BrickscaleError::incomplete_sample(format!(
                    "line {line_no}: expected {w} tokens, found {count}"
                )));
            }
            Some(_) => {}
            None => width = Some(count),
        }
        height += 1;
    }

    if let Some(h) = declared_height
        && h != height
    {
        return Err(BrickscaleError::incomplete_sample(format!(
            "header declares {h} rows, found {height}"
        )));
    }
    let Some(width) = width.filter(|_| height > 0) else {
        return Err(BrickscaleError::incomplete_sample("hex matrix has no rows"));
    };

    PixelBuffer::from_pixels(width, height, pixels)
}

fn parse_token(token: &str, line_no: usize) -> BrickscaleResult<u32> {
    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BrickscaleError::incomplete_sample(format!(
            "line {line_no}: malformed hex token '{token}'"
        )));
    }
    u32::from_str_radix(token, 16).map_err(|e| {
        BrickscaleError::incomplete_sample(format!("line {line_no}: token '{token}': {e}"))
    })
}

fn parse_header_dim(field: &str, line_no: usize) -> BrickscaleResult<u32> {
    let v: u32 = field.parse().map_err(|_| {
        BrickscaleError::incomplete_sample(format!("line {line_no}: bad header value '{field}'"))
    })?;
    if v == 0 {
        return Err(BrickscaleError::invalid_dimension(format!(
            "line {line_no}: header declares a zero dimension"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/hexmatrix/codec.rs"]
mod tests;
