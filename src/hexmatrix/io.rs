use std::{io::Write, path::Path};

use anyhow::Context as _;

use crate::foundation::{buffer::PixelBuffer, error::BrickscaleResult, paths::ensure_parent_dir};
use crate::hexmatrix::codec::{HexMatrixConfig, decode, encode};

/// Streams the encoded matrix to `writer`. Same bytes as [`encode`].
pub fn write_hex_matrix<W: Write>(
    writer: &mut W,
    buffer: &PixelBuffer,
    config: &HexMatrixConfig,
) -> BrickscaleResult<()> {
    let text = encode(buffer, config)?;
    writer
        .write_all(text.as_bytes())
        .context("write hex matrix")?;
    writer.flush().context("flush hex matrix")?;
    Ok(())
}

pub fn save_hex_matrix(
    path: &Path,
    buffer: &PixelBuffer,
    config: &HexMatrixConfig,
) -> BrickscaleResult<()> {
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("create hex matrix '{}'", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write_hex_matrix(&mut writer, buffer, config)?;
    tracing::debug!(path = %path.display(), "hex matrix written");
    Ok(())
}

pub fn load_hex_matrix(path: &Path, config: &HexMatrixConfig) -> BrickscaleResult<PixelBuffer> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read hex matrix '{}'", path.display()))?;
    decode(&text, config)
}

#[cfg(test)]
#[path = "../../tests/unit/hexmatrix/io.rs"]
mod tests;
