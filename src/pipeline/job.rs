use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{BrickscaleError, BrickscaleResult};
use crate::hexmatrix::codec::{HexHeader, HexMatrixConfig};
use crate::resample::resampler::{Algorithm, ResampleThreading};

/// One end-to-end run, usually read from a JSON job file.
///
/// Relative paths in a job file are resolved against the directory containing that file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResampleJob {
    pub input: PathBuf,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub hex: HexMatrixConfig,
    pub hex_out: PathBuf,
    #[serde(default)]
    pub png_out: Option<PathBuf>,
    #[serde(default)]
    pub threading: ResampleThreading,
    #[serde(default)]
    pub tiler: Option<TilerJob>,
}

/// Tiler section of a job; the hex matrix argument is always the job's `hex_out`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TilerJob {
    pub exe: PathBuf,
    pub catalog: PathBuf,
    pub threshold: i64,
}

impl ResampleJob {
    pub fn from_json(text: &str) -> BrickscaleResult<Self> {
        serde_json::from_str(text).map_err(|e| BrickscaleError::parse(format!("job json: {e}")))
    }

    pub fn from_path(path: &Path) -> BrickscaleResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read job '{}'", path.display()))?;
        let job = Self::from_json(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(job.resolve_relative_to(base))
    }

    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.input);
        resolve(&mut self.hex_out);
        if let Some(png) = self.png_out.as_mut() {
            resolve(png);
        }
        if let Some(tiler) = self.tiler.as_mut() {
            // Bare executable names are looked up on PATH, not next to the job file.
            if tiler.exe.components().count() > 1 {
                resolve(&mut tiler.exe);
            }
            resolve(&mut tiler.catalog);
        }
        self
    }

    pub fn validate(&self) -> BrickscaleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BrickscaleError::invalid_dimension(format!(
                "job target must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.input.as_os_str().is_empty() {
            return Err(BrickscaleError::validation("job input path is empty"));
        }
        if self.hex_out.as_os_str().is_empty() {
            return Err(BrickscaleError::validation("job hex_out path is empty"));
        }
        if self.threading.threads == Some(0) {
            return Err(BrickscaleError::validation(
                "job threading 'threads' must be >= 1 when set",
            ));
        }
        if self.tiler.is_some() && self.hex.header != HexHeader::Dimensions {
            return Err(BrickscaleError::validation(format!(
                "tiler needs hex.header \"dimensions\", job has \"{}\"",
                self.hex.header.name()
            )));
        }
        self.hex.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/job.rs"]
mod tests;
