//! Invocation of the external tiling optimizer.
//!
//! The optimizer is a separate executable called as
//! `<exe> <hex_matrix> <catalog> <threshold>`; it must exit with status 0.

use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use crate::foundation::error::{BrickscaleError, BrickscaleResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TilerConfig {
    pub exe: PathBuf,
    pub hex_matrix: PathBuf,
    pub catalog: PathBuf,
    pub threshold: i64,
}

impl TilerConfig {
    pub fn validate(&self) -> BrickscaleResult<()> {
        if self.exe.as_os_str().is_empty() {
            return Err(BrickscaleError::validation(
                "tiler executable path is empty",
            ));
        }
        for (what, path) in [("hex matrix", &self.hex_matrix), ("catalog", &self.catalog)] {
            if path.as_os_str().is_empty() {
                return Err(BrickscaleError::validation(format!(
                    "tiler {what} path is empty"
                )));
            }
            if !path.is_file() {
                return Err(BrickscaleError::validation(format!(
                    "tiler {what} '{}' does not exist",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TilerOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[tracing::instrument(skip(cfg), fields(exe = %cfg.exe.display(), threshold = cfg.threshold))]
pub fn run_tiler(cfg: &TilerConfig) -> BrickscaleResult<TilerOutput> {
    cfg.validate()?;

    let output = Command::new(&cfg.exe)
        .arg(&cfg.hex_matrix)
        .arg(&cfg.catalog)
        .arg(cfg.threshold.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            BrickscaleError::tiler(format!("failed to spawn '{}': {e}", cfg.exe.display()))
        })?;

    let stdout = collect_lines(&output.stdout);
    let stderr = collect_lines(&output.stderr);
    for line in &stdout {
        tracing::info!(target: "brickscale::tiler", "{line}");
    }
    for line in &stderr {
        tracing::warn!(target: "brickscale::tiler", "{line}");
    }

    if !output.status.success() {
        return Err(BrickscaleError::tiler(format!(
            "'{}' exited with status {}: {}",
            cfg.exe.display(),
            output.status,
            stderr.join("\n").trim()
        )));
    }

    Ok(TilerOutput { stdout, stderr })
}

fn collect_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/tiler/runner.rs"]
mod tests;
