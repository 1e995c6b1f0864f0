use std::path::PathBuf;

use crate::assets::decode::{load_image, save_png};
use crate::foundation::error::BrickscaleResult;
use crate::hexmatrix::io::save_hex_matrix;
use crate::pipeline::job::ResampleJob;
use crate::resample::resampler::{Algorithm, ResampleRequest, resample};
use crate::tiler::runner::{TilerConfig, TilerOutput, run_tiler};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobReport {
    pub algorithm: Algorithm,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub hex_out: PathBuf,
    pub png_out: Option<PathBuf>,
    pub tiler: Option<TilerOutput>,
}

/// load -> resample -> png (optional) -> hex matrix -> tiler (optional).
///
/// Fails fast: the first failing step aborts the run and nothing after it is attempted.
#[tracing::instrument(skip(job), fields(input = %job.input.display(), algorithm = %job.algorithm))]
pub fn run_job(job: &ResampleJob) -> BrickscaleResult<JobReport> {
    job.validate()?;

    let source = load_image(&job.input)?;
    let out = resample(
        &ResampleRequest::new(&source, job.width, job.height, job.algorithm),
        &job.threading,
    )?;

    if let Some(png) = &job.png_out {
        save_png(&out, png)?;
    }
    save_hex_matrix(&job.hex_out, &out, &job.hex)?;
    tracing::info!(
        hex_out = %job.hex_out.display(),
        width = out.width(),
        height = out.height(),
        "hex matrix created"
    );

    let tiler = match &job.tiler {
        Some(t) => Some(run_tiler(&TilerConfig {
            exe: t.exe.clone(),
            hex_matrix: job.hex_out.clone(),
            catalog: t.catalog.clone(),
            threshold: t.threshold,
        })?),
        None => None,
    };

    Ok(JobReport {
        algorithm: job.algorithm,
        source_width: source.width(),
        source_height: source.height(),
        width: out.width(),
        height: out.height(),
        hex_out: job.hex_out.clone(),
        png_out: job.png_out.clone(),
        tiler,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/runner.rs"]
mod tests;
