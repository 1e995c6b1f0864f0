use rayon::prelude::*;

use crate::foundation::{
    buffer::PixelBuffer,
    error::{BrickscaleError, BrickscaleResult},
};
use crate::resample::{kernels, mapping::CoordMap};

/// Resampling algorithm. Stateless; picked once per call.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Truncating nearest neighbor (biases toward the top-left neighbor).
    #[default]
    NearestNeighbor,
    /// Nearest neighbor with true rounding. Opt-in; never the default.
    NearestRounded,
    Bilinear,
    Bicubic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::NearestNeighbor,
        Algorithm::NearestRounded,
        Algorithm::Bilinear,
        Algorithm::Bicubic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest_neighbor",
            Algorithm::NearestRounded => "nearest_rounded",
            Algorithm::Bilinear => "bilinear",
            Algorithm::Bicubic => "bicubic",
        }
    }

    pub fn downscale(
        self,
        src: &PixelBuffer,
        dest_width: u32,
        dest_height: u32,
    ) -> BrickscaleResult<PixelBuffer> {
        downscale(src, dest_width, dest_height, self)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = BrickscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "nearest_neighbor" | "nearest" => Ok(Algorithm::NearestNeighbor),
            "nearest_rounded" => Ok(Algorithm::NearestRounded),
            "bilinear" => Ok(Algorithm::Bilinear),
            "bicubic" => Ok(Algorithm::Bicubic),
            other => Err(BrickscaleError::validation(format!(
                "unknown resampling algorithm '{other}'"
            ))),
        }
    }
}

/// Row-sharded parallelism for the destination loop.
///
/// Rows are disjoint output slices and the source is only read, so parallel output is
/// byte-identical to sequential output.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResampleThreading {
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// All inputs of one resample call.
#[derive(Clone, Copy, Debug)]
pub struct ResampleRequest<'a> {
    pub source: &'a PixelBuffer,
    pub dest_width: u32,
    pub dest_height: u32,
    pub algorithm: Algorithm,
}

impl<'a> ResampleRequest<'a> {
    pub fn new(
        source: &'a PixelBuffer,
        dest_width: u32,
        dest_height: u32,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            source,
            dest_width,
            dest_height,
            algorithm,
        }
    }
}

pub fn downscale(
    src: &PixelBuffer,
    dest_width: u32,
    dest_height: u32,
    algorithm: Algorithm,
) -> BrickscaleResult<PixelBuffer> {
    resample(
        &ResampleRequest::new(src, dest_width, dest_height, algorithm),
        &ResampleThreading::default(),
    )
}

#[tracing::instrument(
    skip(req, threading),
    fields(
        algorithm = %req.algorithm,
        src_w = req.source.width(),
        src_h = req.source.height(),
        dst_w = req.dest_width,
        dst_h = req.dest_height,
        parallel = threading.parallel,
    )
)]
pub fn resample(
    req: &ResampleRequest<'_>,
    threading: &ResampleThreading,
) -> BrickscaleResult<PixelBuffer> {
    let map = CoordMap::new(req.source, req.dest_width, req.dest_height)?;
    if req.dest_width > req.source.width() || req.dest_height > req.source.height() {
        tracing::debug!("target exceeds source; upscaling with the same kernel");
    }
    tracing::debug!(
        width_ratio = map.width_ratio(),
        height_ratio = map.height_ratio(),
        "coordinate mapping"
    );

    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let src = req.source;
    let mut out = PixelBuffer::filled(req.dest_width, req.dest_height, 0)?;
    let rows = out.pixels_mut();
    let pool = pool.as_ref();
    match req.algorithm {
        Algorithm::NearestNeighbor => fill_rows(rows, req.dest_width, pool, |x, y| {
            kernels::nearest(src, &map, x, y)
        }),
        Algorithm::NearestRounded => fill_rows(rows, req.dest_width, pool, |x, y| {
            kernels::nearest_rounded(src, &map, x, y)
        }),
        Algorithm::Bilinear => fill_rows(rows, req.dest_width, pool, |x, y| {
            kernels::bilinear(src, &map, x, y)
        }),
        Algorithm::Bicubic => fill_rows(rows, req.dest_width, pool, |x, y| {
            kernels::bicubic(src, &map, x, y)
        }),
    }
    Ok(out)
}

fn fill_rows<F>(pixels: &mut [u32], width: u32, pool: Option<&rayon::ThreadPool>, sample: F)
where
    F: Fn(u32, u32) -> u32 + Sync,
{
    let fill_row = |(y, row): (usize, &mut [u32])| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = sample(x as u32, y as u32);
        }
    };

    let w = width as usize;
    match pool {
        Some(pool) => pool.install(|| pixels.par_chunks_mut(w).enumerate().for_each(fill_row)),
        None => pixels.chunks_mut(w).enumerate().for_each(fill_row),
    }
}

fn build_thread_pool(threads: Option<usize>) -> BrickscaleResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BrickscaleError::validation(
            "resample threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BrickscaleError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/resample/resampler.rs"]
mod tests;
