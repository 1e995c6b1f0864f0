use std::path::PathBuf;

use super::*;
use crate::foundation::{buffer::PixelBuffer, error::BrickscaleError};
use crate::hexmatrix::codec::{HexHeader, HexMatrixConfig};
use crate::pipeline::job::TilerJob;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_pipeline").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn job_for(dir: &std::path::Path) -> ResampleJob {
    ResampleJob {
        input: dir.join("in.png"),
        width: 2,
        height: 2,
        algorithm: Algorithm::Bilinear,
        hex: HexMatrixConfig::with_header(HexHeader::Dimensions),
        hex_out: dir.join("out").join("matrix.txt"),
        png_out: Some(dir.join("out").join("small.png")),
        threading: Default::default(),
        tiler: None,
    }
}

#[test]
fn run_job_writes_png_and_hex() {
    let dir = scratch("happy");
    let src = PixelBuffer::filled(4, 4, 0xFF11_2233).unwrap();
    save_png(&src, &dir.join("in.png")).unwrap();

    let job = job_for(&dir);
    let report = run_job(&job).unwrap();
    assert_eq!((report.source_width, report.source_height), (4, 4));
    assert_eq!((report.width, report.height), (2, 2));
    assert!(report.tiler.is_none());

    let hex = std::fs::read_to_string(&job.hex_out).unwrap();
    assert_eq!(hex, "2 2\n112233 112233\n112233 112233\n");
    assert_eq!(
        load_image(job.png_out.as_ref().unwrap()).unwrap(),
        PixelBuffer::filled(2, 2, 0xFF11_2233).unwrap()
    );
}

#[test]
fn missing_input_fails_before_writing_outputs() {
    let dir = scratch("missing");
    let job = job_for(&dir);
    assert!(run_job(&job).is_err());
    assert!(!job.hex_out.exists());
}

#[test]
fn tiler_failure_surfaces_after_hex_is_written() {
    let dir = scratch("tiler_fail");
    save_png(
        &PixelBuffer::filled(2, 2, 0xFF00_0000).unwrap(),
        &dir.join("in.png"),
    )
    .unwrap();
    std::fs::write(dir.join("catalog.txt"), "").unwrap();

    let mut job = job_for(&dir);
    job.tiler = Some(TilerJob {
        exe: dir.join("no-such-tiler"),
        catalog: dir.join("catalog.txt"),
        threshold: 5,
    });
    let err = run_job(&job).unwrap_err();
    assert!(matches!(err, BrickscaleError::Tiler(_)));
    assert!(job.hex_out.exists());
}

#[test]
fn tiler_with_headerless_matrix_is_rejected_up_front() {
    let dir = scratch("tiler_header");
    save_png(
        &PixelBuffer::filled(2, 2, 0xFF00_0000).unwrap(),
        &dir.join("in.png"),
    )
    .unwrap();
    std::fs::write(dir.join("catalog.txt"), "").unwrap();

    let mut job = job_for(&dir);
    job.hex = HexMatrixConfig::default();
    job.tiler = Some(TilerJob {
        exe: dir.join("no-such-tiler"),
        catalog: dir.join("catalog.txt"),
        threshold: 5,
    });
    let err = run_job(&job).unwrap_err();
    assert!(matches!(err, BrickscaleError::Validation(_)));
    assert!(!job.hex_out.exists());
    assert!(!job.png_out.as_ref().unwrap().exists());
}
