use std::path::{Path, PathBuf};

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_tiler").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn touch(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
}

#[test]
fn validate_requires_existing_inputs() {
    let dir = scratch_dir("validate");
    let hex = dir.join("m.txt");
    let cat = dir.join("catalog.txt");

    let cfg = TilerConfig {
        exe: PathBuf::from("tiler"),
        hex_matrix: hex.clone(),
        catalog: cat.clone(),
        threshold: 10,
    };
    assert!(matches!(
        cfg.validate(),
        Err(BrickscaleError::Validation(_))
    ));

    touch(&hex, "FF0000\n");
    touch(&cat, "1-1/FF0000\n");
    cfg.validate().unwrap();

    let no_exe = TilerConfig {
        exe: PathBuf::new(),
        ..cfg
    };
    assert!(matches!(
        no_exe.validate(),
        Err(BrickscaleError::Validation(_))
    ));
}

#[test]
fn missing_executable_is_a_tiler_error() {
    let dir = scratch_dir("missing_exe");
    let hex = dir.join("m.txt");
    let cat = dir.join("catalog.txt");
    touch(&hex, "FF0000\n");
    touch(&cat, "");

    let err = run_tiler(&TilerConfig {
        exe: dir.join("no-such-tiler"),
        hex_matrix: hex,
        catalog: cat,
        threshold: 3,
    })
    .unwrap_err();
    assert!(matches!(err, BrickscaleError::Tiler(_)));
    assert!(err.to_string().contains("failed to spawn"));
}

// Both scripts are written before either is executed so no file is still open for writing
// while a child process is being spawned.
#[cfg(unix)]
#[test]
fn runs_tiler_with_positional_args_and_checks_exit_status() {
    use std::os::unix::fs::PermissionsExt as _;

    let dir = scratch_dir("scripts");
    let hex = dir.join("m.txt");
    let cat = dir.join("catalog.txt");
    touch(&hex, "FF0000\n");
    touch(&cat, "");

    let ok = dir.join("ok.sh");
    touch(
        &ok,
        "#!/bin/sh\necho \"matrix=$1\"\necho \"catalog=$2\"\necho \"threshold=$3\"\n",
    );
    let bad = dir.join("bad.sh");
    touch(&bad, "#!/bin/sh\necho 'out of bricks' >&2\nexit 3\n");
    for script in [&ok, &bad] {
        std::fs::set_permissions(script, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    let cfg = TilerConfig {
        exe: ok,
        hex_matrix: hex.clone(),
        catalog: cat.clone(),
        threshold: 42,
    };
    let out = run_tiler(&cfg).unwrap();
    assert_eq!(
        out.stdout,
        vec![
            format!("matrix={}", hex.display()),
            format!("catalog={}", cat.display()),
            "threshold=42".to_string(),
        ]
    );
    assert!(out.stderr.is_empty());

    let err = run_tiler(&TilerConfig { exe: bad, ..cfg }).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, BrickscaleError::Tiler(_)));
    assert!(msg.contains("out of bricks"), "{msg}");
}
