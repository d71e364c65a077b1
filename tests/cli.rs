use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.json", name))
}

/// Copy a fixture into `dir` so outputs land in the temp directory.
fn stage(dir: &Path, name: &str) -> PathBuf {
    let dest = dir.join(format!("{}.json", name));
    std::fs::copy(fixture_path(name), &dest).expect("copy fixture");
    dest
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_julia-wasm"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run julia-wasm")
}

#[test]
fn test_build_writes_wat_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = stage(dir.path(), "add_one");
    let out = run(dir.path(), &["build", input.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let wat = std::fs::read_to_string(dir.path().join("add_one.wat")).unwrap();
    assert!(wat.starts_with("(module\n  (func $f\n"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Compiled -> "));
}

#[test]
fn test_build_multiple_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let a = stage(dir.path(), "add_one");
    let b = stage(dir.path(), "max");
    let out = run(
        dir.path(),
        &["build", a.to_str().unwrap(), b.to_str().unwrap()],
    );
    assert!(out.status.success());
    assert!(dir.path().join("add_one.wat").is_file());
    assert!(dir.path().join("max.wat").is_file());
}

#[test]
fn test_build_explicit_output_and_indent() {
    let dir = tempfile::tempdir().unwrap();
    let input = stage(dir.path(), "add_one");
    let output = dir.path().join("out.wat");
    let out = run(
        dir.path(),
        &[
            "build",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--indent",
            "4",
        ],
    );
    assert!(out.status.success());
    let wat = std::fs::read_to_string(&output).unwrap();
    assert!(wat.starts_with("(module\n    (func $f\n"));
}

#[test]
fn test_build_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("julia-wasm.toml"),
        "[emit]\nindent_width = 1\n",
    )
    .unwrap();
    let input = stage(dir.path(), "add_one");
    let out = run(dir.path(), &["build", input.to_str().unwrap()]);
    assert!(out.status.success());
    let wat = std::fs::read_to_string(dir.path().join("add_one.wat")).unwrap();
    assert!(wat.starts_with("(module\n (func $f\n"));
}

#[test]
fn test_build_violation_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = stage(dir.path(), "label");
    let out = run(dir.path(), &["build", input.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(!dir.path().join("label.wat").exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Labels are not supported"));
}

#[test]
fn test_build_source_labels_violation() {
    let dir = tempfile::tempdir().unwrap();
    let input = stage(dir.path(), "label");
    let source = dir.path().join("label.julia");
    std::fs::write(&source, "{ let x:u64 := 1:u64 loop: }\n").unwrap();
    let out = run(
        dir.path(),
        &[
            "build",
            input.to_str().unwrap(),
            "--source",
            source.to_str().unwrap(),
        ],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("label.wat").exists());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Labels are not supported"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_build_source_with_inverted_span() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inverted.json");
    std::fs::write(
        &input,
        r#"{"statements":[{"nodeType":"Label","name":"l","span":{"start":8,"end":2}}]}"#,
    )
    .unwrap();
    let source = dir.path().join("inverted.julia");
    std::fs::write(&source, "{ label: }").unwrap();
    let out = run(
        dir.path(),
        &[
            "build",
            input.to_str().unwrap(),
            "--source",
            source.to_str().unwrap(),
        ],
    );
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Labels are not supported"));
    assert!(stderr.contains("at bytes 8..2"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_unknown_target() {
    let dir = tempfile::tempdir().unwrap();
    let input = stage(dir.path(), "add_one");
    let out = run(
        dir.path(),
        &["check", input.to_str().unwrap(), "--target", "evm"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown target 'evm'"));
}

#[test]
fn test_check_reports_each_input() {
    let dir = tempfile::tempdir().unwrap();
    let good = stage(dir.path(), "max");
    let bad = stage(dir.path(), "label");
    let out = run(
        dir.path(),
        &["check", good.to_str().unwrap(), bad.to_str().unwrap()],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("OK: "));
    assert!(stderr.contains("1 of 2 inputs failed"));
    assert!(!dir.path().join("max.wat").exists());
}

#[test]
fn test_targets_lists_backends() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["targets"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "wasm\nwast\n");
}
