//! Shared helpers for baseimage-defs integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Definitions document used by all integration tests
pub const TEST_DEFS: &str = r#"
architectures:
  amd64: {}
  arm:
    baseimage_arch:
      alpine: armhf
      debian: arm32v7
    glibc_arch: armhf
    qemu_arch: arm32v7
  arm64:
    glibc_arch: aarch64
    qemu_arch: aarch64

flavors:
  alpine:
    dockerfile: Dockerfile.alpine
    variants:
      - glibc
    releases:
      "3.17":
        baseimage: alpine:3.17
      "3.18":
        baseimage: alpine:3.18
  debian:
    dockerfile: Dockerfile.debian
    variants: []
    releases:
      stretch:
        baseimage: stretch-slim
      bullseye:
        baseimage: bullseye-slim
"#;

/// Location the binary looks the document up at: next to the executable
fn defs_path() -> PathBuf {
    let exe = PathBuf::from(env!("CARGO_BIN_EXE_baseimage-defs"));
    exe.parent()
        .expect("binary has no parent directory")
        .join("baseimage_defs.yaml")
}

/// Install the test definitions document next to the binary
pub fn install_defs() {
    std::fs::write(defs_path(), TEST_DEFS).expect("Failed to write definitions file");
}

/// Run the baseimage-defs binary with the given arguments
pub fn run(args: &[&str]) -> Output {
    install_defs();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_baseimage-defs"));
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute baseimage-defs")
}

/// Stdout of a run that must succeed
pub fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}
