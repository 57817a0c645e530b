//! Generates `build_info.rs` in OUT_DIR for `flappy --version`.
//!
//! `FLAPPY_BUILD_COMMIT` / `FLAPPY_BUILD_DATE` override the detected values so
//! packaged builds stay reproducible.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

const COMMIT_VAR: &str = "FLAPPY_BUILD_COMMIT";
const DATE_VAR: &str = "FLAPPY_BUILD_DATE";

/// Short hash of HEAD, or "unknown" outside a git checkout.
fn detect_commit() -> String {
    let output = match Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return "unknown".to_string(),
    };
    match String::from_utf8(output.stdout) {
        Ok(hash) if !hash.trim().is_empty() => hash.trim().to_string(),
        _ => "unknown".to_string(),
    }
}

fn today() -> String {
    chrono::Utc::now().date_naive().to_string()
}

fn main() {
    let commit = env::var(COMMIT_VAR).unwrap_or_else(|_| detect_commit());
    let date = env::var(DATE_VAR).unwrap_or_else(|_| today());

    let dest = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR")).join("build_info.rs");
    let mut out = File::create(&dest).expect("create build_info.rs");
    writeln!(out, "pub const BUILD_COMMIT: &str = {:?};", commit).expect("write BUILD_COMMIT");
    writeln!(out, "pub const BUILD_DATE: &str = {:?};", date).expect("write BUILD_DATE");

    for var in [COMMIT_VAR, DATE_VAR] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
}
