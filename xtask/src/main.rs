//! Custom cargo commands for blogsift.
//!
//! Usage:
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - check (both feature sets) + test + clippy
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [s]  - Run every fuzz target for s seconds (default 30)
//!   cargo xtask wasm      - Build the browser module

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["search_queries", "key_events", "levenshtein_matching"];
const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("wasm") => wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test            Run all Rust tests
  check           cargo check (default and slim features) + test + clippy
  bench           Run benchmarks
  fuzz [SECONDS]  Run each fuzz target (needs cargo-fuzz and nightly)
  wasm            Build the wasm module (release, --features wasm)
"#
    );
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo check --no-default-features...");
    run_cargo(&["check", "--lib", "--no-default-features"])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds: u64 = seconds
        .unwrap_or("30")
        .parse()
        .context("fuzz duration must be a number of seconds")?;
    let max_time = format!("-max_total_time={}", seconds);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }

    println!("\n✓ No crashes");
    Ok(())
}

fn wasm() -> Result<()> {
    run_cargo(&[
        "build",
        "--lib",
        "--release",
        "--target",
        WASM_TARGET,
        "--features",
        "wasm",
    ])?;
    let artifact = project_root()?
        .join("target")
        .join(WASM_TARGET)
        .join("release")
        .join("blogsift.wasm");
    println!("✓ Built {}", artifact.display());
    println!("  Next: wasm-bindgen --target web --out-dir pkg {}", artifact.display());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
