//! Embeds the git revision and cargo profile for the startup log line
//!
//! Rebuilds when HEAD moves, so the hash in a fresh binary is never stale.

use std::path::Path;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    let git_hash = git(&["rev-parse", "--short=8", "HEAD"]).unwrap_or_else(|| "unknown".to_string());

    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let git_dir = Path::new(&git_dir);
        println!("cargo:rerun-if-changed={}", git_dir.join("HEAD").display());

        // On a branch the hash lives in the ref file, or in packed-refs after gc
        if let Some(head_ref) = git(&["symbolic-ref", "-q", "HEAD"]) {
            let ref_file = git_dir.join(&head_ref);
            let watched = if ref_file.exists() {
                ref_file
            } else {
                git_dir.join("packed-refs")
            };
            println!("cargo:rerun-if-changed={}", watched.display());
        }
    }
    println!("cargo:rerun-if-changed=build.rs");

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=BUILD_PROFILE={}", profile);
}
