use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    // Read and increment build number
    let build_file = Path::new("BUILD_NUMBER");
    let build_number: u64 = if build_file.exists() {
        fs::read_to_string(build_file)
            .unwrap_or_else(|_| "0".to_string())
            .trim()
            .parse()
            .unwrap_or(0)
    } else {
        0
    };

    let new_build = build_number + 1;
    fs::write(build_file, new_build.to_string()).expect("Failed to write build number");

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let is_release = profile == "release";

    // VERSION file wins over the manifest version
    let version_file = Path::new("VERSION");
    let manifest_version = env!("CARGO_PKG_VERSION").to_string();
    let version = if version_file.exists() {
        fs::read_to_string(version_file)
            .map(|v| v.trim().to_string())
            .unwrap_or(manifest_version)
    } else {
        manifest_version
    };

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BABEL_VERSION={}", version);
    println!("cargo:rustc-env=BABEL_BUILD={}", new_build);
    println!("cargo:rustc-env=BABEL_PROFILE={}", if is_release { "release" } else { "development" });
    println!("cargo:rustc-env=BABEL_GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
