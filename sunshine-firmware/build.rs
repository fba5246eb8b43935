//! Build script for sunshine-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates face.toml and embeds it as postcard bytes
//! - Records the build time as the clock's starting point

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sunshine_core::config::FaceConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    setup_linker(&out_dir);
    embed_config(&out_dir);
    embed_build_time(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    File::create(out_dir.join("memory.x"))
        .and_then(|mut f| f.write_all(include_bytes!("memory.x")))
        .expect("failed to write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate face.toml and write it to OUT_DIR as postcard
fn embed_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=face.toml");

    let config_path = Path::new("face.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read face.toml", &[e.to_string()]),
    };

    // Syntax first so the message points at the TOML, not the schema
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        fail(
            "Invalid TOML syntax in face.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        );
    }

    let config: FaceConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "face.toml does not match the face configuration",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    if config.interval_ms == 0 {
        errors.push("interval_ms must be greater than 0".to_string());
    }
    let style = &config.style;
    for (name, size) in [
        ("time_size", style.time_size),
        ("date_size", style.date_size),
        ("high_size", style.high_size),
        ("low_size", style.low_size),
    ] {
        if size == 0 {
            errors.push(format!("[style] {} must be greater than 0", name));
        }
    }
    if style.divider_half_width < 0 {
        errors.push("[style] divider_half_width cannot be negative".to_string());
    }
    if style.time_sample.is_empty() || style.time_sample_short.is_empty() {
        errors.push("[style] time samples cannot be empty".to_string());
    }
    if !errors.is_empty() {
        fail("Invalid face configuration", &errors);
    }

    // Anything left is caught by the same check the firmware runs
    if config.validate().is_err() {
        fail("Invalid face configuration", &["rejected by FaceConfig::validate".to_string()]);
    }

    let bytes = match postcard::to_allocvec(&config) {
        Ok(bytes) => bytes,
        Err(e) => fail("Failed to encode face.toml", &[e.to_string()]),
    };
    fs::write(out_dir.join("face.bin"), &bytes).expect("failed to write face.bin");

    println!(
        "cargo:warning=face.toml validated successfully ({} bytes)",
        bytes.len()
    );
}

/// The board has no RTC battery; time starts from when it was built until
/// the phone sends its clock
fn embed_build_time(out_dir: &Path) {
    let now_ms = chrono::Utc::now().timestamp_millis();
    fs::write(
        out_dir.join("build_time.rs"),
        format!("pub const BUILD_EPOCH_MS: i64 = {};\n", now_ms),
    )
    .expect("failed to write build_time.rs");
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
