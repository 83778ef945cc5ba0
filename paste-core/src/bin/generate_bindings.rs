//! Generate UniFFI Swift bindings for Paste
//!
//! Run: cargo run --bin generate-bindings
//!
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │ DEPENDENCY MAP - Output paths must match Project.swift expectations         │
//! │                                                                             │
//! │ Inputs:                                                                     │
//! │   target/release/libpaste_core.dylib  ← Host build, only read by bindgen    │
//! │                                                                             │
//! │ Outputs (paths match Project.swift):                                        │
//! │   Sources/PasteCore/PasteCore.xcframework ← device + simulator static libs  │
//! │   Sources/PasteCoreWrapper/paste_core.swift ← Swift bindings                │
//! └─────────────────────────────────────────────────────────────────────────────┘

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEVICE_TARGET: &str = "aarch64-apple-ios";
const SIMULATOR_TARGETS: [&str; 2] = ["aarch64-apple-ios-sim", "x86_64-apple-ios"];

fn main() {
    let rust_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let project_root = rust_dir.parent().expect("No parent directory");

    // Ensure Rust is built with the same deployment target as the Swift app
    env::set_var("IPHONEOS_DEPLOYMENT_TARGET", "15.0");

    println!("Building host library for bindgen...");
    run_cmd("cargo", &["build", "--release", "--lib"], &rust_dir);

    println!("Generating Swift bindings...");
    run_cmd(
        "cargo",
        &[
            "run",
            "--bin",
            "uniffi-bindgen",
            "generate",
            "--library",
            "target/release/libpaste_core.dylib",
            "--language",
            "swift",
            "--out-dir",
            "generated",
        ],
        &rust_dir,
    );

    let framework_dest = project_root.join("Sources/PasteCore");
    let wrapper_dest = project_root.join("Sources/PasteCoreWrapper");
    let generated = rust_dir.join("generated");
    fs::create_dir_all(&framework_dest).expect("Create framework dir");
    fs::create_dir_all(&wrapper_dest).expect("Create wrapper dir");

    // Swift 6 strict concurrency rejects the generated global
    println!("Copying generated Swift file...");
    let mut swift_content =
        fs::read_to_string(generated.join("paste_core.swift")).expect("Read swift file");
    swift_content = swift_content.replace(
        "private var initializationResult",
        "nonisolated(unsafe) private var initializationResult",
    );
    fs::write(wrapper_dest.join("paste_core.swift"), swift_content).expect("Write swift");

    // Headers + modulemap shared by every slice of the xcframework
    let headers = generated.join("headers");
    fs::create_dir_all(&headers).expect("Create headers dir");
    fs::copy(generated.join("paste_coreFFI.h"), headers.join("paste_coreFFI.h"))
        .expect("Copy header");
    fs::write(
        headers.join("module.modulemap"),
        "module paste_coreFFI {\n    header \"paste_coreFFI.h\"\n    export *\n}\n",
    )
    .expect("Write modulemap");

    println!("Building iOS static libraries...");
    for target in std::iter::once(DEVICE_TARGET).chain(SIMULATOR_TARGETS) {
        run_cmd("cargo", &["build", "--release", "--lib", "--target", target], &rust_dir);
    }

    // Simulator slices for both architectures go into one fat library
    let sim_dir = rust_dir.join("target/ios-sim-universal/release");
    fs::create_dir_all(&sim_dir).expect("Create simulator dir");
    let sim_lib = sim_dir.join("libpaste_core.a");
    let mut lipo_args = vec!["-create".to_string()];
    for target in SIMULATOR_TARGETS {
        lipo_args.push(format!("target/{}/release/libpaste_core.a", target));
    }
    lipo_args.push("-output".to_string());
    lipo_args.push(sim_lib.to_string_lossy().to_string());
    let lipo_args: Vec<&str> = lipo_args.iter().map(String::as_str).collect();
    run_cmd("lipo", &lipo_args, &rust_dir);

    let xcframework = framework_dest.join("PasteCore.xcframework");
    if xcframework.exists() {
        fs::remove_dir_all(&xcframework).expect("Remove old xcframework");
    }

    println!("Creating xcframework...");
    let device_lib = format!("target/{}/release/libpaste_core.a", DEVICE_TARGET);
    let headers_str = headers.to_string_lossy().to_string();
    run_cmd(
        "xcodebuild",
        &[
            "-create-xcframework",
            "-library",
            &device_lib,
            "-headers",
            &headers_str,
            "-library",
            &sim_lib.to_string_lossy(),
            "-headers",
            &headers_str,
            "-output",
            &xcframework.to_string_lossy(),
        ],
        &rust_dir,
    );

    println!("Done! Bindings regenerated successfully.");
    println!("Generated files:");
    println!("  - {}/paste_core.swift (UniFFI generated)", wrapper_dest.display());
    println!("  - {}", xcframework.display());
}

fn run_cmd(program: &str, args: &[&str], dir: &Path) {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap_or_else(|e| panic!("Failed to run {}: {}", program, e));

    if !status.success() {
        panic!("{} failed with status: {}", program, status);
    }
}
