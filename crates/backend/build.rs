use std::env;
use std::fs;
use std::path::PathBuf;

// The runtime loader reads config.toml next to the binary, so copy the
// workspace copy into target/<profile> on every build.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR sits under target/<profile>/build/...; walk back up.
    let Some(target_dir) = out_dir.ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=could not locate target/{profile}, skipping config.toml copy");
        return;
    };

    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!(
            "cargo:warning=config.toml not found at {}, the embedded defaults will apply",
            source.display()
        );
        return;
    }

    if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {e}");
    }
}
