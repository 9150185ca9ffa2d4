//! Generates `include/powsum.h` from the crate's `extern "C"` surface.

use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

const HEADER: &str = "powsum.h";

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let include_dir = crate_dir.join("include");
    std::fs::create_dir_all(&include_dir)?;

    let mut config = header_config(&crate_dir.join("cbindgen.toml"));
    config.header = Some(format!(
        "/* powsum {} - exact integer power sums */",
        env::var("CARGO_PKG_VERSION")?
    ));

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .with_language(cbindgen::Language::C)
        .generate()?;

    bindings.write_to_file(include_dir.join(HEADER));

    println!("cargo:rerun-if-changed=src/ffi/");
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
    Ok(())
}

fn header_config(path: &Path) -> cbindgen::Config {
    cbindgen::Config::from_file(path).unwrap_or_default()
}
