//! Bakes the admin API settings into the wasm bundle.
//!
//! Values come from the build environment, or from a `.env` file in this
//! directory or any parent.

const FORWARDED_KEYS: [&str; 2] = ["STUDIO_ADMIN_API_BASE", "STUDIO_ADMIN_KEY"];

fn main() {
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
