use std::env;

fn main() {
    // The vendor SDK ships no pkg-config metadata; the import library location
    // comes from the environment instead.
    println!("cargo:rerun-if-env-changed=DPFPDD_LIB_DIR");

    if env::var("CARGO_CFG_WINDOWS").is_ok() {
        if let Ok(dir) = env::var("DPFPDD_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", dir);
        }
    }
}
