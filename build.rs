use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=FEATURE_COMPAT_ROOT_HINT");

    if let Ok(raw_hint) = env::var("FEATURE_COMPAT_ROOT_HINT") {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=FEATURE_COMPAT_ROOT_HINT={}",
            canonical.display()
        );
    }
}
