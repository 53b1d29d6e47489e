use std::{env, process::Command};

fn main() {
    // Values injected by the packaging pipeline.
    println!("cargo:rerun-if-env-changed=HELLO_GOPHER_VERSION");
    println!("cargo:rerun-if-env-changed=HELLO_GOPHER_BUILD_DATE");
    println!("cargo:rerun-if-env-changed=HELLO_GOPHER_GIT_COMMIT");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=HELLO_GOPHER_RUSTC_VERSION={rustc_version}");
}
