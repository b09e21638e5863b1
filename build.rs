use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = match Command::new(&rustc).arg("--version").output() {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .split_whitespace()
            .nth(1)
            .unwrap_or("unknown")
            .to_string(),
        Ok(output) => {
            println!("cargo:warning={} --version exited with {}", rustc, output.status);
            "unknown".to_string()
        }
        Err(e) => {
            println!("cargo:warning=failed to run {} --version: {}", rustc, e);
            "unknown".to_string()
        }
    };

    println!("cargo:rustc-env=JSRELEASE_RUSTC_VERSION={}", version);
}
