use std::process::Command;

/// Read `key` from the environment, falling back to the trimmed stdout of `program args`.
fn env_or_command(key: &str, program: &str, args: &[&str]) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        Command::new(program)
            .args(args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn main() {
    let git_sha = env_or_command("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    let build_date = env_or_command("BUILD_DATE", "date", &["+%Y-%m-%d"]);

    println!("cargo:rustc-env=SAMPLE_CHECKS_GIT_SHA={}", git_sha);
    println!("cargo:rustc-env=SAMPLE_CHECKS_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
