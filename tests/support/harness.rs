use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness runs the sample-checks binary in an isolated directory.
/// HOME points inside the temp dir so no real global config leaks in.
pub struct TestHarness {
    pub dir: TempDir,
    pub home: PathBuf,
    pub binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        TestHarness {
            dir: temp_dir,
            home,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_sample-checks")),
        }
    }

    /// Creates a harness with a project config file.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        harness.write_project_config(config_content);
        harness
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_project_config(&self, content: &str) {
        fs::write(self.path().join(".sample-checks.md"), content)
            .expect("Failed to write project config");
    }

    #[allow(dead_code)]
    pub fn write_global_config(&self, content: &str) {
        let dir = self.home.join(".config/sample-checks");
        fs::create_dir_all(&dir).expect("Failed to create global config dir");
        fs::write(dir.join("config.md"), content).expect("Failed to write global config");
    }

    /// Executes the binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", &self.home)
            .env("NO_COLOR", "1")
            .env_remove("SAMPLE_CHECKS_QUIET")
            .output()
            .expect("Failed to run sample-checks")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
