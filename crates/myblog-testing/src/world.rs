//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated data directories
//! - Seeding a stored token or config file
//! - Executing the `myblog` binary with proper context

use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use myblog_testing::TestWorld;
///
/// let world = TestWorld::new().with_token("tok-1");
/// let result = world.run(&["whoami"]).unwrap();
/// assert!(result.success);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    api_url: Option<String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".myblog");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            api_url: None,
        }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Seed the single-slot token store.
    pub fn with_token(self, token: &str) -> Self {
        std::fs::write(self.data_dir.join("token"), token).expect("Failed to write token");
        self
    }

    /// Point every command run in this world at the given API host.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Seed a config file in the data directory.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), content)
            .expect("Failed to write config");
        self
    }

    /// The stored token, if any (for post-run assertions).
    pub fn stored_token(&self) -> Option<String> {
        std::fs::read_to_string(self.data_dir.join("token"))
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Run the `myblog` binary with this world's context.
    pub fn run(&self, args: &[&str]) -> Result<RunResult> {
        let mut command = Command::cargo_bin("myblog")?;
        command
            .current_dir(self.temp_dir.path())
            .env("MYBLOG_PATH", &self.data_dir)
            .env("NO_COLOR", "1");

        if let Some(url) = &self.api_url {
            command.arg("--api-url").arg(url);
        }
        command.args(args);

        let output = command.output()?;
        Ok(RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}

/// Captured outcome of one CLI invocation.
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl RunResult {
    pub fn stdout_contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    pub fn stderr_contains(&self, needle: &str) -> bool {
        self.stderr.contains(needle)
    }
}
