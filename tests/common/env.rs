//! Test environment for running the envpush binary against a fake provider.
//!
//! The fake provider is a shell script that appends one line per call to a
//! log file: `rm <key> <target> <flag>` or `add <key> <target> <stdin>`.
//! The raw stdin of each add is kept next to the log as `.stdin.<key>.<target>`.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const FAKE_PROVIDER: &str = r#"#!/bin/sh
log="$FAKE_VERCEL_LOG"
pwd -P > "$log.cwd"
if [ "$2" = "add" ]; then
  cat > "$log.stdin.$3.$4"
  value=$(cat "$log.stdin.$3.$4")
  echo "add $3 $4 $value" >> "$log"
  if [ "$3" = "$FAKE_VERCEL_FAIL_ADD" ]; then
    echo "Vercel CLI 0.0.0" >&2
    echo "" >&2
    echo "Error: cannot add $3" >&2
    exit 1
  fi
else
  echo "rm $3 $4 $5" >> "$log"
  if [ -n "$FAKE_VERCEL_FAIL_RM" ]; then
    echo "Error: Environment Variable not found" >&2
    exit 1
  fi
fi
exit 0
"#;

/// Result of running an envpush command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project directory plus a fake provider executable
pub struct TestEnv {
    pub project_root: TempDir,
    tools_dir: TempDir,
    envpush_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let tools_dir = tempfile::tempdir().expect("Failed to create tools dir");

        let provider = tools_dir.path().join("vercel");
        std::fs::write(&provider, FAKE_PROVIDER).expect("Failed to write fake provider");
        let mut perms = std::fs::metadata(&provider).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&provider, perms).unwrap();

        Self {
            project_root,
            tools_dir,
            envpush_bin: PathBuf::from(env!("CARGO_BIN_EXE_envpush")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn provider_bin(&self) -> PathBuf {
        self.tools_dir.path().join("vercel")
    }

    fn log_path(&self) -> PathBuf {
        self.tools_dir.path().join("calls.log")
    }

    /// Write a file into the project directory
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Provider calls recorded so far, one per line
    pub fn provider_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Exact bytes the provider read on stdin for `env add <key> <target>`
    pub fn provider_stdin(&self, key: &str, target: &str) -> Option<Vec<u8>> {
        let mut path = self.log_path().into_os_string();
        path.push(format!(".stdin.{}.{}", key, target));
        std::fs::read(PathBuf::from(path)).ok()
    }

    /// Directory the provider was last invoked from
    pub fn provider_cwd(&self) -> Option<PathBuf> {
        let mut path = self.log_path().into_os_string();
        path.push(".cwd");
        std::fs::read_to_string(PathBuf::from(path))
            .ok()
            .map(|s| PathBuf::from(s.trim()))
    }

    /// Run envpush from the project root, pointing it at the fake provider
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.envpush_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_remove("ENVPUSH_TARGETS")
            .env_remove("ENVPUSH_SKIP")
            .env("ENVPUSH_BIN", self.provider_bin())
            .env("FAKE_VERCEL_LOG", self.log_path())
            .env_remove("FAKE_VERCEL_FAIL_ADD")
            .env_remove("FAKE_VERCEL_FAIL_RM");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute envpush");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
