//! Vercel CLI Store
//!
//! Drives `vercel env rm` / `vercel env add` as child processes.
//! Both commands run from the env file's directory so the CLI picks up
//! the linked project in `.vercel/`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{RemoteVariableStore, RemoveOutcome, StoreError};
use crate::domain::value_objects::TargetEnvironment;

/// Variable store backed by the provider's CLI
pub struct VercelCli {
    /// Executable name or path (e.g. "vercel")
    bin: PathBuf,
    /// Working directory for every invocation
    working_dir: PathBuf,
}

impl VercelCli {
    pub fn new(bin: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(&self.working_dir);
        cmd
    }

    fn remove_args(key: &str, target: TargetEnvironment) -> [String; 5] {
        [
            "env".to_string(),
            "rm".to_string(),
            key.to_string(),
            target.as_str().to_string(),
            "--yes".to_string(),
        ]
    }

    fn add_args(key: &str, target: TargetEnvironment) -> [String; 4] {
        [
            "env".to_string(),
            "add".to_string(),
            key.to_string(),
            target.as_str().to_string(),
        ]
    }
}

/// Best diagnostic text from a finished command: stderr, then stdout, then the status
fn diagnostic(output: &Output) -> String {
    let stderr = single_line(&String::from_utf8_lossy(&output.stderr));
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = single_line(&String::from_utf8_lossy(&output.stdout));
    if !stdout.is_empty() {
        return stdout;
    }
    match output.status.code() {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Collapse CLI output into one line, dropping blanks and the version banner
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Vercel CLI "))
        .collect::<Vec<_>>()
        .join("; ")
}

impl RemoteVariableStore for VercelCli {
    fn display_name(&self) -> String {
        format!("{} ({})", self.bin.display(), self.working_dir.display())
    }

    fn remove(&mut self, key: &str, target: TargetEnvironment) -> RemoveOutcome {
        let output = self
            .command()
            .args(Self::remove_args(key, target))
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) if output.status.success() => RemoveOutcome::Removed,
            Ok(output) => RemoveOutcome::Failed(StoreError::Rejected(diagnostic(&output))),
            Err(e) => RemoveOutcome::Failed(StoreError::Spawn(e.to_string())),
        }
    }

    fn add(
        &mut self,
        key: &str,
        target: TargetEnvironment,
        value: &str,
    ) -> Result<(), StoreError> {
        let mut child = self
            .command()
            .args(Self::add_args(key, target))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| StoreError::Spawn(e.to_string()))?;

        let stdin = child.stdin.take();
        let payload = format!("{}\n", value);

        // stdin is fed from its own thread so a chatty CLI can't fill the
        // output pipes while we block on the write.
        let output = std::thread::scope(|scope| {
            if let Some(mut stdin) = stdin {
                scope.spawn(move || {
                    // A CLI that exits before reading stdin closes the pipe;
                    // the exit status is what decides success.
                    let _ = stdin.write_all(payload.as_bytes());
                });
            }
            child.wait_with_output()
        })
        .map_err(|e| StoreError::Spawn(e.to_string()))?;

        if !output.status.success() {
            return Err(StoreError::Rejected(diagnostic(&output)));
        }

        Ok(())
    }
}
