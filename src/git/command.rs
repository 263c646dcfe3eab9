use crate::error::{Result, VersionManagerError};
use crate::git::GitCli;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Default bound on a single git invocation
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runs the `git` binary as a subprocess, with a bounded wait per call
///
/// An unresponsive or huge repository must not hang the whole tool, so every
/// invocation races against `timeout`; expiry surfaces as a
/// [VersionManagerError::Command] like any other failed invocation.
pub struct CommandGit {
    timeout: Duration,
}

impl CommandGit {
    pub fn new(timeout: Duration) -> Self {
        CommandGit { timeout }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let child = Command::new("git")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| VersionManagerError::command(format!("cannot invoke git: {}", e)))?;

        // Collect the output on a helper thread so the wait can be bounded.
        // On expiry the child is abandoned; it exits on its own once its
        // pipes close.
        let (tx, rx) = mpsc::channel();
        let description = format!("git {}", args.join(" "));
        thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        let output = match rx.recv_timeout(self.timeout) {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(VersionManagerError::command(format!(
                    "{}: {}",
                    description, e
                )))
            }
            Err(_) => {
                return Err(VersionManagerError::command(format!(
                    "{} timed out after {:?}",
                    description, self.timeout
                )))
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VersionManagerError::command(format!(
                "{} exited with {}: {}",
                description,
                output.status,
                stderr.trim_end()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| VersionManagerError::command(format!("{}: non-UTF-8 output: {}", description, e)))
    }
}

impl Default for CommandGit {
    fn default() -> Self {
        CommandGit::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl GitCli for CommandGit {
    fn describe(&self, refname: &str) -> Result<String> {
        self.run(&["describe", refname, "--abbrev=0", "--tags"])
    }

    fn rev_parse(&self, refname: &str) -> Result<String> {
        self.run(&["rev-parse", "--verify", refname])
    }

    fn log_range(&self, newer: &str, older: &str) -> Result<String> {
        let range = format!("{}...{}", newer, older);
        self.run(&["log", &range])
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.run(&["push", remote, "--tags"]).map(|_| ())
    }
}
