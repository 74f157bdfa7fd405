//! Interpreter process launch and timeout supervision.
//!
//! One execution is one child process raced against one deadline. The child
//! is spawned with `kill_on_drop`, so whichever way the race ends (natural
//! exit or deadline expiry) dropping the handle guarantees the OS process
//! is gone and no orphan survives the call.

use std::collections::HashMap;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};

#[cfg(windows)]
use std::os::windows::process::CommandExt;

use crate::sandbox::config::Language;
use crate::sandbox::error::{Result, SandboxError};
use crate::sandbox::source::SourceFile;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Handle to one spawned interpreter, owning its pipes for the duration of
/// the execution.
#[derive(Debug)]
pub struct RunningProcess {
    child: Child,
    language: Language,
}

/// How one supervised execution ended.
#[derive(Debug)]
pub enum Supervised {
    /// The child exited before the deadline.
    Completed(std::process::Output),
    /// The deadline fired first; the child has been killed.
    TimedOut,
}

/// Spawn the interpreter on the materialized source file.
///
/// stdout/stderr are captured as pipes. stdin is piped and then dropped
/// immediately, so a child that reads from it sees EOF instead of blocking.
pub fn launch(
    source: &SourceFile,
    language: Language,
    env: HashMap<String, String>,
) -> Result<RunningProcess> {
    let profile = language.profile();

    let mut command = Command::new(profile.command[0]);
    command
        .args(&profile.command[1..])
        .arg(source.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::piped())
        .env_clear()
        .envs(env)
        .kill_on_drop(true);

    #[cfg(windows)]
    command.creation_flags(CREATE_NO_WINDOW);

    let mut child = command.spawn().map_err(|e| SandboxError::Spawn {
        interpreter: profile.command[0].to_string(),
        reason: e.to_string(),
    })?;

    // Close stdin right away; nothing is ever written to the child.
    drop(child.stdin.take());

    tracing::debug!(
        language = %language,
        pid = child.id(),
        path = %source.path().display(),
        "spawned interpreter"
    );

    Ok(RunningProcess { child, language })
}

impl RunningProcess {
    /// Race the child to completion against the deadline.
    ///
    /// On natural exit both streams are read to EOF and returned. On expiry
    /// the wait future is dropped, which drops the child handle and
    /// SIGKILLs the process; a child that already exited in the meantime is
    /// not an error; the kill is best-effort and idempotent.
    pub async fn supervise(self, timeout: Duration) -> Result<Supervised> {
        let language = self.language;
        let pid = self.child.id();

        match tokio::time::timeout(timeout, self.child.wait_with_output()).await {
            Ok(output) => Ok(Supervised::Completed(output?)),
            Err(_elapsed) => {
                tracing::warn!(
                    language = %language,
                    pid,
                    timeout_ms = timeout.as_millis() as u64,
                    "execution deadline expired, child killed"
                );
                Ok(Supervised::TimedOut)
            }
        }
    }
}
