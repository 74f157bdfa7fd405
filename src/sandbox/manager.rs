//! Execution orchestration and result reporting.
//!
//! [`SandboxManager`] wires the pipeline together: validate, build the
//! restricted environment, materialize the source, launch, supervise, and
//! map whatever happened into one uniform [`ExecutionOutcome`]. The
//! `execute` boundary is infallible by contract: every failure mode becomes
//! `status=error` with a message, and the service stays available for the
//! next request.

use crate::sandbox::config::{Language, SandboxConfig};
use crate::sandbox::environment::build_environment;
use crate::sandbox::error::{Result, SandboxError};
use crate::sandbox::runner::{launch, Supervised};
use crate::sandbox::source::materialize;
use crate::sandbox::validate::validate;

use std::time::Duration;

use serde::Serialize;

/// Terminal status of one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Error,
}

/// The uniform result returned for every submission.
///
/// Constructed once per execution and handed to the caller; the sandbox
/// keeps no history.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionOutcome {
    pub status: ExecutionStatus,
    pub output: String,
    /// The language as resolved, or the raw submitted string when the
    /// language itself failed validation.
    pub language: String,
}

impl ExecutionOutcome {
    fn success(output: String, language: String) -> Self {
        Self {
            status: ExecutionStatus::Success,
            output,
            language,
        }
    }

    fn error(output: String, language: String) -> Self {
        Self {
            status: ExecutionStatus::Error,
            output,
            language,
        }
    }
}

/// Sandboxed executor for untrusted code snippets.
///
/// Cheap to clone conceptually but plain to share: it holds only immutable
/// limits, so one instance serves any number of concurrent executions
/// without locks.
#[derive(Debug, Clone, Default)]
pub struct SandboxManager {
    config: SandboxConfig,
}

/// Builder for [`SandboxManager`].
#[derive(Debug, Default)]
pub struct SandboxManagerBuilder {
    config: SandboxConfig,
}

impl SandboxManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the wall-clock budget (default 10 s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override the maximum code length (default 4000 code points).
    pub fn max_code_len(mut self, max: usize) -> Self {
        self.config.max_code_len = max;
        self
    }

    pub fn build(self) -> SandboxManager {
        SandboxManager {
            config: self.config,
        }
    }
}

impl SandboxManager {
    /// Create a manager with the service's fixed default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SandboxManagerBuilder {
        SandboxManagerBuilder::new()
    }

    /// The limits this manager enforces.
    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Run a snippet to completion or abort it, returning a uniform outcome.
    ///
    /// Never returns an error: validation failures, spawn failures,
    /// timeouts, and nonzero exits all surface as `status=error` outcomes.
    pub async fn execute(&self, code: &str, language: &str) -> ExecutionOutcome {
        let resolved = match validate(code, language, self.config.max_code_len) {
            Ok(lang) => lang,
            Err(err) => {
                tracing::info!(language, error = %err, "submission rejected");
                return ExecutionOutcome::error(err.to_string(), language.to_lowercase());
            }
        };

        tracing::info!(language = %resolved, bytes = code.len(), "executing snippet");

        match self.try_execute(code, resolved).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(language = %resolved, error = %err, "execution failed");
                ExecutionOutcome::error(err.to_string(), resolved.name().to_string())
            }
        }
    }

    /// The fallible pipeline behind [`execute`](Self::execute).
    ///
    /// The ephemeral source file is owned by this frame; it is deleted on
    /// drop no matter which arm returns, including `?` early exits.
    async fn try_execute(&self, code: &str, language: Language) -> Result<ExecutionOutcome> {
        let env = build_environment(language)?;
        let source = materialize(code, language)?;

        let process = launch(&source, language, env)?;
        let supervised = process.supervise(self.config.timeout).await?;

        let name = language.name().to_string();
        match supervised {
            Supervised::Completed(output) => {
                if output.status.success() {
                    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                    Ok(ExecutionOutcome::success(stdout, name))
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                    let message = if stderr.is_empty() {
                        "Execution failed".to_string()
                    } else {
                        stderr
                    };
                    Ok(ExecutionOutcome::error(message, name))
                }
            }
            Supervised::TimedOut => Ok(ExecutionOutcome::error(
                SandboxError::Timeout(self.config.timeout).to_string(),
                name,
            )),
        }
    }
}
