//! Static language registry and fixed execution limits.
//!
//! The registry is a read-only table baked into the binary: one
//! [`LanguageProfile`] per supported language, keyed by the [`Language`]
//! enum. There is deliberately no way to add or mutate entries at runtime.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

/// Maximum accepted code length, in Unicode code points.
pub const MAX_CODE_LEN: usize = 4000;

/// Wall-clock budget for one execution.
pub const EXECUTION_TIMEOUT: Duration = Duration::from_millis(10_000);

/// A language supported by the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
}

/// Static per-language launch configuration.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    /// Interpreter invocation, head is the binary name resolved on `PATH`.
    pub command: &'static [&'static str],
    /// Extension given to the ephemeral source file.
    pub file_ext: &'static str,
    /// Substrings whose verbatim presence rejects the submission.
    ///
    /// A plain substring scan, trivially bypassable by obfuscation. It is a
    /// deterrent for casual misuse, not a security boundary.
    pub denylist: &'static [&'static str],
}

const PYTHON_PROFILE: LanguageProfile = LanguageProfile {
    command: &["python3", "-X", "utf8"],
    file_ext: ".py",
    denylist: &["os.system", "subprocess", "socket"],
};

const JAVASCRIPT_PROFILE: LanguageProfile = LanguageProfile {
    command: &["node"],
    file_ext: ".js",
    denylist: &["child_process", "fs"],
};

impl Language {
    /// All registered languages.
    pub const ALL: &'static [Language] = &[Language::Python, Language::Javascript];

    /// The launch profile for this language.
    pub fn profile(&self) -> &'static LanguageProfile {
        match self {
            Language::Python => &PYTHON_PROFILE,
            Language::Javascript => &JAVASCRIPT_PROFILE,
        }
    }

    /// The wire name, as echoed back to callers.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
        }
    }

    /// The interpreter binary name (head of the launch command).
    pub fn interpreter(&self) -> &'static str {
        self.profile().command[0]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Case-insensitive lookup; callers submit free-form language strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::Javascript),
            other => Err(format!("Unsupported language: {other}")),
        }
    }
}

/// Tunable limits for one sandbox instance.
///
/// Defaults are the service's fixed contract (4000 chars, 10 s); overrides
/// exist so tests can shrink the budget.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Maximum accepted code length in code points.
    pub max_code_len: usize,
    /// Wall-clock budget before the child is killed.
    pub timeout: Duration,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            max_code_len: MAX_CODE_LEN,
            timeout: EXECUTION_TIMEOUT,
        }
    }
}
