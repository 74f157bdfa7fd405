//! Subprocess execution sandbox for untrusted code snippets.
//!
//! This module runs arbitrary user-submitted Python or JavaScript to
//! completion or aborts it, within a bounded wall-clock budget:
//! - **Static validation**: length cap, language registry, denylist scan
//! - **Environment stripping**: the child sees a scrubbed environment only
//! - **Ephemeral sources**: code lives in a per-execution temp file
//! - **Timeout enforcement**: natural exit races a deadline; the loser of
//!   the race is killed, never orphaned
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        SandboxManager                           │
//! │                                                                 │
//! │   validate ──▶ build_environment ──▶ materialize                │
//! │                        │                  │                     │
//! │                        ▼                  ▼                     │
//! │                 ┌────────────────────────────────┐              │
//! │                 │   launch (interpreter child)   │              │
//! │                 │   stdout/stderr piped,         │              │
//! │                 │   stdin closed, env scrubbed   │              │
//! │                 └────────────────────────────────┘              │
//! │                        │                                        │
//! │                        ▼                                        │
//! │        supervise: child exit ──races── deadline timer           │
//! │                        │                                        │
//! │                        ▼                                        │
//! │        ExecutionOutcome { status, output, language }            │
//! │              + guaranteed source-file cleanup                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use runcell::sandbox::SandboxManager;
//!
//! # async fn example() {
//! let manager = SandboxManager::new();
//! let outcome = manager.execute("print(2+2)", "python").await;
//! println!("{}: {}", outcome.language, outcome.output);
//! # }
//! ```
//!
//! # Security Properties
//!
//! - **Environment stripping**: only UTF-8 I/O flags and a `PATH` narrowed
//!   to the interpreter's own directory reach the child
//! - **No stdin**: the child's stdin is closed at spawn; interactive reads
//!   see EOF (Python `input()` is shimmed to return a constant)
//! - **Timeout enforcement**: children are SIGKILLed at the deadline
//! - **Auto-cleanup**: ephemeral source files are deleted on every path
//!
//! This is *not* a kernel-level sandbox: there are no namespaces, seccomp
//! filters, or resource limits beyond wall-clock time, and the denylist is
//! a bypassable substring scan. Treat it as a deterrent for a cooperative
//! environment, not an isolation boundary for hostile code.

pub mod config;
pub mod environment;
pub mod error;
pub mod manager;
pub mod runner;
pub mod source;
pub mod validate;

pub use config::{Language, LanguageProfile, SandboxConfig, EXECUTION_TIMEOUT, MAX_CODE_LEN};
pub use environment::build_environment;
pub use error::{Result, SandboxError};
pub use manager::{ExecutionOutcome, ExecutionStatus, SandboxManager, SandboxManagerBuilder};
pub use runner::{RunningProcess, Supervised};
pub use source::{materialize, SourceFile};
pub use validate::validate;
