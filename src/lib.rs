//! runcell: sandboxed execution of untrusted code snippets.
//!
//! Given `(code, language)`, run the code to completion in a supervised
//! interpreter subprocess or abort it at the deadline, and return a uniform
//! `{status, output, language}` outcome. See [`sandbox`] for the full
//! architecture and security caveats.

pub mod cli;
pub mod sandbox;

pub use sandbox::{
    ExecutionOutcome, ExecutionStatus, Language, SandboxError, SandboxManager,
    SandboxManagerBuilder,
};
