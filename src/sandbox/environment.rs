//! Restricted child-process environment.
//!
//! The child never sees the host environment. Each execution gets a fresh
//! map holding only the interpreter's UTF-8 I/O flags, an emptied module
//! search path, and a `PATH` narrowed to the single directory containing
//! the trusted interpreter binary.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::sandbox::config::Language;
use crate::sandbox::error::{Result, SandboxError};

/// Build the scrubbed environment for one execution.
///
/// Deterministic and side-effect free: reads the host `PATH` to locate the
/// interpreter, never mutates the live process environment.
pub fn build_environment(language: Language) -> Result<HashMap<String, String>> {
    let interpreter_dir = resolve_interpreter(language.interpreter())?
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_default();

    let mut env = HashMap::new();
    env.insert("PYTHONIOENCODING".to_string(), "utf-8".to_string());
    env.insert("PYTHONUTF8".to_string(), "1".to_string());
    env.insert("PYTHONPATH".to_string(), String::new());
    env.insert(
        "PATH".to_string(),
        interpreter_dir.to_string_lossy().into_owned(),
    );
    Ok(env)
}

/// Locate the interpreter binary on the host `PATH`.
fn resolve_interpreter(binary: &str) -> Result<PathBuf> {
    let path = env::var_os("PATH").unwrap_or_default();
    for dir in env::split_paths(&path) {
        let candidate = dir.join(binary);
        #[cfg(windows)]
        let candidate_exe = dir.join(format!("{binary}.exe"));
        if is_executable(&candidate) {
            return Ok(candidate);
        }
        #[cfg(windows)]
        if is_executable(&candidate_exe) {
            return Ok(candidate_exe);
        }
    }
    Err(SandboxError::Spawn {
        interpreter: binary.to_string(),
        reason: "interpreter not found on PATH".to_string(),
    })
}

#[cfg(unix)]
fn is_executable(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &std::path::Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_contains_only_expected_keys() {
        // Assumes python3 is installed; skip quietly where it is not.
        let Ok(env) = build_environment(Language::Python) else {
            eprintln!("python3 not on PATH; skipping");
            return;
        };
        let mut keys: Vec<&str> = env.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["PATH", "PYTHONIOENCODING", "PYTHONPATH", "PYTHONUTF8"]);
    }

    #[test]
    fn test_utf8_flags_set_and_module_path_cleared() {
        let Ok(env) = build_environment(Language::Python) else {
            eprintln!("python3 not on PATH; skipping");
            return;
        };
        assert_eq!(env["PYTHONIOENCODING"], "utf-8");
        assert_eq!(env["PYTHONUTF8"], "1");
        assert_eq!(env["PYTHONPATH"], "");
    }

    #[test]
    fn test_path_is_single_directory_containing_interpreter() {
        let Ok(env) = build_environment(Language::Python) else {
            eprintln!("python3 not on PATH; skipping");
            return;
        };
        let restricted = &env["PATH"];
        assert!(!restricted.is_empty());
        let interpreter = std::path::Path::new(restricted).join("python3");
        assert!(interpreter.exists(), "PATH should hold the interpreter dir");
    }

    #[test]
    fn test_missing_interpreter_is_spawn_error() {
        let err = resolve_interpreter("definitely-not-an-interpreter-9f2c").unwrap_err();
        assert!(matches!(err, SandboxError::Spawn { .. }));
    }

    #[test]
    fn test_host_environment_is_untouched() {
        let before: Vec<(String, String)> = env::vars().collect();
        let _ = build_environment(Language::Python);
        let after: Vec<(String, String)> = env::vars().collect();
        assert_eq!(before, after);
    }
}
