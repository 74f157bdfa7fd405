//! Ephemeral source files.
//!
//! Each execution writes its (possibly rewritten) code to a uniquely named
//! temp file owned by that execution alone. Deletion happens on drop, on
//! every path (success, failure, timeout, or panic upstream), and a failed
//! delete is swallowed: cleanup is best-effort and never user-visible.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, TempPath};

use crate::sandbox::config::Language;
use crate::sandbox::error::Result;

/// Shim prepended to Python code that calls `input(...)`.
///
/// Executions have no interactive terminal, so a real `input()` would block
/// until the deadline kills the child. The shim prints the prompt and
/// returns a constant instead.
const PYTHON_INPUT_SHIM: &str = "\
def mock_input(prompt=''):
    print(prompt, end='')
    return '1'
input = mock_input
";

/// A materialized source file, deleted when dropped.
#[derive(Debug)]
pub struct SourceFile {
    path: TempPath,
}

impl SourceFile {
    /// Path handed to the interpreter.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write validated code to a fresh temp file with the language's extension.
///
/// Python code containing a literal `input(` gets [`PYTHON_INPUT_SHIM`]
/// prepended first. The file is written as UTF-8 and flushed before the
/// handle is returned.
pub fn materialize(code: &str, language: Language) -> Result<SourceFile> {
    let body = rewrite(code, language);

    let mut file = Builder::new()
        .prefix("runcell-")
        .suffix(language.profile().file_ext)
        .tempfile()?;
    file.write_all(body.as_bytes())?;
    file.flush()?;

    Ok(SourceFile {
        path: file.into_temp_path(),
    })
}

/// Apply per-language rewrites before the code hits disk.
///
/// The denylist scan already ran against the raw submission; the shim is a
/// fixed constant and is not re-scanned.
fn rewrite(code: &str, language: Language) -> String {
    match language {
        Language::Python if code.contains("input(") => {
            format!("{PYTHON_INPUT_SHIM}\n{code}")
        }
        _ => code.to_string(),
    }
}
