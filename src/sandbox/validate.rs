//! Static pre-checks on submitted code.
//!
//! Everything here runs before any file is written or process spawned. The
//! denylist check is a verbatim substring scan of the raw submission, not
//! of the shimmed body that ultimately runs; it is a documented deterrent
//! against casual misuse, trivially bypassable and not a security boundary.

use std::str::FromStr;

use crate::sandbox::config::Language;
use crate::sandbox::error::{Result, SandboxError};

/// Validate a submission and resolve its language.
///
/// Pure function of its inputs: no side effects, nothing spawned. Returns
/// the parsed [`Language`] on success so callers never re-parse the string.
pub fn validate(code: &str, language: &str, max_code_len: usize) -> Result<Language> {
    if code.trim().is_empty() || language.trim().is_empty() {
        return Err(SandboxError::EmptyInput);
    }

    if code.chars().count() > max_code_len {
        return Err(SandboxError::TooLong { limit: max_code_len });
    }

    let language =
        Language::from_str(language).map_err(|_| SandboxError::UnsupportedLanguage {
            language: language.to_string(),
        })?;

    for construct in language.profile().denylist {
        if code.contains(construct) {
            return Err(SandboxError::DisallowedConstruct {
                construct: (*construct).to_string(),
            });
        }
    }

    Ok(language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::config::MAX_CODE_LEN;

    #[test]
    fn test_accepts_simple_python() {
        let lang = validate("print(2+2)", "python", MAX_CODE_LEN).unwrap();
        assert_eq!(lang, Language::Python);
    }

    #[test]
    fn test_accepts_uppercase_language_name() {
        let lang = validate("console.log(1)", "JavaScript", MAX_CODE_LEN).unwrap();
        assert_eq!(lang, Language::Javascript);
    }

    #[test]
    fn test_rejects_empty_code() {
        let err = validate("", "python", MAX_CODE_LEN).unwrap_err();
        assert!(matches!(err, SandboxError::EmptyInput));
    }

    #[test]
    fn test_rejects_blank_code() {
        let err = validate("   \n\t", "python", MAX_CODE_LEN).unwrap_err();
        assert!(matches!(err, SandboxError::EmptyInput));
    }

    #[test]
    fn test_rejects_empty_language() {
        let err = validate("print(1)", "", MAX_CODE_LEN).unwrap_err();
        assert!(matches!(err, SandboxError::EmptyInput));
    }

    #[test]
    fn test_rejects_oversized_code() {
        let code = "a".repeat(MAX_CODE_LEN + 1);
        let err = validate(&code, "python", MAX_CODE_LEN).unwrap_err();
        assert!(matches!(err, SandboxError::TooLong { limit: 4000 }));
    }

    #[test]
    fn test_length_limit_counts_code_points_not_bytes() {
        // Multi-byte chars: 4000 code points is fine even though it is
        // 12000 bytes.
        let code = "é".repeat(MAX_CODE_LEN - 10) + "\nprint(1)";
        assert!(validate(&code, "python", MAX_CODE_LEN).is_ok());
    }

    #[test]
    fn test_boundary_length_accepted() {
        let code = "a".repeat(MAX_CODE_LEN);
        assert!(validate(&code, "python", MAX_CODE_LEN).is_ok());
    }

    #[test]
    fn test_rejects_unknown_language() {
        let err = validate("puts 1", "ruby", MAX_CODE_LEN).unwrap_err();
        match err {
            SandboxError::UnsupportedLanguage { language } => assert_eq!(language, "ruby"),
            other => panic!("expected UnsupportedLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_python_subprocess() {
        let err = validate("import subprocess", "python", MAX_CODE_LEN).unwrap_err();
        match err {
            SandboxError::DisallowedConstruct { construct } => {
                assert_eq!(construct, "subprocess");
            }
            other => panic!("expected DisallowedConstruct, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_python_os_system_and_socket() {
        assert!(matches!(
            validate("import os\nos.system('ls')", "python", MAX_CODE_LEN),
            Err(SandboxError::DisallowedConstruct { .. })
        ));
        assert!(matches!(
            validate("import socket", "python", MAX_CODE_LEN),
            Err(SandboxError::DisallowedConstruct { .. })
        ));
    }

    #[test]
    fn test_rejects_javascript_child_process() {
        assert!(matches!(
            validate("require('child_process')", "javascript", MAX_CODE_LEN),
            Err(SandboxError::DisallowedConstruct { .. })
        ));
    }

    #[test]
    fn test_denylist_is_per_language() {
        // "fs" is denied for javascript but irrelevant to python code that
        // merely contains those letters.
        assert!(validate("offset = 1", "python", MAX_CODE_LEN).is_ok());
        assert!(matches!(
            validate("const fs = require('fs')", "javascript", MAX_CODE_LEN),
            Err(SandboxError::DisallowedConstruct { .. })
        ));
    }

    #[test]
    fn test_substring_scan_has_false_positives_by_design() {
        // Documented heuristic behavior: the word inside a comment or string
        // still rejects.
        assert!(matches!(
            validate("# subprocess is banned here", "python", MAX_CODE_LEN),
            Err(SandboxError::DisallowedConstruct { .. })
        ));
    }
}
