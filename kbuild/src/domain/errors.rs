//! Structured error types for kbuild
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("{program} exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    #[error("{program} terminated by a signal")]
    CommandKilled { program: String },

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "neither {placeholder:?} nor {base_literal:?} occurs in {}; \
         the linker script is stale or already patched",
        script.display()
    )]
    PlaceholderMissing { script: PathBuf, placeholder: String, base_literal: String },

    #[error("failed to parse manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no build targets found in {}", path.display())]
    NoTargets { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = BuildError::CommandFailed { program: "cargo".to_string(), code: 101 };
        assert_eq!(err.to_string(), "cargo exited with status 101");
    }

    #[test]
    fn test_placeholder_missing_names_both_needles() {
        let err = BuildError::PlaceholderMissing {
            script: PathBuf::from("src/linker.ld"),
            placeholder: "@APP_BASE@".to_string(),
            base_literal: "0x80400000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("@APP_BASE@"));
        assert!(msg.contains("0x80400000"));
        assert!(msg.contains("src/linker.ld"));
    }
}
