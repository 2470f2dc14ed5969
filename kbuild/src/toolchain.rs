//! The external toolchain seam.
//!
//! Every outside command the driver runs goes through [`Toolchain`], so the
//! loop can be exercised in tests with a recording fake instead of a real
//! cargo. Each command is spawned, awaited to completion, and its exit
//! status surfaced; there is no retry and no output capture.

use std::path::Path;
use std::process::Command;

use crate::config::BuildConfig;
use crate::domain::BuildError;

/// The three external operations of one app's build cycle.
pub trait Toolchain {
    /// Build the named app in release mode.
    ///
    /// # Errors
    /// Non-zero exit from the builder.
    fn build(&self, app: &str) -> Result<(), BuildError>;

    /// Copy the built ELF into the staging directory.
    ///
    /// # Errors
    /// Non-zero exit from the copy.
    fn stage(&self, from: &Path, to: &Path) -> Result<(), BuildError>;

    /// Strip the staged ELF and convert it to a raw binary image.
    ///
    /// # Errors
    /// Non-zero exit from the converter.
    fn strip_to_binary(&self, from: &Path, to: &Path) -> Result<(), BuildError>;
}

/// Real toolchain: cargo, cp and rust-objcopy as child processes.
pub struct CargoToolchain {
    arch: String,
}

impl CargoToolchain {
    #[must_use]
    pub fn new(config: &BuildConfig) -> Self {
        Self { arch: config.arch.clone() }
    }
}

impl Toolchain for CargoToolchain {
    fn build(&self, app: &str) -> Result<(), BuildError> {
        run(Command::new("cargo").args(["build", "--bin", app, "--release"]))
    }

    fn stage(&self, from: &Path, to: &Path) -> Result<(), BuildError> {
        run(Command::new("cp").arg(from).arg(to))
    }

    fn strip_to_binary(&self, from: &Path, to: &Path) -> Result<(), BuildError> {
        run(Command::new("rust-objcopy")
            .arg(format!("--binary-architecture={}", self.arch))
            .arg(from)
            .args(["--strip-all", "-O", "binary"])
            .arg(to))
    }
}

/// Wait on a command and surface a non-zero exit as a structured error.
fn run(cmd: &mut Command) -> Result<(), BuildError> {
    let program = cmd.get_program().to_string_lossy().into_owned();

    let status = cmd
        .status()
        .map_err(|source| BuildError::Spawn { program: program.clone(), source })?;

    if status.success() {
        return Ok(());
    }
    Err(match status.code() {
        Some(code) => BuildError::CommandFailed { program, code },
        None => BuildError::CommandKilled { program },
    })
}
