//! One-shot invocation of the external addr2line tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ResolveError;

/// Handle on the external symbolizer: the tool binary plus the kernel image
/// addresses are resolved against.
///
/// The tool is treated as an opaque collaborator. Addresses go in as-is
/// (no hex validation), and whatever it prints comes back line by line.
pub struct Addr2Line {
    tool: PathBuf,
    image: PathBuf,
}

impl Addr2Line {
    #[must_use]
    pub fn new(tool: impl Into<PathBuf>, image: impl Into<PathBuf>) -> Self {
        Self { tool: expand_tilde(&tool.into()), image: image.into() }
    }

    /// Resolve a batch of raw addresses to source-location lines.
    ///
    /// All addresses go into a single tool invocation; lines come back in
    /// the tool's output order, one per address. An empty batch resolves to
    /// no lines without spawning anything.
    ///
    /// # Errors
    /// Returns an error if the tool cannot be spawned, exits non-zero
    /// (the exit code is carried in the error), or emits non-UTF-8 output.
    /// A failed resolution produces no lines at all, never a partial list.
    pub fn resolve(&self, addrs: &[String]) -> Result<Vec<String>, ResolveError> {
        if addrs.is_empty() {
            return Ok(Vec::new());
        }

        let output = Command::new(&self.tool)
            .arg(format!("--exe={}", self.image.display()))
            .args(addrs)
            .output()
            .map_err(|source| ResolveError::Spawn { tool: self.tool.clone(), source })?;

        if !output.status.success() {
            return Err(match output.status.code() {
                Some(code) => ResolveError::CommandFailed { tool: self.tool.clone(), code },
                None => ResolveError::CommandKilled { tool: self.tool.clone() },
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| ResolveError::BadOutput { tool: self.tool.clone() })?;

        Ok(stdout.trim_end().lines().map(str::to_string).collect())
    }
}

/// Expand a leading `~/` against `$HOME` so the default tool path works
/// without a shell in front of it.
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
