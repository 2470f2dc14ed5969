//! Scoped patch/restore of the shared linker script.
//!
//! The script is a single shared slot between the driver and the external
//! build: exactly one app's patched content may be live at a time, and the
//! original bytes must be back on disk before the next app starts, no
//! matter how the build went.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::domain::BuildError;

/// A linker script whose base address has been rewritten for one app.
///
/// The pre-patch content is held in memory until [`restore`](Self::restore)
/// writes it back. Dropping an unrestored patch writes the original back on
/// a best-effort basis, so a failing build or a panic cannot leave the
/// script corrupted.
#[derive(Debug)]
pub struct ScriptPatch {
    path: PathBuf,
    original: String,
    restored: bool,
}

impl ScriptPatch {
    /// Substitute every occurrence of `placeholder` (or, when the script
    /// carries none, the base-address hex literal) with `start`, written
    /// lowercase and `0x`-prefixed, then sync the file to disk.
    ///
    /// At index 0 the substitution can leave the bytes unchanged
    /// (`start == base`); that still counts as a successful patch. What
    /// aborts the run is a script containing neither needle, which means a
    /// previous run died mid-cycle and left an already-patched address
    /// behind.
    ///
    /// # Errors
    /// [`BuildError::PlaceholderMissing`] when neither needle occurs; the
    /// file is not touched in that case.
    pub fn apply(
        path: &Path,
        placeholder: &str,
        base: u64,
        start: u64,
    ) -> Result<Self, BuildError> {
        let original = fs::read_to_string(path)?;
        let base_literal = format!("{base:#x}");

        let needle = if original.contains(placeholder) {
            placeholder
        } else if original.contains(&base_literal) {
            base_literal.as_str()
        } else {
            return Err(BuildError::PlaceholderMissing {
                script: path.to_path_buf(),
                placeholder: placeholder.to_string(),
                base_literal,
            });
        };

        let patched = original.replace(needle, &format!("{start:#x}"));
        write_synced(path, &patched)?;

        Ok(Self { path: path.to_path_buf(), original, restored: false })
    }

    /// Put the pre-patch bytes back and consume the patch.
    ///
    /// # Errors
    /// Propagates the underlying write failure.
    pub fn restore(mut self) -> Result<(), BuildError> {
        write_synced(&self.path, &self.original)?;
        self.restored = true;
        Ok(())
    }
}

impl Drop for ScriptPatch {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = write_synced(&self.path, &self.original) {
                warn!("failed to restore {}: {e}", self.path.display());
            }
        }
    }
}

/// Write and sync: the external build reads this file next, so the content
/// has to be on disk before the command spawns.
fn write_synced(path: &Path, content: &str) -> Result<(), std::io::Error> {
    let mut f = File::create(path)?;
    f.write_all(content.as_bytes())?;
    f.sync_all()
}
