//! Build-target discovery.
//!
//! Two sources: the app source directory (one file per app) or a cargo
//! manifest declaring `[[bin]]` targets.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::BuildError;

/// App names from a source directory listing.
///
/// Regular files only; the excluded name (the linker script living among
/// the sources) is skipped; extensions are stripped; the result is sorted
/// by name so the address assignment is stable across filesystems.
///
/// # Errors
/// Propagates directory read failures.
pub fn from_source_dir(dir: &Path, exclude: Option<&str>) -> Result<Vec<String>, BuildError> {
    let mut apps = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if Some(name) == exclude {
            continue;
        }
        let stem = name.rfind('.').map_or(name, |dot| &name[..dot]);
        apps.push(stem.to_string());
    }
    apps.sort();
    Ok(apps)
}

/// App names from a manifest's `[[bin]]` declarations, in declaration
/// order.
///
/// # Errors
/// Fails on unreadable or unparsable manifests, or when the manifest
/// declares no binary targets at all.
pub fn from_manifest(path: &Path) -> Result<Vec<String>, BuildError> {
    let content = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|source| BuildError::Manifest { path: path.to_path_buf(), source })?;

    let apps: Vec<String> = manifest.bin.into_iter().map(|b| b.name).collect();
    if apps.is_empty() {
        return Err(BuildError::NoTargets { path: path.to_path_buf() });
    }
    Ok(apps)
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    bin: Vec<BinTarget>,
}

#[derive(Debug, Deserialize)]
struct BinTarget {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_listing_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["write_a.rs", "echo.rs", "linker.ld", "matrix.rs"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("shell")).unwrap();

        let apps = from_source_dir(dir.path(), Some("linker.ld")).unwrap();
        assert_eq!(apps, vec!["echo", "matrix", "write_a"]);
    }

    #[test]
    fn extension_free_names_survive_stripping() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("init"), "").unwrap();

        let apps = from_source_dir(dir.path(), None).unwrap();
        assert_eq!(apps, vec!["init"]);
    }

    #[test]
    fn manifest_targets_keep_declaration_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(
            &path,
            r#"
[package]
name = "user"
version = "0.1.0"

[[bin]]
name = "write_a"

[[bin]]
name = "echo"
"#,
        )
        .unwrap();

        let apps = from_manifest(&path).unwrap();
        assert_eq!(apps, vec!["write_a", "echo"]);
    }

    #[test]
    fn manifest_without_bins_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[package]\nname = \"user\"\nversion = \"0.1.0\"\n").unwrap();

        let err = from_manifest(&path).unwrap_err();
        assert!(matches!(err, BuildError::NoTargets { .. }));
    }
}
