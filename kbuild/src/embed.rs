//! Generation of the app-embedding assembly stub.
//!
//! The kernel links one generated file that pulls every raw app image into
//! its data section and exposes a `_num_app` table for the loader to walk:
//! a count, `N + 1` boundary addresses, then one `.incbin` block per app.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::discover;
use crate::domain::BuildError;

/// Generate the embedding stub for every image in `bin_dir`.
///
/// Apps are sorted by name, matching the address-assignment order of the
/// build loop.
///
/// # Errors
/// Fails when `bin_dir` holds no images (the boundary table is undefined
/// for zero apps) or on any write failure.
pub fn write_embed_script(bin_dir: &Path, output: &Path) -> Result<(), BuildError> {
    let apps = discover::from_source_dir(bin_dir, None)?;
    if apps.is_empty() {
        return Err(BuildError::NoTargets { path: bin_dir.to_path_buf() });
    }

    let mut f = File::create(output)?;
    render(&mut f, bin_dir, &apps)?;
    Ok(())
}

fn render(f: &mut impl Write, bin_dir: &Path, apps: &[String]) -> Result<(), std::io::Error> {
    writeln!(
        f,
        r#"
    .align 3
    .section .data
    .global _num_app
_num_app:
    .quad {}"#,
        apps.len()
    )?;

    for i in 0..apps.len() {
        writeln!(f, "    .quad app_{i}_start")?;
    }
    writeln!(f, "    .quad app_{}_end", apps.len() - 1)?;

    for (idx, app) in apps.iter().enumerate() {
        writeln!(
            f,
            r#"
    .section .data
    .global app_{idx}_start
    .global app_{idx}_end
app_{idx}_start:
    .incbin "{}/{app}.bin"
app_{idx}_end:"#,
            bin_dir.display()
        )?;
    }
    Ok(())
}
