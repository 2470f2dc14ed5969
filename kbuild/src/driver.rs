//! The sequential per-app build loop.
//!
//! One cycle per app: patch the shared linker script, run the external
//! toolchain, restore the script, report. Apps never overlap; the script's
//! patched state exists only for the duration of one cycle.

use log::{info, warn};

use crate::config::BuildConfig;
use crate::domain::BuildError;
use crate::layout::Region;
use crate::linker::ScriptPatch;
use crate::toolchain::Toolchain;

/// Build every app in order, one relocation cycle each.
///
/// Fail-fast: the first failing step aborts the run, after the linker
/// script has been put back. An empty app list is a no-op.
///
/// # Errors
/// The first patch, toolchain, or restore failure.
pub fn run(
    config: &BuildConfig,
    toolchain: &dyn Toolchain,
    apps: &[String],
) -> Result<(), BuildError> {
    if apps.is_empty() {
        warn!("no apps to build");
        return Ok(());
    }

    for (index, app) in apps.iter().enumerate() {
        build_app(config, toolchain, app, index)?;
    }
    Ok(())
}

fn build_app(
    config: &BuildConfig,
    toolchain: &dyn Toolchain,
    app: &str,
    index: usize,
) -> Result<(), BuildError> {
    info!("processing app \"{app}\"");

    let region = Region::for_index(config.base_address, config.step, index);
    let patch = if config.relocate {
        Some(ScriptPatch::apply(
            &config.linker_script,
            &config.placeholder,
            config.base_address,
            region.start,
        )?)
    } else {
        None
    };

    let built = run_steps(config, toolchain, app);

    // Restore before surfacing any build failure: the script must be back
    // in canonical form whatever happened above.
    if let Some(patch) = patch {
        patch.restore()?;
    }
    built?;

    if config.relocate {
        info!("application \"{app}\" with address {region}");
    } else {
        info!("application \"{app}\" built");
    }
    Ok(())
}

fn run_steps(
    config: &BuildConfig,
    toolchain: &dyn Toolchain,
    app: &str,
) -> Result<(), BuildError> {
    toolchain.build(app)?;
    toolchain.stage(&config.built_artifact(app), &config.staged_artifact(app))?;
    toolchain.strip_to_binary(&config.staged_artifact(app), &config.raw_image(app))?;
    Ok(())
}
