//! Build-driver configuration.
//!
//! Everything that used to live as an embedded constant in the build
//! scripts is carried here, so tests can point the driver at scratch
//! directories and stub tools.

use std::path::PathBuf;

/// Load address of the first app.
pub const DEFAULT_BASE_ADDRESS: u64 = 0x8040_0000;

/// Address-space window reserved per app.
pub const DEFAULT_STEP: u64 = 0x2_0000;

/// Token a linker script may carry instead of the base-address literal.
pub const DEFAULT_PLACEHOLDER: &str = "@APP_BASE@";

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding one source file per app.
    pub src_dir: PathBuf,
    /// Staging directory for freshly built ELFs.
    pub stage_dir: PathBuf,
    /// Output directory for raw binary images.
    pub bin_dir: PathBuf,
    /// Shared linker script rewritten per app.
    pub linker_script: PathBuf,
    /// Placeholder token looked for before the base-address literal.
    pub placeholder: String,
    /// Target triple the built ELFs are found under.
    pub target: String,
    /// Architecture passed to the objcopy conversion.
    pub arch: String,
    pub base_address: u64,
    pub step: u64,
    /// Whether the per-app relocation cycle runs at all.
    pub relocate: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            stage_dir: PathBuf::from("prog"),
            bin_dir: PathBuf::from("bin"),
            linker_script: PathBuf::from("src/linker.ld"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            target: "riscv64gc-unknown-none-elf".to_string(),
            arch: "riscv64".to_string(),
            base_address: DEFAULT_BASE_ADDRESS,
            step: DEFAULT_STEP,
            relocate: true,
        }
    }
}

impl BuildConfig {
    /// Where cargo leaves the built ELF for `app`.
    #[must_use]
    pub fn built_artifact(&self, app: &str) -> PathBuf {
        PathBuf::from("target").join(&self.target).join("release").join(app)
    }

    /// Staged copy of the ELF, prior to conversion.
    #[must_use]
    pub fn staged_artifact(&self, app: &str) -> PathBuf {
        self.stage_dir.join(app)
    }

    /// Final raw binary image for `app`.
    #[must_use]
    pub fn raw_image(&self, app: &str) -> PathBuf {
        self.bin_dir.join(format!("{app}.bin"))
    }
}
