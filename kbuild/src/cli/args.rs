//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{BuildConfig, DEFAULT_PLACEHOLDER};

#[derive(Parser)]
#[command(
    name = "kbuild",
    about = "Build kos user apps into per-app address windows",
    after_help = "\
EXAMPLES:
    kbuild build                         Discover apps from src/, relocate each
    kbuild build --manifest Cargo.toml   Discover apps from [[bin]] targets
    kbuild build --no-relocate           Leave the shared linker script alone
    kbuild embed                         Regenerate src/link_app.S from bin/"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Build every app, one relocation cycle each
    Build(BuildArgs),
    /// Generate the app-embedding assembly stub from built images
    Embed(EmbedArgs),
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Discover apps from a manifest's [[bin]] targets instead of the
    /// source directory
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// App source directory
    #[arg(long, default_value = "src")]
    pub src_dir: PathBuf,

    /// Staging directory for built ELFs
    #[arg(long, default_value = "prog")]
    pub stage_dir: PathBuf,

    /// Output directory for raw binary images
    #[arg(long, default_value = "bin")]
    pub bin_dir: PathBuf,

    /// Shared linker script to patch per app
    #[arg(long, default_value = "src/linker.ld")]
    pub linker: PathBuf,

    /// Placeholder token looked for before the base-address literal
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Load address of the first app
    #[arg(long, value_parser = parse_address, default_value = "0x80400000")]
    pub base: u64,

    /// Address-space window reserved per app
    #[arg(long, value_parser = parse_address, default_value = "0x20000")]
    pub step: u64,

    /// Build in place without patching the linker script
    #[arg(long)]
    pub no_relocate: bool,

    /// Target triple the built ELFs are found under
    #[arg(long, default_value = "riscv64gc-unknown-none-elf")]
    pub target: String,

    /// Architecture passed to rust-objcopy
    #[arg(long, default_value = "riscv64")]
    pub arch: String,
}

#[derive(clap::Args)]
pub struct EmbedArgs {
    /// Directory of raw binary images
    #[arg(long, default_value = "bin")]
    pub bin_dir: PathBuf,

    /// Path of the generated assembly stub
    #[arg(long, default_value = "src/link_app.S")]
    pub output: PathBuf,
}

impl BuildArgs {
    #[must_use]
    pub fn to_config(&self) -> BuildConfig {
        BuildConfig {
            src_dir: self.src_dir.clone(),
            stage_dir: self.stage_dir.clone(),
            bin_dir: self.bin_dir.clone(),
            linker_script: self.linker.clone(),
            placeholder: self.placeholder.clone(),
            target: self.target.clone(),
            arch: self.arch.clone(),
            base_address: self.base,
            step: self.step,
            relocate: !self.no_relocate,
        }
    }
}

/// Accept addresses as plain decimal or `0x`-prefixed hex.
fn parse_address(s: &str) -> Result<u64, String> {
    s.strip_prefix("0x")
        .map_or_else(|| s.parse(), |hex| u64::from_str_radix(hex, 16))
        .map_err(|e| format!("invalid address {s:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_parse_as_hex_and_decimal() {
        assert_eq!(parse_address("0x80400000").unwrap(), 0x8040_0000);
        assert_eq!(parse_address("131072").unwrap(), 0x2_0000);
        assert!(parse_address("0xzz").is_err());
    }

    #[test]
    fn defaults_match_the_original_allocation() {
        let args = Args::parse_from(["kbuild", "build"]);
        let Cmd::Build(build) = args.command else {
            panic!("expected build subcommand");
        };
        let config = build.to_config();
        assert_eq!(config.base_address, 0x8040_0000);
        assert_eq!(config.step, 0x2_0000);
        assert!(config.relocate);
    }
}
