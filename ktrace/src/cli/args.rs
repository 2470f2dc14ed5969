//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Default location of the cross-toolchain addr2line binary.
pub const DEFAULT_TOOL: &str = "~/riscv64-elf-tools/bin/riscv64-unknown-elf-addr2line";

/// Default kernel image addresses are resolved against.
pub const DEFAULT_IMAGE: &str = "kos";

#[derive(Parser)]
#[command(
    name = "ktrace",
    about = "Resolve kernel backtrace addresses to source locations",
    after_help = "\
EXAMPLES:
    ktrace                                   Resolve against ./kos
    ktrace --image build/kos                 Explicit kernel image
    ktrace --tool /opt/riscv/bin/addr2line   Explicit symbolizer binary"
)]
pub struct Args {
    /// Path to the addr2line executable
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: PathBuf,

    /// Kernel image to resolve addresses against
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: PathBuf,
}
