//! # kbuild - Per-App Build Driver for kos User Programs
//!
//! kos user programs are linked at fixed physical addresses carved out of a
//! shared window: the app at build index `i` occupies
//! `[base + i * step, base + (i + 1) * step)`. Because every app links
//! against the same linker script, the driver rewrites the script's base
//! address for each app, runs the external toolchain, converts the ELF to a
//! raw image, and puts the script back exactly as it found it before moving
//! on.
//!
//! The script is the one shared mutable resource in the pipeline, so there
//! is exactly one in-flight patch at a time and restoration is guaranteed on
//! every exit path (see [`linker::ScriptPatch`]). A failing external command
//! aborts the whole run after the restore; nothing is retried.
//!
//! ## Module Structure
//!
//! - [`cli`]: command-line argument parsing (`build` / `embed`)
//! - [`config`]: path and address-window configuration
//! - [`discover`]: target discovery from a source tree or a manifest
//! - [`layout`]: address-window arithmetic
//! - [`linker`]: scoped patch/restore of the shared linker script
//! - [`toolchain`]: the external command seam (cargo, cp, rust-objcopy)
//! - [`driver`]: the sequential per-app loop
//! - [`embed`]: generation of the app-embedding assembly stub

// Expose modules for testing
pub mod cli;
pub mod config;
pub mod discover;
pub mod domain;
pub mod driver;
pub mod embed;
pub mod layout;
pub mod linker;
pub mod toolchain;
