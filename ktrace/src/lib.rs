//! # ktrace - Backtrace Post-Processor for the kos Kernel
//!
//! Takes raw backtrace addresses, resolves them through the external
//! `addr2line` tool in a single invocation, and prints the resolved source
//! locations innermost-frame-last with the trailing path segments
//! highlighted so the interesting file jumps out of the toolchain noise.
//!
//! The symbolizer itself is an opaque collaborator: addresses are passed
//! through unvalidated, and a failing tool yields no output at all rather
//! than a partial list.

// Expose modules for testing
pub mod cli;
pub mod domain;
pub mod paint;
pub mod resolve;
