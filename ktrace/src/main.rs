//! # ktrace - Main Entry Point
//!
//! Interactive loop: collect backtrace addresses until a literal `ok`,
//! resolve them all in one addr2line invocation, print the locations
//! reversed with the trailing path segments highlighted.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use ktrace::cli::Args;
use ktrace::paint::{display_order, highlight_tail};
use ktrace::resolve::Addr2Line;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let resolver = Addr2Line::new(args.tool, args.image);

    println!("type backtrace address, 'ok' to stop typing");
    let addrs = read_addresses(io::stdin().lock())?;
    if addrs.is_empty() {
        log::warn!("no addresses entered");
        return Ok(());
    }

    let lines = resolver.resolve(&addrs)?;

    let mut out = io::stdout().lock();
    for line in display_order(lines) {
        writeln!(out, "{}", highlight_tail(&line))?;
    }
    Ok(())
}

/// Collect address tokens until a literal `ok` line (or end of input).
///
/// Tokens are opaque strings; nothing checks they look like hex. Blank
/// lines are skipped.
fn read_addresses(input: impl BufRead) -> Result<Vec<String>> {
    let mut addrs = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        let token = line.trim();
        if token == "ok" {
            break;
        }
        if !token.is_empty() {
            addrs.push(token.to_string());
        }
    }
    Ok(addrs)
}
