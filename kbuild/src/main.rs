//! # kbuild - Main Entry Point

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use kbuild::cli::{Args, Cmd};
use kbuild::discover;
use kbuild::driver;
use kbuild::embed;
use kbuild::toolchain::CargoToolchain;

fn main() {
    // Progress lines go through log at info level; default the filter so
    // they show up without RUST_LOG in the environment.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Cmd::Build(build) => {
            let config = build.to_config();
            let apps = match &build.manifest {
                Some(manifest) => discover::from_manifest(manifest)?,
                None => {
                    let exclude =
                        config.linker_script.file_name().and_then(|name| name.to_str());
                    discover::from_source_dir(&config.src_dir, exclude)?
                }
            };
            let toolchain = CargoToolchain::new(&config);
            driver::run(&config, &toolchain, &apps)?;
        }
        Cmd::Embed(embed_args) => {
            embed::write_embed_script(&embed_args.bin_dir, &embed_args.output)?;
            log::info!("wrote {}", embed_args.output.display());
        }
    }
    Ok(())
}
