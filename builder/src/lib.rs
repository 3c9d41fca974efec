pub mod cmake;
pub mod error;
pub mod fetch;
pub mod host;
pub mod locate;
pub mod make;
pub mod pipeline;
pub mod source;
pub mod util;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::info;
use structopt::StructOpt;

use fetchbuild_shared::config::{INPUT_CMAKE_ARGS, INPUT_URL, PATH_SCRATCH, RUNNER_DEBUG};
use fetchbuild_shared::logging;

use crate::fetch::ToolCache;
use crate::host::Actions;
use crate::util::process::HostRunner;

#[derive(StructOpt)]
#[structopt(
    name = "fetchbuild",
    about = "Download, configure, build and install a CMake project from a source archive",
    rename_all = "kebab-case"
)]
struct Args {
    /// Archive URL (overrides the `url` input)
    #[structopt(long)]
    url: Option<String>,

    /// Raw `-D` definitions (overrides the `cmake_args` input)
    #[structopt(long, allow_hyphen_values = true)]
    cmake_args: Option<String>,

    /// Scratch directory for downloads and extraction
    #[structopt(short, long)]
    scratch: Option<PathBuf>,

    /// Verbosity
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

/// Main entrypoint
pub fn entrypoint() -> Result<()> {
    // setup
    let args = Args::from_args();
    let Args {
        url,
        cmake_args,
        scratch,
        verbose,
    } = args;
    let verbose = if *RUNNER_DEBUG { verbose.max(1) } else { verbose };
    logging::setup(verbose)?;

    let mut overrides = BTreeMap::new();
    if let Some(v) = url {
        overrides.insert(INPUT_URL.to_string(), v);
    }
    if let Some(v) = cmake_args {
        overrides.insert(INPUT_CMAKE_ARGS.to_string(), v);
    }
    let mut host = Actions::new(overrides);

    // run the pipeline
    let runner = HostRunner {};
    let archiver = ToolCache::new(&runner, scratch.unwrap_or_else(|| PATH_SCRATCH.clone()));
    let outcome = pipeline::run(&mut host, &runner, &archiver);
    let path = pipeline::report(&host, outcome).map_err(|e| anyhow!(e))?;
    info!("installed into {}", path.display());
    Ok(())
}
