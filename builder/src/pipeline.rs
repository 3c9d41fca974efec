use std::path::PathBuf;

use log::{debug, warn};

use fetchbuild_shared::config::{
    INPUT_CMAKE_ARGS, INPUT_URL, OUTPUT_INSTALL_DIR, TOOL_BUILD, TOOL_CONFIGURE,
};
use fetchbuild_shared::logging::Tracer;

use crate::cmake::run_configure;
use crate::error::BuildResult;
use crate::fetch::{download_and_unpack, Archiver};
use crate::host::{required_input, Host};
use crate::locate::must_have_bin;
use crate::make::run_build;
use crate::source::resolve_source_root;
use crate::util::process::Runner;
use crate::util::scratch::{path_str, unique_dir};

/// What to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Archive URL, its suffix selects the extraction strategy
    pub url: String,
    /// Raw `-D` definitions for the configure step
    pub cmake_args: String,
}

impl Request {
    /// Read the request from the host inputs
    pub fn from_host<H: Host>(host: &H) -> BuildResult<Self> {
        let url = required_input(host, INPUT_URL)?;
        let cmake_args = required_input(host, INPUT_CMAKE_ARGS)?;
        Ok(Self { url, cmake_args })
    }
}

/// The fetch → extract → configure → build sequence for one request
pub struct Pipeline<'a, R: Runner, A: Archiver> {
    runner: &'a R,
    archiver: &'a A,
    request: Request,
}

impl<'a, R: Runner, A: Archiver> Pipeline<'a, R, A> {
    pub fn new(runner: &'a R, archiver: &'a A, request: Request) -> Self {
        Self {
            runner,
            archiver,
            request,
        }
    }

    /// Run every stage and return the install directory
    pub fn execute(self) -> BuildResult<PathBuf> {
        let Self {
            runner,
            archiver,
            request,
        } = self;
        let Request { url, cmake_args } = request;
        debug!("url={}, args={}", url, cmake_args);

        // fetch
        let path_extracted = {
            let t = Tracer::new("fetch");
            let path = download_and_unpack(archiver, &url)?;
            t.log(&format!("unpacked into {}", path.display()));
            path
        };

        // locate the source tree
        let path_src = resolve_source_root(&path_extracted)?;
        let path_build = unique_dir(&path_extracted, "build-")?;
        let path_install = unique_dir(&path_extracted, "install-")?;
        debug!(
            "src={}, build={}, install={}",
            path_src.display(),
            path_build.display(),
            path_install.display()
        );

        // configure
        {
            let _t = Tracer::new("configure");
            run_configure(runner, &cmake_args, &path_src, &path_build, &path_install)?;
        }

        // build and install
        {
            let _t = Tracer::new("build");
            run_build(runner, &path_build)?;
        }

        Ok(path_install)
    }
}

fn execute<H: Host, R: Runner, A: Archiver>(
    host: &mut H,
    runner: &R,
    archiver: &A,
) -> BuildResult<PathBuf> {
    let request = Request::from_host(host)?;

    // pre-flight checks
    must_have_bin(runner, TOOL_CONFIGURE)?;
    must_have_bin(runner, TOOL_BUILD)?;

    let path_install = Pipeline::new(runner, archiver, request).execute()?;
    host.set_output(OUTPUT_INSTALL_DIR, path_str(&path_install)?)?;
    Ok(path_install)
}

/// Run the whole pipeline against the host, reporting `install_dir` on success
///
/// Any failure is logged and surfaced as a host warning exactly once, then
/// returned; no output is set in that case.
pub fn run<H: Host, R: Runner, A: Archiver>(
    host: &mut H,
    runner: &R,
    archiver: &A,
) -> BuildResult<PathBuf> {
    let _t = Tracer::new("pipeline");
    execute(host, runner, archiver).map_err(|e| {
        warn!("{}", e);
        host.warning(&e.to_string());
        e
    })
}

/// Convert the pipeline outcome into the terminal state of the run
pub fn report<H: Host>(host: &H, outcome: BuildResult<PathBuf>) -> BuildResult<PathBuf> {
    if let Err(e) = &outcome {
        host.set_failed(&e.to_string());
    }
    outcome
}
