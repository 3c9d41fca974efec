use std::path::Path;

use log::debug;

use fetchbuild_shared::config::TOOL_BUILD;

use crate::error::BuildResult;
use crate::util::process::Runner;
use crate::util::scratch::path_str;

/// Compile and install from the configured build directory
pub fn run_build<R: Runner>(runner: &R, path_build: &Path) -> BuildResult<()> {
    debug!("build: dir={}", path_build.display());
    let args = vec![
        "-C".to_string(),
        path_str(path_build)?.to_string(),
        "install".to_string(),
    ];
    runner.exec(TOOL_BUILD, &args)
}
