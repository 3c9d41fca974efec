use std::env;
use std::path::PathBuf;

use lazy_static::lazy_static;

/// Configure tool invoked against the source tree
pub static TOOL_CONFIGURE: &str = "cmake";

/// Build tool invoked against the build directory
pub static TOOL_BUILD: &str = "make";

/// Name of the input carrying the archive URL
pub static INPUT_URL: &str = "url";

/// Name of the input carrying the raw configure definitions
pub static INPUT_CMAKE_ARGS: &str = "cmake_args";

/// Name of the output reporting the install prefix
pub static OUTPUT_INSTALL_DIR: &str = "install_dir";

// common configurations
lazy_static! {
    pub static ref RUNNER_DEBUG: bool = matches!(env::var("RUNNER_DEBUG"), Ok(val) if val == "1");
    pub static ref PATH_SCRATCH: PathBuf = match env::var_os("RUNNER_TEMP") {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => env::temp_dir().join("fetchbuild"),
    };
}
