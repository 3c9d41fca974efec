use std::path::PathBuf;
use std::process::Command;

use log::info;

use crate::error::{BuildError, BuildResult};

/// Capability to locate and run external programs on the host
pub trait Runner {
    /// Locate a program on the executable search path
    fn which(&self, program: &str) -> Option<PathBuf>;

    /// Run a program to completion, failing on non-zero exit
    fn exec(&self, program: &str, args: &[String]) -> BuildResult<()>;
}

/// Runs programs through the host operating system
pub struct HostRunner {}

impl Runner for HostRunner {
    fn which(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn exec(&self, program: &str, args: &[String]) -> BuildResult<()> {
        info!("[command]{} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args);
        let status = cmd.status().map_err(|e| {
            BuildError::ProcessFailure(format!("unable to spawn {}: {}", program, e))
        })?;
        if !status.success() {
            return Err(BuildError::ProcessFailure(format!(
                "{} failed with {}",
                program, status
            )));
        }
        Ok(())
    }
}
