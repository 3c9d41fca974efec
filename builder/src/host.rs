use std::collections::BTreeMap;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{BuildError, BuildResult};

/// The invoking pipeline: named inputs in, named outputs and status out
pub trait Host {
    /// Read a named input, `None` when absent or blank
    fn input(&self, name: &str) -> Option<String>;

    /// Report a named output value
    fn set_output(&mut self, name: &str, value: &str) -> BuildResult<()>;

    /// Surface a warning annotation
    fn warning(&self, message: &str);

    /// Mark the whole run as failed
    fn set_failed(&self, message: &str);
}

/// Read a required input or fail with a missing-input error
pub fn required_input<H: Host>(host: &H, name: &str) -> BuildResult<String> {
    host.input(name)
        .ok_or_else(|| BuildError::MissingInput(name.to_string()))
}

/// Host speaking the CI runner protocol (environment inputs, workflow commands)
pub struct Actions {
    overrides: BTreeMap<String, String>,
    path_output: Option<PathBuf>,
}

impl Actions {
    /// Inputs in `overrides` take precedence over the environment
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        let path_output = env::var_os("GITHUB_OUTPUT")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self {
            overrides,
            path_output,
        }
    }

    /// Write outputs to `path` instead of the location from the environment
    pub fn with_output_file(mut self, path: Option<PathBuf>) -> Self {
        self.path_output = path;
        self
    }
}

/// Environment variable carrying an input
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Escape the data part of a workflow command
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Base delimiter for multi-line entries of the output file
static OUTPUT_DELIMITER: &str = "ghadelimiter_fetchbuild";

/// Render an entry of the output file
fn output_entry(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let mut delimiter = OUTPUT_DELIMITER.to_string();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

impl Host for Actions {
    fn input(&self, name: &str) -> Option<String> {
        let value = match self.overrides.get(name) {
            Some(v) => v.clone(),
            None => env::var(input_env_name(name)).ok()?,
        };
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> BuildResult<()> {
        match &self.path_output {
            None => {
                println!(
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                );
            }
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(output_entry(name, value).as_bytes())?;
            }
        }
        Ok(())
    }

    fn warning(&self, message: &str) {
        println!("::warning::{}", escape_data(message));
    }

    fn set_failed(&self, message: &str) {
        println!("::error::{}", escape_data(message));
    }
}
