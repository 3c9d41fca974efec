use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use fetchbuild_builder::error::{BuildError, BuildResult};
use fetchbuild_builder::fetch::{ArchiveKind, Archiver};
use fetchbuild_builder::host::Host;
use fetchbuild_builder::util::process::Runner;

/// Runner with a configurable set of installed tools and failing programs
#[derive(Default)]
pub struct FakeRunner {
    pub installed: BTreeSet<String>,
    pub failing: BTreeSet<String>,
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    pub fn with_tools(tools: &[&str]) -> Self {
        Self {
            installed: tools.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn args_of(&self, program: &str) -> Option<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .find(|(p, _)| p == program)
            .map(|(_, a)| a.clone())
    }
}

impl Runner for FakeRunner {
    fn which(&self, program: &str) -> Option<PathBuf> {
        if self.installed.contains(program) {
            Some(Path::new("/usr/bin").join(program))
        } else {
            None
        }
    }

    fn exec(&self, program: &str, args: &[String]) -> BuildResult<()> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        if self.failing.contains(program) {
            return Err(BuildError::ProcessFailure(format!(
                "{} failed with exit status: 1",
                program
            )));
        }
        Ok(())
    }
}

/// Archiver that unpacks into a real temporary directory with fixed entries
pub struct FakeArchiver {
    root: TempDir,
    entries: Vec<String>,
    last: RefCell<Option<PathBuf>>,
    pub downloads: RefCell<Vec<String>>,
    pub extracts: RefCell<Vec<ArchiveKind>>,
}

impl FakeArchiver {
    pub fn unpacking(entries: &[&str]) -> Self {
        Self {
            root: tempfile::tempdir().expect("tempdir"),
            entries: entries.iter().map(|e| e.to_string()).collect(),
            last: RefCell::new(None),
            downloads: RefCell::new(vec![]),
            extracts: RefCell::new(vec![]),
        }
    }

    /// Directory produced by the latest extraction
    pub fn extraction_dir(&self) -> PathBuf {
        self.last.borrow().clone().expect("nothing extracted yet")
    }
}

impl Archiver for FakeArchiver {
    fn download(&self, url: &str) -> BuildResult<PathBuf> {
        self.downloads.borrow_mut().push(url.to_string());
        let path = self.root.path().join("archive");
        fs::write(&path, b"")?;
        Ok(path)
    }

    fn extract(&self, kind: ArchiveKind, _archive: &Path) -> BuildResult<PathBuf> {
        let mut extracts = self.extracts.borrow_mut();
        let dest = self
            .root
            .path()
            .join(format!("extract-{}", extracts.len()));
        extracts.push(kind);
        fs::create_dir_all(&dest)?;
        for entry in &self.entries {
            fs::create_dir_all(dest.join(entry))?;
        }
        *self.last.borrow_mut() = Some(dest.clone());
        Ok(dest)
    }
}

/// Host backed by in-memory maps
#[derive(Default)]
pub struct FakeHost {
    pub inputs: BTreeMap<String, String>,
    pub outputs: BTreeMap<String, String>,
    pub warnings: RefCell<Vec<String>>,
    pub failures: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn with_inputs(items: &[(&str, &str)]) -> Self {
        Self {
            inputs: items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }
}

impl Host for FakeHost {
    fn input(&self, name: &str) -> Option<String> {
        self.inputs
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn set_output(&mut self, name: &str, value: &str) -> BuildResult<()> {
        self.outputs.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn set_failed(&self, message: &str) {
        self.failures.borrow_mut().push(message.to_string());
    }
}
