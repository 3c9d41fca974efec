use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{BuildError, BuildResult};
use crate::util::process::Runner;
use crate::util::scratch::{path_str, unique_dir};

/// Archive formats recognized by their trailing extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    Zip,
    SevenZip,
}

impl ArchiveKind {
    /// Sniff the archive kind from the URL suffix
    pub fn from_url(url: &str) -> Option<Self> {
        if url.ends_with(".tar.gz") {
            Some(Self::TarGz)
        } else if url.ends_with(".zip") {
            Some(Self::Zip)
        } else if url.ends_with(".7z") {
            Some(Self::SevenZip)
        } else {
            None
        }
    }
}

/// Download-and-extract capability
pub trait Archiver {
    /// Download the URL into local storage, returning the file path
    fn download(&self, url: &str) -> BuildResult<PathBuf>;

    /// Unpack an archive into a fresh directory, returning that directory
    fn extract(&self, kind: ArchiveKind, archive: &Path) -> BuildResult<PathBuf>;
}

/// Download the archive and unpack it according to its suffix
pub fn download_and_unpack<A: Archiver>(archiver: &A, url: &str) -> BuildResult<PathBuf> {
    let archive = archiver.download(url)?;
    debug!("downloaded {} to {}", url, archive.display());

    let kind = ArchiveKind::from_url(url).ok_or_else(|| BuildError::UnknownArchive(url.into()))?;
    let extracted = archiver.extract(kind, &archive)?;
    debug!("extracted {:?} archive to {}", kind, extracted.display());
    Ok(extracted)
}

/// Archiver backed by host tools, keeping everything under a scratch root
pub struct ToolCache<'a, R: Runner> {
    runner: &'a R,
    scratch: PathBuf,
}

impl<'a, R: Runner> ToolCache<'a, R> {
    pub fn new(runner: &'a R, scratch: PathBuf) -> Self {
        Self { runner, scratch }
    }

    fn args<I: IntoIterator<Item = S>, S: Into<String>>(items: I) -> Vec<String> {
        items.into_iter().map(|i| i.into()).collect()
    }
}

impl<R: Runner> Archiver for ToolCache<'_, R> {
    fn download(&self, url: &str) -> BuildResult<PathBuf> {
        std::fs::create_dir_all(&self.scratch)?;
        let dest = unique_dir(&self.scratch, "download-")?.join("archive");

        let args = Self::args([
            "--fail",
            "--location",
            "--silent",
            "--show-error",
            "--output",
            path_str(&dest)?,
            url,
        ]);
        self.runner.exec("curl", &args)?;
        Ok(dest)
    }

    fn extract(&self, kind: ArchiveKind, archive: &Path) -> BuildResult<PathBuf> {
        std::fs::create_dir_all(&self.scratch)?;
        let dest = unique_dir(&self.scratch, "extract-")?;
        let path_dest = path_str(&dest)?;
        let path_archive = path_str(archive)?;

        match kind {
            ArchiveKind::TarGz => {
                let args = Self::args(["xz", "-C", path_dest, "-f", path_archive]);
                self.runner.exec("tar", &args)?;
            }
            ArchiveKind::Zip => {
                let args = Self::args(["-o", "-q", path_archive, "-d", path_dest]);
                self.runner.exec("unzip", &args)?;
            }
            ArchiveKind::SevenZip => {
                let args = vec![
                    "x".to_string(),
                    "-y".to_string(),
                    format!("-o{}", path_dest),
                    path_archive.to_string(),
                ];
                self.runner.exec("7z", &args)?;
            }
        }
        Ok(dest)
    }
}
