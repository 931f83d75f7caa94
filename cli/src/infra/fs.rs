//! Filesystem infrastructure: implements `ServiceFs` on the local disk.

use std::fs::{DirBuilder, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ServiceFs;

/// Production filesystem implementation of `ServiceFs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl ServiceFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .with_context(|| format!("{} has no parent directory", path.display()))?;
        if parent.is_dir() {
            return Ok(());
        }

        let mut builder = DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        match builder.create(parent) {
            Err(e) if e.kind() == ErrorKind::AlreadyExists && parent.is_dir() => Ok(()),
            result => result.with_context(|| format!("creating directory {}", parent.display())),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let mut file =
            File::create(path).with_context(|| format!("opening {}", path.display()))?;
        let written = file
            .write(content.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;
        anyhow::ensure!(
            written == content.len(),
            "short write to {}: {written} of {} bytes",
            path.display(),
            content.len()
        );
        file.flush()
            .with_context(|| format!("flushing {}", path.display()))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).with_context(|| format!("removing file {}", path.display()))
    }
}
