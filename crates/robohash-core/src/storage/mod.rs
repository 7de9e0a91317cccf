//! Persisting fetched image bytes.
//!
//! [`FileWriter`] writes to `<path>.part`, syncs, and hard-links it into place,
//! so a failed save never leaves a partial file at the destination and an
//! existing destination is never replaced. [`PathProbe`]
//! answers the existence checks made before a save.

mod error;
mod filename;

pub use error::WriteError;
pub use filename::{default_filename, is_valid_filename};

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Writes `bytes` to `path`. `format_hint` is the lowercase extension the
/// caller asked for (e.g. `png`).
pub trait WriteBytes {
    fn write_bytes(&self, bytes: &[u8], path: &Path, format_hint: &str) -> Result<(), WriteError>;
}

/// Filesystem queries used for save preconditions.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`PathProbe`] over the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Path for the temp file: appends `.part` to the final path (e.g. `bob.png` → `bob.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// [`WriteBytes`] over the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter;

impl WriteBytes for FileWriter {
    fn write_bytes(&self, bytes: &[u8], path: &Path, format_hint: &str) -> Result<(), WriteError> {
        let tmp = temp_path(path);
        // An existing `.part` belongs to someone else; fail without touching it.
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp)?;
        let result = fill_and_publish(file, bytes, &tmp, path);
        // Success leaves the data reachable through `path`, failure discards it.
        let _ = fs::remove_file(&tmp);
        result?;
        tracing::debug!(path = %path.display(), format = format_hint, bytes = bytes.len(), "wrote image");
        Ok(())
    }
}

/// Writes and syncs `file` (opened at `tmp`), then exposes it at `final_path`
/// without ever replacing an existing file there.
fn fill_and_publish(mut file: File, bytes: &[u8], tmp: &Path, final_path: &Path) -> io::Result<()> {
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    match fs::hard_link(tmp, final_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(e),
        // Filesystems without hard links: best-effort check, then rename.
        Err(_) if !final_path.exists() => fs::rename(tmp, final_path),
        Err(e) => Err(e),
    }
}
