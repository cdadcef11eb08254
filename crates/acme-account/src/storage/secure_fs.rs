//! Owner-only directory and file creation.
//!
//! Permissions are applied when the directory or file is created, never by
//! a later `chmod`, so secret material is not readable by others at any
//! point. On non-Unix targets the platform defaults apply.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Mode for the configuration directory.
pub const PRIVATE_DIR_MODE: u32 = 0o700;
/// Mode for account and key files.
pub const PRIVATE_FILE_MODE: u32 = 0o600;

/// How a private file is opened for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file, or truncate an existing one.
    Replace,
    /// Fail with `AlreadyExists` if the file is present.
    CreateNew,
}

/// Create `dir` and any missing parents with owner-only access.
///
/// Existing directories are left untouched.
pub fn create_private_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(PRIVATE_DIR_MODE);
    builder.create(dir)
}

/// Write `data` to `path`, creating the file with owner-only read/write.
///
/// With `CreateNew`, a file that was created but could not be filled is
/// removed again, so the path never holds a partial write.
pub fn write_private(path: &Path, data: &[u8], mode: WriteMode) -> io::Result<()> {
    let mut file = open_private(path, mode)?;
    let filled = fill(&mut file, data);
    match mode {
        WriteMode::Replace => filled,
        WriteMode::CreateNew => discard_on_error(path, filled),
    }
}

/// Replace `path` with `data` through a sibling temp file and a rename.
///
/// Readers see either the old contents or the new ones, and the new file is
/// owner-only from the moment it exists.
pub fn write_private_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp_path = tmp_sibling(path);

    // A stale temp file may carry other permissions; start from scratch.
    match fs::remove_file(&tmp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    write_private(&tmp_path, data, WriteMode::CreateNew)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    Ok(())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn open_private(path: &Path, mode: WriteMode) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    match mode {
        WriteMode::Replace => {
            options.create(true).truncate(true);
        }
        WriteMode::CreateNew => {
            options.create_new(true);
        }
    }
    #[cfg(unix)]
    options.mode(PRIVATE_FILE_MODE);
    options.open(path)
}

fn fill(file: &mut File, data: &[u8]) -> io::Result<()> {
    file.write_all(data)?;
    file.sync_all()
}

fn discard_on_error(path: &Path, result: io::Result<()>) -> io::Result<()> {
    if result.is_err() {
        let _ = fs::remove_file(path);
    }
    result
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
