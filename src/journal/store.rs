//! On-disk journal file: whole-file read, append and replace.

use super::codec::{Decoder, encode};
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Entries decoded before the first failure, plus that failure.
#[derive(Debug, Default)]
pub struct Loaded {
    pub entries: Vec<Entry>,
    pub error: Option<AppError>,
}

#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory holding the journal, including parents.
    pub fn ensure_dir(&self) -> AppResult<()> {
        let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        fs::create_dir_all(dir).map_err(|source| AppError::CacheDir {
            path: dir.display().to_string(),
            source,
        })
    }

    /// Read the journal up to the first malformed entry.
    /// A missing file is an empty journal.
    pub fn load(&self) -> Loaded {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Loaded::default(),
            Err(e) => {
                return Loaded {
                    entries: Vec::new(),
                    error: Some(e.into()),
                };
            }
        };

        let mut loaded = Loaded::default();
        for item in Decoder::new(BufReader::new(file)) {
            match item {
                Ok(e) => loaded.entries.push(e),
                Err(e) => {
                    loaded.error = Some(e);
                    break;
                }
            }
        }
        loaded
    }

    /// Strict variant of [`LogStore::load`]: any malformed entry is an error.
    pub fn read_all(&self) -> AppResult<Vec<Entry>> {
        let loaded = self.load();
        match loaded.error {
            Some(e) => Err(e),
            None => Ok(loaded.entries),
        }
    }

    /// Append entries to the journal, creating it (mode 0644) if needed.
    pub fn append_all(&self, entries: &[Entry]) -> AppResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut opts = OpenOptions::new();
        opts.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o644);
        }

        let file = opts.open(&self.path)?;
        write_entries(BufWriter::new(file), entries)
    }

    /// Replace the whole journal with `entries`.
    ///
    /// The new content goes to a temporary file next to the journal which is
    /// then renamed over it.
    pub fn replace_all(&self, entries: &[Entry]) -> AppResult<()> {
        self.ensure_dir()?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        write_entries(BufWriter::new(tmp.as_file_mut()), entries)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }
}

fn write_entries<W: Write>(mut w: W, entries: &[Entry]) -> AppResult<()> {
    for e in entries {
        w.write_all(encode(e).as_bytes())?;
    }
    w.flush()?;
    Ok(())
}
