//! Whole-file load and save of a record store.

use crate::codec::{decode_line, encode_line};
use crate::error::{PersistError, Result};
use roster_storage::RecordStore;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Writes every record to `path`, one line each, replacing the file.
///
/// Lines written before a failure stay on disk.
pub fn save(path: impl AsRef<Path>, store: &RecordStore) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: io::Error| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    for record in store {
        writeln!(writer, "{}", encode_line(record)).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    info!(path = %path.display(), records = store.len(), "saved student records");
    Ok(())
}

/// Reads a record store from `path`.
///
/// A missing file yields an empty store. Lines with fewer than five fields
/// are skipped and the rest of the file still loads.
pub fn load(path: impl AsRef<Path>) -> Result<RecordStore> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file yet, starting empty");
            return Ok(RecordStore::new());
        }
        Err(source) => {
            return Err(PersistError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut store = RecordStore::new();
    let mut skipped = 0usize;

    for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
        let bytes = line.map_err(|source| PersistError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if text.trim().is_empty() {
            continue;
        }
        match decode_line(&text) {
            Some(record) => store.append(record),
            None => {
                skipped += 1;
                debug!(path = %path.display(), line = index + 1, "skipping malformed record line");
            }
        }
    }

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "some record lines could not be parsed");
    }
    info!(path = %path.display(), records = store.len(), "loaded student records");
    Ok(store)
}

/// Returns true if `path` can be opened for reading.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    File::open(path).is_ok()
}
