//! File I/O utilities with atomic writes
//!
//! Provides safe CSV file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::EnergyError;

/// Open a CSV file for reading, returning `None` if it doesn't exist
///
/// The reader yields every row including the header and tolerates rows of
/// differing length so callers can report the offending line themselves.
pub fn open_csv<P: AsRef<Path>>(path: P) -> Result<Option<csv::Reader<File>>, EnergyError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(EnergyError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    Ok(Some(reader))
}

/// Write a header and records to a CSV file atomically (write to temp, then rename)
///
/// The target is either completely replaced or left as it was.
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], records: &[T]) -> Result<(), EnergyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            EnergyError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live next to the target for the rename to be atomic
    let temp_path = temp_path_for(path);

    let result = write_csv_file(&temp_path, header, records).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| EnergyError::Io(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_csv_file<T: Serialize>(
    path: &Path,
    header: &[&str],
    records: &[T],
) -> Result<(), EnergyError> {
    let file = File::create(path)
        .map_err(|e| EnergyError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(header)?;
    for record in records {
        writer.serialize(record)?;
    }

    let mut file = writer
        .into_inner()
        .map_err(|e| EnergyError::Io(format!("Failed to flush data: {}", e.error())))?;

    file.flush()
        .map_err(|e| EnergyError::Io(format!("Failed to flush data: {}", e)))?;
    file.sync_all()
        .map_err(|e| EnergyError::Io(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
