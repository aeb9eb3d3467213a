//! Reading raw log files from disk.
//!
//! A log file is one message per line. Lines are numbered from 1 and blank
//! lines are skipped; everything else is kept verbatim as the message text,
//! with timestamps derived later from the message itself.

use crate::model::{InputError, LogLine};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a log file into lines attributed to one device.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist and
/// `InputError::Io` for other read failures.
pub fn read_log_file(path: impl AsRef<Path>, device_id: &str) -> Result<Vec<LogLine>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut logs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let mut log = LogLine::new(device_id, line);
        log.id = Some(index as u64 + 1);
        log.time = log.effective_time();
        logs.push(log);
    }

    Ok(logs)
}
