// LogTally - platform/fs.rs
//
// Filesystem access for the input log.

use crate::util::constants;
use crate::util::error::InputError;
use std::io;
use std::path::Path;

/// Read the full content of a log file as a string.
///
/// Invalid UTF-8 is replaced rather than rejected, so one corrupt byte does
/// not cost the whole file. Files above `MAX_INPUT_FILE_SIZE` are refused.
pub fn read_log_file(path: &Path) -> Result<String, InputError> {
    read_log_file_capped(path, constants::MAX_INPUT_FILE_SIZE)
}

pub(crate) fn read_log_file_capped(path: &Path, max_size: u64) -> Result<String, InputError> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Log file loaded"
    );

    Ok(content)
}

/// Split file content into lines, accepting `\n`, `\r\n` and a lone `\r`
/// as terminators. A terminator at the very end does not start an extra
/// empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let line = &rest[..idx];
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

fn io_error(path: &Path, source: io::Error) -> InputError {
    if source.kind() == io::ErrorKind::NotFound {
        InputError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
