//! Process list input.
//!
//! # Format
//!
//! One process per line, two whitespace-separated fields: arrival time
//! and burst time. Fields are non-negative decimals made of digits and
//! at most one `.`; fractional values are rounded up. Processes are numbered
//! in file order starting at 0. The first blank or one-character line
//! ends the list.
//!
//! ```text
//! 0 5
//! 0 3
//! 2.5 4
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{ProcessRecord, Ticks};

/// Reads and parses a process list from `path`.
pub fn read_processes(path: impl AsRef<Path>) -> Result<Vec<ProcessRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_processes(&text)?;
    log::info!("loaded {} processes from '{}'", records.len(), path.display());
    Ok(records)
}

/// Parses a process list.
///
/// # Errors
/// `Error::Parse` for a line without exactly two fields, a field that is
/// not a non-negative decimal, or a burst time that rounds to 0.
/// `Error::EmptyInput` when no process precedes the terminating line.
pub fn parse_processes(text: &str) -> Result<Vec<ProcessRecord>> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if ends_input(line) {
            if text.lines().skip(line_no).any(|l| !l.trim().is_empty()) {
                log::warn!("line {line_no} ends the list; ignoring the lines after it");
            }
            break;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [arrival, burst] = fields.as_slice() else {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected 2 fields (arrival burst), found {}", fields.len()),
            });
        };

        let arrival_time = parse_time(arrival, "arrival time", line_no)?;
        let burst_time = parse_time(burst, "burst time", line_no)?;
        if burst_time == 0 {
            return Err(Error::Parse {
                line: line_no,
                message: "burst time must be greater than 0".to_string(),
            });
        }

        records.push(ProcessRecord::new(records.len(), arrival_time, burst_time));
    }

    if records.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(records)
}

/// A blank line, or one holding a single character, terminates the list.
fn ends_input(line: &str) -> bool {
    line.trim().chars().count() <= 1
}

/// Parses a non-negative decimal and rounds it up to whole ticks.
fn parse_time(field: &str, name: &str, line: usize) -> Result<Ticks> {
    let invalid = || Error::Parse {
        line,
        message: format!("{name} '{field}' is not a non-negative number"),
    };

    let (whole, fraction) = match field.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (field, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let value: Ticks = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let round_up = fraction.bytes().any(|b| b != b'0');

    if round_up {
        value.checked_add(1).ok_or_else(invalid)
    } else {
        Ok(value)
    }
}
