// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::driver::DriverRecord;
use crate::error::ParseError;
use chrono::NaiveTime;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.f";
const CODE_LEN: usize = 3;
const MAX_FRACTION_DIGITS: usize = 6;

/// A single line of a start or stop log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
  pub code: String,
  pub time: NaiveTime,
}

/// Reads and parses the abbreviation file at `path`.
pub fn load_drivers(path: &Path) -> Result<Vec<DriverRecord>, ParseError> {
  let content = read_source(path)?;
  let drivers = parse_abbreviations(&content).map_err(|e| in_file(path, e))?;
  tracing::info!(path = %path.display(), count = drivers.len(), "Loaded drivers");
  Ok(drivers)
}

/// Reads and parses a start or stop log at `path`.
pub fn load_time_log(path: &Path) -> Result<Vec<TimeEntry>, ParseError> {
  let content = read_source(path)?;
  let entries = parse_time_log(&content).map_err(|e| in_file(path, e))?;
  tracing::debug!(path = %path.display(), count = entries.len(), "Loaded time log");
  Ok(entries)
}

/// Parses `CODE_Name_Team` lines into fresh, un-timed driver records.
pub fn parse_abbreviations(source: &str) -> Result<Vec<DriverRecord>, ParseError> {
  let mut seen = HashSet::new();
  let mut drivers = Vec::new();

  for (idx, line) in source.lines().enumerate() {
    let parts: Vec<&str> = line.split('_').collect();

    let [code, name, team] = parts.as_slice() else {
      return Err(ParseError::MalformedRecord {
        line: idx + 1,
        content: line.to_string(),
        reason: "expected CODE_Name_Team",
      });
    };

    let code = code.trim();
    if code.chars().count() != CODE_LEN {
      return Err(ParseError::MalformedRecord {
        line: idx + 1,
        content: line.to_string(),
        reason: "driver code must be 3 characters",
      });
    }

    if !seen.insert(code.to_string()) {
      return Err(ParseError::DuplicateCode {
        code: code.to_string(),
        line: idx + 1,
      });
    }

    drivers.push(DriverRecord::new(code, name.trim(), team.trim()));
  }

  Ok(drivers)
}

/// Parses `CODE..._HH:MM:SS.fff` lines, skipping blank ones.
///
/// The code is the first three characters of the line and the timestamp is
/// everything after the first underscore, so a date between the two is ignored.
pub fn parse_time_log(source: &str) -> Result<Vec<TimeEntry>, ParseError> {
  let mut entries = Vec::new();

  for (idx, line) in source.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }

    let Some((_, raw_time)) = line.split_once('_') else {
      return Err(ParseError::MalformedRecord {
        line: idx + 1,
        content: line.to_string(),
        reason: "missing '_' before timestamp",
      });
    };

    let raw_time = raw_time.trim_end();
    let invalid = |source: Option<chrono::ParseError>| ParseError::InvalidTimestamp {
      line: idx + 1,
      value: raw_time.to_string(),
      source,
    };

    if !is_timestamp_shaped(raw_time) {
      return Err(invalid(None));
    }
    let time =
      NaiveTime::parse_from_str(raw_time, TIMESTAMP_FORMAT).map_err(|e| invalid(Some(e)))?;

    entries.push(TimeEntry {
      code: line.chars().take(CODE_LEN).collect(),
      time,
    });
  }

  Ok(entries)
}

/// `HH:MM:SS.f` with two-digit clock fields and 1 to 6 fraction digits.
///
/// chrono alone accepts a missing fraction and leading whitespace, so the shape
/// is checked before the values are.
fn is_timestamp_shaped(raw: &str) -> bool {
  let Some((clock, fraction)) = raw.split_once('.') else {
    return false;
  };

  let clock_ok = clock.len() == 8
    && clock.bytes().enumerate().all(|(i, b)| match i {
      2 | 5 => b == b':',
      _ => b.is_ascii_digit(),
    });
  let fraction_ok = (1..=MAX_FRACTION_DIGITS).contains(&fraction.len())
    && fraction.bytes().all(|b| b.is_ascii_digit());

  clock_ok && fraction_ok
}

fn read_source(path: &Path) -> Result<String, ParseError> {
  fs::read_to_string(path).map_err(|source| ParseError::SourceNotFound {
    path: path.to_path_buf(),
    source,
  })
}

fn in_file(path: &Path, err: ParseError) -> ParseError {
  ParseError::InFile {
    path: path.to_path_buf(),
    source: Box::new(err),
  }
}
