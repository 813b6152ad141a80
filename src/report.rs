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
use crate::driver::LapTime;
use crate::driver::SortOrder;
use crate::error::ReportError;
use crate::format;
use crate::parser::TimeEntry;
use crate::parser::load_drivers;
use crate::parser::load_time_log;
use chrono::NaiveTime;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

/// Resolved locations of the three input files for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
  pub abbreviations: PathBuf,
  pub start_log: PathBuf,
  pub stop_log: PathBuf,
}

/// Joins start and stop entries onto `records` and computes each best lap.
///
/// Entries whose code has no driver are ignored. If a code appears more than
/// once in a log, the later line wins. Every driver must end up with both a
/// start and a stop time, otherwise the build fails with
/// [`ReportError::IncompleteRecord`] and `records` is left untouched.
pub fn build_report(
  records: &mut [DriverRecord],
  start_log: &[TimeEntry],
  stop_log: &[TimeEntry],
) -> Result<(), ReportError> {
  let index: HashMap<&str, usize> = records
    .iter()
    .enumerate()
    .map(|(i, record)| (record.code.as_str(), i))
    .collect();

  let mut times: Vec<(Option<NaiveTime>, Option<NaiveTime>)> = records
    .iter()
    .map(|record| (record.start_time, record.stop_time))
    .collect();

  for entry in start_log {
    match index.get(entry.code.as_str()) {
      Some(&i) => times[i].0 = Some(entry.time),
      None => tracing::debug!(code = %entry.code, "Ignoring start entry with unknown code"),
    }
  }

  for entry in stop_log {
    match index.get(entry.code.as_str()) {
      Some(&i) => times[i].1 = Some(entry.time),
      None => tracing::debug!(code = %entry.code, "Ignoring stop entry with unknown code"),
    }
  }

  let mut laps = Vec::with_capacity(records.len());
  for (record, &(start, stop)) in records.iter().zip(&times) {
    let (mut start, mut stop) = match (start, stop) {
      (Some(start), Some(stop)) => (start, stop),
      (None, _) => return Err(incomplete(record, "start")),
      (_, None) => return Err(incomplete(record, "stop")),
    };

    if start > stop {
      tracing::debug!(code = %record.code, "Start logged after stop, swapping");
      std::mem::swap(&mut start, &mut stop);
    }
    laps.push((start, stop));
  }

  for (record, (start, stop)) in records.iter_mut().zip(laps) {
    record.start_time = Some(start);
    record.stop_time = Some(stop);
    record.best_lap = Some(LapTime::between(start, stop));
  }

  Ok(())
}

/// Reads both timing logs from disk and runs [`build_report`] with them.
pub fn build_report_from_files(
  records: &mut [DriverRecord],
  start_path: &Path,
  stop_path: &Path,
) -> Result<(), ReportError> {
  let start_log = load_time_log(start_path)?;
  let stop_log = load_time_log(stop_path)?;
  build_report(records, &start_log, &stop_log)
}

fn incomplete(record: &DriverRecord, missing: &'static str) -> ReportError {
  ReportError::IncompleteRecord {
    code: record.code.clone(),
    missing,
  }
}

/// An owned snapshot of a built report.
///
/// Rebuilding parses every source file again and replaces the whole record
/// set, so a snapshot handed out earlier is never mutated underneath a reader.
#[derive(Debug, Clone)]
pub struct RaceReport {
  sources: Sources,
  cutoff: usize,
  records: Vec<DriverRecord>,
}

impl RaceReport {
  pub fn build(sources: Sources, cutoff: usize) -> Result<Self, ReportError> {
    let records = Self::load(&sources)?;
    Ok(RaceReport {
      sources,
      cutoff,
      records,
    })
  }

  pub fn rebuild(&mut self) -> Result<(), ReportError> {
    self.records = Self::load(&self.sources)?;
    Ok(())
  }

  fn load(sources: &Sources) -> Result<Vec<DriverRecord>, ReportError> {
    let mut records = load_drivers(&sources.abbreviations)?;
    build_report_from_files(&mut records, &sources.start_log, &sources.stop_log)?;
    tracing::info!(drivers = records.len(), "Report built");
    Ok(records)
  }

  pub fn records(&self) -> &[DriverRecord] {
    &self.records
  }

  pub fn standings(&self, order: SortOrder) -> format::Standings {
    format::format_all(&self.records, order, self.cutoff)
  }

  pub fn render_all(&self, order: SortOrder) -> String {
    self.standings(order).to_string()
  }

  pub fn render_one(&self, query: &str) -> Option<String> {
    format::format_one(&self.records, query).map(DriverRecord::statistics)
  }

  pub fn list_names(&self, order: SortOrder) -> Vec<(&str, &str)> {
    format::list_by_name(&self.records, order)
  }
}
