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
use chrono::NaiveTime;
use chrono::TimeDelta;
use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;
use std::fmt;

/// One competitor, keyed by a short code shared with the timing logs.
///
/// The timestamps and `best_lap` stay empty until the record has been
/// passed through [`crate::report::build_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
  pub code: String,
  pub name: String,
  pub team: String,
  pub start_time: Option<NaiveTime>,
  pub stop_time: Option<NaiveTime>,
  pub best_lap: Option<LapTime>,
}

impl DriverRecord {
  pub fn new(code: impl Into<String>, name: impl Into<String>, team: impl Into<String>) -> Self {
    DriverRecord {
      code: code.into(),
      name: name.into(),
      team: team.into(),
      start_time: None,
      stop_time: None,
      best_lap: None,
    }
  }

  /// Renders `name | team | lap` with the fixed column widths of the report.
  pub fn statistics(&self) -> String {
    let lap = match self.best_lap {
      Some(lap) => lap.to_string(),
      None => "-".to_string(),
    };
    format!("{:<20} | {:<25} | {}", self.name, self.team, lap)
  }
}

/// Elapsed time of a single lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LapTime(TimeDelta);

impl LapTime {
  /// Time between two wall-clock stamps, whichever comes first.
  pub fn between(a: NaiveTime, b: NaiveTime) -> Self {
    let (start, stop) = if a > b { (b, a) } else { (a, b) };
    LapTime(stop.signed_duration_since(start))
  }

  /// Negative input is clamped to zero.
  pub fn from_millis(millis: i64) -> Self {
    LapTime(TimeDelta::milliseconds(millis.max(0)))
  }

  /// Whole milliseconds, sub-millisecond digits truncated.
  pub fn as_millis(&self) -> i64 {
    self.0.num_milliseconds()
  }
}

impl fmt::Display for LapTime {
  /// `H:MM:SS.mmm`
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let total = self.as_millis();
    let millis = total % 1_000;
    let seconds = (total / 1_000) % 60;
    let minutes = (total / 60_000) % 60;
    let hours = total / 3_600_000;
    write!(f, "{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
  }
}

impl Serialize for LapTime {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// Direction of a sorted listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  #[default]
  Asc,
  Desc,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f").unwrap()
  }

  #[test]
  fn lap_time_renders_fixed_width_fields() {
    assert_eq!(LapTime::from_millis(1_500).to_string(), "0:00:01.500");
    assert_eq!(LapTime::from_millis(64_415).to_string(), "0:01:04.415");
    assert_eq!(LapTime::from_millis(3_723_004).to_string(), "1:02:03.004");
  }

  #[test]
  fn lap_time_keeps_zero_millis() {
    assert_eq!(LapTime::from_millis(72_000).to_string(), "0:01:12.000");
    assert_eq!(LapTime::from_millis(0).to_string(), "0:00:00.000");
  }

  #[test]
  fn lap_time_is_never_negative() {
    assert_eq!(LapTime::from_millis(-1_500), LapTime::from_millis(0));
    assert_eq!(LapTime::from_millis(-1_500).to_string(), "0:00:00.000");
  }

  #[test]
  fn lap_time_truncates_sub_millisecond_digits() {
    let lap = LapTime::between(time("12:00:00"), time("12:00:01.123999"));
    assert_eq!(lap.to_string(), "0:00:01.123");
  }

  #[test]
  fn between_is_order_independent() {
    let a = time("12:02:58.917");
    let b = time("12:04:03.332");
    assert_eq!(LapTime::between(a, b), LapTime::between(b, a));
    assert_eq!(LapTime::between(a, b).as_millis(), 64_415);
  }

  #[test]
  fn statistics_pads_columns() {
    let mut driver = DriverRecord::new("SVF", "Sebastian Vettel", "FERRARI");
    assert_eq!(
      driver.statistics(),
      "Sebastian Vettel     | FERRARI                   | -"
    );
    driver.best_lap = Some(LapTime::from_millis(64_415));
    assert_eq!(
      driver.statistics(),
      "Sebastian Vettel     | FERRARI                   | 0:01:04.415"
    );
  }

  #[test]
  fn lap_time_serializes_as_display_string() {
    let json = serde_json::to_string(&LapTime::from_millis(1_500)).unwrap();
    assert_eq!(json, r#""0:00:01.500""#);
  }
}
