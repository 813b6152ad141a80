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
use serde::Serialize;
use std::fmt;

const SEPARATOR_WIDTH: usize = 60;

/// One ranked line of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
  pub rank: usize,
  pub code: String,
  pub name: String,
  pub team: String,
  pub lap: LapTime,
}

impl fmt::Display for StandingRow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{:2}. {:<20} | {:<25} | {}",
      self.rank, self.name, self.team, self.lap
    )
  }
}

/// Ordered leaderboard rows plus where, if anywhere, the cutoff line goes.
///
/// `separator_after` counts rows, not ranks: `Some(15)` means the line is
/// drawn between the 15th and 16th row as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
  pub rows: Vec<StandingRow>,
  pub separator_after: Option<usize>,
}

impl fmt::Display for Standings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, row) in self.rows.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{row}")?;
      if self.separator_after == Some(i + 1) {
        write!(f, "\n{}", "-".repeat(SEPARATOR_WIDTH))?;
      }
    }
    Ok(())
  }
}

/// Ranks `records` by best lap.
///
/// Ties keep their input order. Ranks are always the ascending positions, so
/// a descending listing counts down from the slowest driver. The cutoff line
/// only appears in ascending order and only when more than `cutoff` drivers
/// are ranked. Records without a lap are left out.
pub fn format_all(records: &[DriverRecord], order: SortOrder, cutoff: usize) -> Standings {
  let mut timed: Vec<(&DriverRecord, LapTime)> = records
    .iter()
    .filter_map(|record| record.best_lap.map(|lap| (record, lap)))
    .collect();
  timed.sort_by_key(|(_, lap)| *lap);

  let mut rows: Vec<StandingRow> = timed
    .into_iter()
    .enumerate()
    .map(|(i, (record, lap))| StandingRow {
      rank: i + 1,
      code: record.code.clone(),
      name: record.name.clone(),
      team: record.team.clone(),
      lap,
    })
    .collect();

  let separator_after = match order {
    SortOrder::Asc if cutoff > 0 && rows.len() > cutoff => Some(cutoff),
    SortOrder::Asc => None,
    SortOrder::Desc => {
      rows.reverse();
      None
    }
  };

  Standings {
    rows,
    separator_after,
  }
}

/// Finds the first driver whose code equals `query` or whose name contains
/// it, ignoring case. A blank query matches nobody.
pub fn format_one<'a>(records: &'a [DriverRecord], query: &str) -> Option<&'a DriverRecord> {
  let query = query.trim().to_lowercase();
  if query.is_empty() {
    return None;
  }

  records
    .iter()
    .find(|record| record.code.to_lowercase() == query || record.name.to_lowercase().contains(&query))
}

/// `(name, code)` pairs sorted by name.
pub fn list_by_name(records: &[DriverRecord], order: SortOrder) -> Vec<(&str, &str)> {
  let mut names: Vec<(&str, &str)> = records
    .iter()
    .map(|record| (record.name.as_str(), record.code.as_str()))
    .collect();
  match order {
    SortOrder::Asc => names.sort_by(|a, b| a.0.cmp(b.0)),
    SortOrder::Desc => names.sort_by(|a, b| b.0.cmp(a.0)),
  }
  names
}

#[cfg(test)]
mod tests {
  use super::*;

  fn driver(code: &str, name: &str, team: &str, millis: i64) -> DriverRecord {
    let mut record = DriverRecord::new(code, name, team);
    record.best_lap = Some(LapTime::from_millis(millis));
    record
  }

  fn field(count: usize) -> Vec<DriverRecord> {
    (0..count)
      .map(|i| {
        driver(
          &format!("D{i:02}"),
          &format!("Driver {i:02}"),
          "TEAM",
          // reverse of input order, so sorting has work to do
          60_000 + (count - i) as i64 * 100,
        )
      })
      .collect()
  }

  fn rendered(standings: &Standings) -> Vec<String> {
    standings.to_string().lines().map(str::to_string).collect()
  }

  #[test]
  fn row_uses_fixed_columns() {
    let standings = format_all(
      &[driver("SVF", "Sebastian Vettel", "FERRARI", 64_415)],
      SortOrder::Asc,
      15,
    );
    assert_eq!(
      standings.to_string(),
      " 1. Sebastian Vettel     | FERRARI                   | 0:01:04.415"
    );
  }

  #[test]
  fn ascending_inserts_separator_after_cutoff() {
    let standings = format_all(&field(19), SortOrder::Asc, 15);
    assert_eq!(standings.separator_after, Some(15));

    let lines = rendered(&standings);
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[15], "-".repeat(60));
    assert!(lines[14].starts_with("15. "));
    assert!(lines[16].starts_with("16. "));
  }

  #[test]
  fn no_separator_at_or_below_cutoff() {
    for count in [0, 3, 15] {
      let standings = format_all(&field(count), SortOrder::Asc, 15);
      assert_eq!(standings.separator_after, None);
      assert_eq!(rendered(&standings).len(), count);
    }

    let lines = rendered(&format_all(&field(16), SortOrder::Asc, 15));
    assert_eq!(lines.len(), 17);
  }

  #[test]
  fn descending_reverses_ranked_rows_without_separator() {
    let records = field(19);
    let ascending = rendered(&format_all(&records, SortOrder::Asc, 15));
    let descending = rendered(&format_all(&records, SortOrder::Desc, 15));

    let mut expected: Vec<String> = ascending
      .into_iter()
      .filter(|line| !line.starts_with('-'))
      .collect();
    expected.reverse();

    assert_eq!(descending, expected);
    assert!(descending[0].starts_with("19. "));
  }

  #[test]
  fn ties_keep_input_order() {
    let records = vec![
      driver("AAA", "First", "T", 1_000),
      driver("BBB", "Second", "T", 500),
      driver("CCC", "Third", "T", 1_000),
    ];
    let standings = format_all(&records, SortOrder::Asc, 15);
    let codes: Vec<&str> = standings.rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["BBB", "AAA", "CCC"]);
  }

  #[test]
  fn untimed_records_are_not_ranked() {
    let records = vec![
      driver("AAA", "First", "T", 1_000),
      DriverRecord::new("BBB", "Second", "T"),
    ];
    let standings = format_all(&records, SortOrder::Asc, 15);
    assert_eq!(standings.rows.len(), 1);
  }

  #[test]
  fn finds_driver_by_code_or_name_ignoring_case() {
    let records = vec![
      driver("SVF", "Sebastian Vettel", "FERRARI", 64_415),
      driver("LHM", "Lewis Hamilton", "MERCEDES", 73_323),
    ];

    assert_eq!(format_one(&records, "svf").map(|r| r.code.as_str()), Some("SVF"));
    assert_eq!(format_one(&records, "LhM").map(|r| r.code.as_str()), Some("LHM"));
    assert_eq!(format_one(&records, "HAMIL").map(|r| r.code.as_str()), Some("LHM"));
    assert_eq!(format_one(&records, "e").map(|r| r.code.as_str()), Some("SVF"));
  }

  #[test]
  fn code_match_is_exact_and_misses_are_none() {
    let records = vec![driver("SVF", "Sebastian Vettel", "FERRARI", 64_415)];
    assert!(format_one(&records, "sv").is_none());
    assert!(format_one(&records, "Kimi").is_none());
    assert!(format_one(&records, "  ").is_none());
  }

  #[test]
  fn lists_names_in_either_direction() {
    let records = vec![
      driver("SVF", "Sebastian Vettel", "FERRARI", 1),
      driver("FAM", "Fernando Alonso", "MCLAREN", 2),
      driver("LHM", "Lewis Hamilton", "MERCEDES", 3),
    ];

    assert_eq!(
      list_by_name(&records, SortOrder::Asc),
      vec![
        ("Fernando Alonso", "FAM"),
        ("Lewis Hamilton", "LHM"),
        ("Sebastian Vettel", "SVF"),
      ]
    );
    assert_eq!(list_by_name(&records, SortOrder::Desc)[0], ("Sebastian Vettel", "SVF"));
  }

  #[test]
  fn drivers_sharing_a_name_keep_input_order_in_both_directions() {
    let records = vec![
      driver("BBB", "Same", "T", 1),
      driver("AAA", "Same", "T", 2),
      driver("ZZZ", "Alpha", "T", 3),
    ];

    assert_eq!(
      list_by_name(&records, SortOrder::Asc),
      vec![("Alpha", "ZZZ"), ("Same", "BBB"), ("Same", "AAA")]
    );
    assert_eq!(
      list_by_name(&records, SortOrder::Desc),
      vec![("Same", "BBB"), ("Same", "AAA"), ("Alpha", "ZZZ")]
    );
  }

  #[test]
  fn standings_serialize_with_separator_directive() {
    let standings = format_all(&field(16), SortOrder::Asc, 15);
    let json = serde_json::to_value(&standings).unwrap();
    assert_eq!(json["separator_after"], 15);
    assert_eq!(json["rows"][0]["rank"], 1);
    assert_eq!(json["rows"][0]["lap"], "0:01:00.100");
  }
}
