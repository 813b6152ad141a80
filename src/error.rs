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
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the abbreviation file and timing logs (src/parser.rs).
#[derive(Error, Debug)]
pub enum ParseError {
  #[error("Source file not found or unreadable: {path}")]
  SourceNotFound {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Malformed record on line {line} ({reason}): {content:?}")]
  MalformedRecord {
    line: usize,
    content: String,
    reason: &'static str,
  },

  #[error("Invalid timestamp '{value}' on line {line}, expected HH:MM:SS.fff")]
  InvalidTimestamp {
    line: usize,
    value: String,
    #[source]
    source: Option<chrono::ParseError>,
  },

  #[error("Driver code '{code}' on line {line} is already taken")]
  DuplicateCode { code: String, line: usize },

  #[error("Failed to parse {path}")]
  InFile {
    path: PathBuf,
    #[source]
    source: Box<ParseError>,
  },
}

/// Errors raised while joining timing entries onto drivers (src/report.rs).
#[derive(Error, Debug)]
pub enum ReportError {
  #[error(transparent)]
  Parse(#[from] ParseError),

  #[error("Driver '{code}' has no {missing} time")]
  IncompleteRecord { code: String, missing: &'static str },
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to extract configuration: {0}")]
  Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
  fn from(err: figment::Error) -> Self {
    ConfigError::Extract(Box::new(err))
  }
}
