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

//! # Lapboard
//!
//! `lapboard` turns three flat files describing a racing event into a
//! best-lap leaderboard: an abbreviation file (`CODE_Name_Team`) and two
//! timing logs holding each driver's lap start and stop timestamps.
//!
//! This crate contains the main library logic for the `lapboard` CLI, but its
//! core modules (`parser`, `report`, `format`) can be used independently, e.g.
//! behind a web front end.
//!
//! ## Core Modules
//!
//! * [`parser`]: Reads the abbreviation file and the timing logs into
//!   [`driver::DriverRecord`]s and [`parser::TimeEntry`]s.
//! * [`report`]: Joins timing entries onto drivers by code and computes each
//!   best lap. [`report::RaceReport`] owns a built snapshot and can rebuild it.
//! * [`format`]: Ranks, renders and queries a built record set.
//! * [`driver`]: The record, lap time and sort order types.
//! * [`config`]: Layers defaults, `lapboard.toml`, `LAPBOARD_*` env vars and
//!   CLI flags into a `Config`.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod format;
pub mod logging;
pub mod parser;
pub mod report;
