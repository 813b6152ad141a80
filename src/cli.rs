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
use crate::driver::SortOrder;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Best-lap leaderboard for a racing event")]
pub struct Cli {
  /// Directory holding abbreviations.txt, start.log and end.log.
  #[arg(long, global = true, env = "LAPBOARD_DATA_DIR")]
  pub data_dir: Option<PathBuf>,

  /// TOML config file. Defaults to ./lapboard.toml when present.
  #[arg(long, global = true)]
  pub config: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Print the leaderboard ranked by best lap, or a single driver's line.
  Report {
    /// Sort direction of the leaderboard.
    #[arg(long, value_enum)]
    order: Option<SortOrder>,

    /// Driver code or part of a name. Prints only that driver.
    #[arg(long)]
    driver: Option<String>,

    /// Emit the leaderboard as JSON instead of text.
    #[arg(long)]
    json: bool,
  },

  /// List drivers by name with their codes, or look one up.
  Drivers {
    /// Sort direction of the name listing.
    #[arg(long, value_enum)]
    order: Option<SortOrder>,

    /// Driver code or part of a name.
    #[arg(long)]
    driver: Option<String>,
  },
}
