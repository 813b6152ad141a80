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
use crate::error::ConfigError;
use crate::report::Sources;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Serialized;
use figment::providers::Toml;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lapboard.toml";

/// Prefix for environment overrides, e.g. `LAPBOARD_DATA_DIR`.
pub const ENV_PREFIX: &str = "LAPBOARD_";

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Directory holding the three event files.
  pub data_dir: PathBuf,
  pub abbreviations: String,
  pub start_log: String,
  pub stop_log: String,
  /// Number of drivers above the cutoff line in the ascending report.
  pub cutoff: usize,
  /// Lap-time order of `lapboard report`.
  pub report_order: SortOrder,
  /// Name order of `lapboard drivers`.
  pub drivers_order: SortOrder,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      data_dir: PathBuf::from("./data"),
      abbreviations: "abbreviations.txt".to_string(),
      start_log: "start.log".to_string(),
      stop_log: "end.log".to_string(),
      cutoff: 15,
      report_order: SortOrder::Asc,
      drivers_order: SortOrder::Asc,
    }
  }
}

/// Values given on the command line. Unset fields fall through to the
/// lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data_dir: Option<PathBuf>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub report_order: Option<SortOrder>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub drivers_order: Option<SortOrder>,
}

impl Config {
  /// Layers defaults, the config file, `LAPBOARD_*` env vars and CLI overrides,
  /// in increasing priority.
  ///
  /// An explicitly named config file must exist; the default one is optional.
  pub fn load(config_file: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    figment = match config_file {
      Some(path) => figment.merge(Toml::file_exact(path)),
      None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    };

    let config: Config = figment
      .merge(Env::prefixed(ENV_PREFIX))
      .merge(Serialized::defaults(overrides))
      .extract()?;

    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
  }

  pub fn sources(&self) -> Sources {
    Sources {
      abbreviations: self.data_dir.join(&self.abbreviations),
      start_log: self.data_dir.join(&self.start_log),
      stop_log: self.data_dir.join(&self.stop_log),
    }
  }
}
