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
use Commands::Drivers;
use Commands::Report;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use lapboard::cli::Cli;
use lapboard::cli::Commands;
use lapboard::config::Config;
use lapboard::config::Overrides;
use lapboard::logging::setup_tracing;
use lapboard::report::RaceReport;

const NOT_FOUND: &str = "Driver not found";

fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let Cli {
    data_dir,
    config,
    command,
  } = Cli::parse();
  let main_span = tracing::info_span!("lapboard");
  let _enter = main_span.enter();

  let (report_order, drivers_order) = match &command {
    Report { order, .. } => (*order, None),
    Drivers { order, .. } => (None, *order),
  };
  let overrides = Overrides {
    data_dir,
    report_order,
    drivers_order,
  };
  let config = Config::load(config.as_deref(), overrides).context("Failed to load configuration")?;
  let sources = config.sources();

  tracing::info!(data_dir = %config.data_dir.display(), "Building report...");
  let report = RaceReport::build(sources, config.cutoff)
    .with_context(|| format!("Failed to build report from {}", config.data_dir.display()))?;

  match command {
    Report {
      driver: Some(query),
      ..
    }
    | Drivers {
      driver: Some(query),
      ..
    } => {
      println!("{}", report.render_one(&query).as_deref().unwrap_or(NOT_FOUND));
    }
    Report { json: true, .. } => {
      let standings = report.standings(config.report_order);
      println!("{}", serde_json::to_string_pretty(&standings)?);
    }
    Report { .. } => {
      println!("{}", report.render_all(config.report_order));
    }
    Drivers { .. } => {
      for (name, code) in report.list_names(config.drivers_order) {
        println!("{name} {code}");
      }
    }
  }

  Ok(())
}
