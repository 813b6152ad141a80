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
use anyhow::Result;
use std::env;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Names a file, relative to the working directory, that receives the log.
pub const LOG_FILE_ENV: &str = "LAPBOARD_LOG_FILE";

/// Installs the global subscriber for the `lapboard` binary.
///
/// Stdout is reserved for the leaderboard and driver listings, so diagnostics
/// go to stderr, or to the file named by [`LOG_FILE_ENV`]. In the file case the
/// returned guard flushes buffered lines when dropped, so hold it until exit.
///
/// `RUST_LOG` picks the level; `debug` shows the per-driver join decisions.
pub fn setup_tracing() -> Result<Option<WorkerGuard>> {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let registry = tracing_subscriber::registry().with(env_filter);

  match env::var(LOG_FILE_ENV) {
    Ok(log_file) if !log_file.is_empty() => {
      let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(".", log_file));
      registry
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;
      Ok(Some(guard))
    }
    _ => {
      registry
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
      Ok(None)
    }
  }
}
