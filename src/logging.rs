// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Logging configuration
//!
//! Routes `tracing` output to stderr so that stdout stays clean for
//! receipts printed by the `watch` and `preview` commands. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialises the global subscriber
///
/// # Behaviour
/// - Default: INFO+ for everything
/// - `verbose`: DEBUG+ for this crate, INFO+ for dependencies
/// - `RUST_LOG` set: used as-is
///
/// Calling this twice keeps the first subscriber.
pub fn init(verbose: bool) {
    let filter_directive = if verbose {
        "info,thermal_print_monitor=debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .try_init()
        .is_err()
    {
        eprintln!("Logging already initialised");
    }
}
