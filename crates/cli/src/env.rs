// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Format config file from DURFMT_CONFIG, if set to a non-empty path.
pub fn config_path() -> Option<PathBuf> {
    let value = std::env::var("DURFMT_CONFIG").ok()?;
    if value.trim().is_empty() {
        tracing::warn!("DURFMT_CONFIG is set but empty, using built-in defaults");
        return None;
    }
    Some(PathBuf::from(value))
}

/// Log filter directives from DURFMT_LOG.
pub fn log_filter() -> Option<String> {
    std::env::var("DURFMT_LOG").ok().filter(|s| !s.is_empty())
}
