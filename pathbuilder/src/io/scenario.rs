//! Scenario files: a serialized path plus the app state it resolves against.
//!
//! ```toml
//! [state]
//! logged_in = true
//! account = 11
//!
//! [[path]]
//! screen = "home"
//!
//! [[path]]
//! screen = "detail"
//! item = 2
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::screens::{AppState, ScreenSpec};

/// Longest path a scenario may describe.
pub const MAX_PATH_LEN: usize = 32;

/// Scenario file (TOML). Missing fields default: no state table means logged
/// out, no `path` entries means an empty path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Scenario {
    pub state: AppState,
    pub path: Vec<ScreenSpec>,
}

impl Scenario {
    pub fn validate(&self) -> Result<()> {
        if self.path.len() > MAX_PATH_LEN {
            return Err(anyhow!(
                "path has {} entries, at most {} allowed",
                self.path.len(),
                MAX_PATH_LEN
            ));
        }
        for (index, screen) in self.path.iter().enumerate() {
            if let ScreenSpec::Detail { item: 0 } = screen {
                return Err(anyhow!("path[{}]: detail item must be > 0", index));
            }
        }
        Ok(())
    }
}

/// Scenario written by `pathbuilder init`.
pub fn example_scenario() -> Scenario {
    Scenario {
        state: AppState {
            logged_in: true,
            account: Some(11),
            ..AppState::default()
        },
        path: vec![ScreenSpec::Home, ScreenSpec::Detail { item: 2 }],
    }
}

/// Load and validate a scenario from a TOML file.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    debug!(path = %path.display(), "loading scenario");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let scenario: Scenario =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    scenario
        .validate()
        .with_context(|| format!("invalid scenario {}", path.display()))?;
    debug!(depth = scenario.path.len(), "scenario loaded");
    Ok(scenario)
}

/// Atomically write a scenario to disk (temp file + rename).
pub fn write_scenario(path: &Path, scenario: &Scenario) -> Result<()> {
    let buf = render_scenario(scenario)?;
    write_atomic(path, &buf)
}

/// Write a scenario to a path that must not exist yet.
///
/// The existence check and the create are one `create_new` open, so a file
/// appearing concurrently is never replaced.
pub fn create_scenario(path: &Path, scenario: &Scenario) -> Result<()> {
    let buf = render_scenario(scenario)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| {
            format!(
                "{} already exists or cannot be created (use --force to overwrite)",
                path.display()
            )
        })?;
    file.write_all(buf.as_bytes())
        .with_context(|| format!("write scenario {}", path.display()))?;
    Ok(())
}

fn render_scenario(scenario: &Scenario) -> Result<String> {
    scenario.validate()?;
    let mut buf = toml::to_string_pretty(scenario).context("serialize scenario toml")?;
    if !buf.ends_with('\n') {
        buf.push('\n');
    }
    Ok(buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp scenario {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace scenario {}", path.display()))?;
    Ok(())
}
