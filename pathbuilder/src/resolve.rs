//! Resolution helpers for `pathbuilder resolve`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::app::screens::shared_state;
use crate::app::tree::{View, app_builder};
use crate::io::scenario::{Scenario, load_scenario};
use crate::nav::navigator::Navigator;

/// Structured resolution outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Every path entry produced a view, root first.
    Resolved(Vec<View>),
    /// Only the first `views.len()` entries were claimed; `unclaimed` entries
    /// above them produced nothing.
    Partial { views: Vec<View>, unclaimed: usize },
    /// No builder claimed the path under the scenario's state.
    NoMatch,
}

/// Replay a scenario's path through the demo navigator and build once.
pub fn resolve_scenario(scenario: &Scenario) -> ResolveOutcome {
    let mut navigator = Navigator::new(app_builder(shared_state(scenario.state)));
    for screen in &scenario.path {
        screen.push_onto(&mut navigator);
    }
    match navigator.recompute() {
        Some(views) if views.len() < scenario.path.len() => {
            let unclaimed = scenario.path.len() - views.len();
            warn!(depth = scenario.path.len(), unclaimed, "path partially resolved");
            ResolveOutcome::Partial { views, unclaimed }
        }
        Some(views) => {
            info!(depth = scenario.path.len(), views = views.len(), "path resolved");
            ResolveOutcome::Resolved(views)
        }
        None => {
            info!(depth = scenario.path.len(), "path not claimed by any builder");
            ResolveOutcome::NoMatch
        }
    }
}

/// Load a scenario from disk and resolve it.
pub fn resolve_from_file(path: &Path) -> Result<ResolveOutcome> {
    let scenario = load_scenario(path).with_context(|| "load scenario for resolution")?;
    Ok(resolve_scenario(&scenario))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::{AppState, ScreenSpec};
    use crate::io::scenario::{example_scenario, write_scenario};

    #[test]
    fn example_resolves_to_home_and_detail() {
        assert_eq!(
            resolve_scenario(&example_scenario()),
            ResolveOutcome::Resolved(vec![View::Home, View::Detail { item: 2 }])
        );
    }

    #[test]
    fn empty_path_is_no_match() {
        let scenario = Scenario {
            state: AppState {
                logged_in: true,
                ..AppState::default()
            },
            path: Vec::new(),
        };
        assert_eq!(resolve_scenario(&scenario), ResolveOutcome::NoMatch);
    }

    #[test]
    fn premium_unlocks_items_past_free_limit() {
        let mut scenario = Scenario {
            state: AppState {
                logged_in: true,
                free_items: 1,
                ..AppState::default()
            },
            path: vec![ScreenSpec::Home, ScreenSpec::Detail { item: 2 }],
        };
        assert_eq!(
            resolve_scenario(&scenario),
            ResolveOutcome::Resolved(vec![View::Home, View::Paywall { item: 2 }])
        );

        scenario.state.premium = true;
        assert_eq!(
            resolve_scenario(&scenario),
            ResolveOutcome::Resolved(vec![View::Home, View::Detail { item: 2 }])
        );
    }

    #[test]
    fn deep_paths_resolve_every_entry() {
        let scenario = Scenario {
            state: AppState {
                logged_in: true,
                ..AppState::default()
            },
            path: vec![
                ScreenSpec::Home,
                ScreenSpec::Detail { item: 1 },
                ScreenSpec::Settings,
                ScreenSpec::Detail { item: 9 },
            ],
        };
        assert_eq!(
            resolve_scenario(&scenario),
            ResolveOutcome::Resolved(vec![
                View::Home,
                View::Detail { item: 1 },
                View::SignedOutSettings,
                View::Paywall { item: 9 },
            ])
        );
    }

    #[test]
    fn unclaimed_entries_are_reported() {
        let scenario = Scenario {
            state: AppState {
                logged_in: true,
                ..AppState::default()
            },
            path: vec![
                ScreenSpec::Home,
                ScreenSpec::Detail { item: 1 },
                ScreenSpec::Login,
                ScreenSpec::Settings,
            ],
        };
        assert_eq!(
            resolve_scenario(&scenario),
            ResolveOutcome::Partial {
                views: vec![View::Home, View::Detail { item: 1 }],
                unclaimed: 2,
            }
        );
    }

    #[test]
    fn resolve_from_file_reads_scenario() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("scenario.toml");
        write_scenario(&path, &example_scenario()).expect("write");
        let outcome = resolve_from_file(&path).expect("resolve");
        assert!(matches!(outcome, ResolveOutcome::Resolved(_)));
    }

    #[test]
    fn resolve_from_missing_file_errors() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(resolve_from_file(&temp.path().join("missing.toml")).is_err());
    }
}
