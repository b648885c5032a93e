//! Solver entry points that hide the search wiring.

use std::io;

use cspforge_config::{ConfigError, SearchConfig};
use cspforge_core::{Csp, Value};
use cspforge_solver::{SearchBuilder, SearchError, SearchOutcome};
use tracing::warn;

/// Config file read by [`run_solver`].
pub const CONFIG_FILE: &str = "search.toml";

/// Solves `csp` with the propagator, ordering and limits from `config`.
///
/// On return the CSP holds the first solution found, if any.
pub fn solve<V: Value>(
    csp: &mut Csp<V>,
    config: &SearchConfig,
) -> Result<SearchOutcome<V>, SearchError> {
    SearchBuilder::build(config).solve(csp)
}

/// Solves `csp` with the configuration in `search.toml`, falling back to
/// defaults when the file is missing or invalid.
pub fn run_solver<V: Value>(csp: &mut Csp<V>) -> Result<SearchOutcome<V>, SearchError> {
    #[cfg(feature = "console")]
    crate::console::init();

    let config = load_config(CONFIG_FILE);
    solve(csp, &config)
}

fn load_config(path: &str) -> SearchConfig {
    match SearchConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            SearchConfig::default()
        }
        Err(err) => {
            warn!(event = "config_fallback", path, error = %err);
            SearchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cspforge_config::PropagatorType;
    use cspforge_solver::SearchStatus;
    use cspforge_test::csp::triangle_csp;

    #[test]
    fn test_solve_follows_config() {
        let mut csp = triangle_csp(&[1, 2, 3]);
        let config = SearchConfig::new()
            .with_propagator(PropagatorType::Bt)
            .with_all_solutions();
        let outcome = solve(&mut csp, &config).unwrap();
        assert_eq!(outcome.solutions.len(), 6);
        assert_eq!(outcome.status, SearchStatus::Exhausted);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        assert_eq!(
            load_config("does-not-exist/search.toml"),
            SearchConfig::default()
        );
    }

    #[test]
    fn test_unsupported_config_file_uses_defaults() {
        assert_eq!(load_config("search.json"), SearchConfig::default());
    }
}
