//! Platform-specific paths for user scenarios.
//!
//! - Linux: `~/.config/fourier/scenarios/`
//! - macOS: `~/Library/Application Support/fourier/scenarios/`
//! - Windows: `%APPDATA%\fourier\scenarios\`
//!
//! # Example
//!
//! ```rust,no_run
//! use fourier_config::paths;
//!
//! println!("User scenarios: {:?}", paths::user_scenarios_dir());
//!
//! if let Some(path) = paths::find_scenario("my_scenario") {
//!     println!("Found scenario at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::{ConfigError, Scenario, get_factory_scenario};

/// Application name used for directory paths.
const APP_NAME: &str = "fourier";

/// Subdirectory name for scenarios.
const SCENARIOS_SUBDIR: &str = "scenarios";

/// Returns the user-specific configuration directory.
///
/// Falls back to the current directory if the platform has no config dir.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user-specific scenarios directory.
pub fn user_scenarios_dir() -> PathBuf {
    user_config_dir().join(SCENARIOS_SUBDIR)
}

/// Find a scenario file by path or name.
///
/// `name` may be a path to an existing file, or a scenario name (with or
/// without `.toml`) looked up in the user scenarios directory.
pub fn find_scenario(name: &str) -> Option<PathBuf> {
    find_scenario_in(&user_scenarios_dir(), name)
}

/// Like [`find_scenario`], searching `dir` instead of the user directory.
pub fn find_scenario_in(dir: &Path, name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// Resolve a scenario by file path, user scenario name, or factory name,
/// in that order.
///
/// # Errors
///
/// [`ConfigError::ScenarioNotFound`] if nothing matches, or the load error
/// of a matching file that fails to parse.
pub fn resolve_scenario(name: &str) -> Result<Scenario, ConfigError> {
    if let Some(path) = find_scenario(name) {
        return Scenario::load(path);
    }
    get_factory_scenario(name).ok_or_else(|| ConfigError::ScenarioNotFound(name.to_string()))
}

/// Ensure the user scenarios directory exists and return it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_scenarios_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_scenarios_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// List `.toml` files in the user scenarios directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_scenarios() -> Vec<PathBuf> {
    list_scenarios_in_dir(&user_scenarios_dir())
}

/// List `.toml` files in `dir`, sorted by path.
pub fn list_scenarios_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut found: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    found.sort();
    found
}

/// Scenario name from a file path (the file stem).
///
/// # Example
///
/// ```rust
/// use fourier_config::paths::scenario_name_from_path;
/// use std::path::Path;
///
/// let name = scenario_name_from_path(Path::new("/path/to/beating.toml"));
/// assert_eq!(name, Some("beating".to_string()));
/// ```
pub fn scenario_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}
