use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::ScriptRateConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".scriptrate.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML document and validate every section.
pub fn parse_and_validate_config(contents: &str) -> Result<ScriptRateConfig> {
    let config: ScriptRateConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Any failure is a configuration error.
pub fn load_config_from_path(path: &Path) -> Result<ScriptRateConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::Configuration(format!("cannot read {}: {e}", path.display())))?;
    let config = parse_and_validate_config(&contents).map_err(|e| match e {
        Error::Configuration(msg) => Error::Configuration(format!("{}: {msg}", path.display())),
        other => Error::Configuration(format!("{}: {other}", path.display())),
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// `start` and up to `max_depth - 1` of its ancestors, nearest first.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn try_load_discovered(path: &Path) -> Option<ScriptRateConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "failed to read config file");
            }
            return None;
        }
    };
    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring invalid config, using defaults");
            None
        }
    }
}

/// Search `start` and its ancestors for the nearest usable config file.
pub fn discover_config(start: &Path) -> Option<ScriptRateConfig> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_discovered(&path))
}

/// Explicit path wins; otherwise discover from the working directory, falling
/// back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<ScriptRateConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(error = %e, "cannot determine working directory, using default config");
            return Ok(ScriptRateConfig::default());
        }
    };
    Ok(discover_config(&current).unwrap_or_else(|| {
        debug!(
            depth = MAX_TRAVERSAL_DEPTH,
            "no config found, using default config"
        );
        ScriptRateConfig::default()
    }))
}
