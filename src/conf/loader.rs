use super::model::ConfigurationModel;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Names a config file explicitly, bypassing the search below.
pub const CONFIG_PATH_ENV: &str = "LSH_CONFIG";

/// Load the user's configuration file, falling back to defaults when absent or invalid.
pub fn load() -> ConfigurationModel {
    match locate(|name| env::var_os(name)) {
        Some(path) => load_from(&path),
        None => ConfigurationModel::default(),
    }
}

/// Find the config file to read.
///
/// A non-empty `$LSH_CONFIG` is used as given (a leading `~` is expanded), even
/// if the file is missing, so the failure gets reported. Otherwise the first
/// existing file among `$XDG_CONFIG_HOME/lsh/config.yaml`,
/// `~/.config/lsh/config.yaml` and `~/.lshrc` wins.
fn locate(var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let home = var("HOME").filter(|home| !home.is_empty()).map(PathBuf::from);

    if let Some(explicit) = var(CONFIG_PATH_ENV).filter(|path| !path.is_empty()) {
        return Some(expand_home(Path::new(&explicit), home.as_deref()));
    }

    candidates(var("XDG_CONFIG_HOME").map(PathBuf::from), home)
        .into_iter()
        .find(|path| path.is_file())
}

fn candidates(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(xdg) = xdg_config_home.filter(|dir| dir.is_absolute()) {
        paths.push(xdg.join("lsh").join("config.yaml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".config").join("lsh").join("config.yaml"));
        paths.push(home.join(".lshrc"));
    }
    paths
}

/// Replace a leading `~` component with `home`. `~user` forms are left alone.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Load a specific configuration file. Problems are reported as warnings, never as errors.
pub fn load_from(path: &Path) -> ConfigurationModel {
    match fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(mut cfg) => {
                cfg.set_source_path(path.to_path_buf());
                cfg
            }
            Err(err) => {
                eprintln!(
                    "Warning: unable to parse config file '{}': {err}",
                    path.display()
                );
                ConfigurationModel::default()
            }
        },
        Err(err) => {
            eprintln!(
                "Warning: unable to read config file '{}': {err}",
                path.display()
            );
            ConfigurationModel::default()
        }
    }
}

/// Parse configuration YAML. An empty document yields the defaults.
pub fn parse(contents: &str) -> Result<ConfigurationModel, serde_yaml::Error> {
    if contents.trim().is_empty() {
        return Ok(ConfigurationModel::default());
    }
    serde_yaml::from_str(contents)
}
