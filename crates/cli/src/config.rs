use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use mprov_core::error::MprovError;

const CONFIG_PATH: &str = "~/.mprov/config.toml";

pub const DEFAULT_MASTER: &str = "10.101.202.1";

/// Optional defaults read from ~/.mprov/config.toml. A missing file just
/// means built-in defaults; a file that fails to parse is an error.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub master: Option<String>,
    pub https: Option<bool>,
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

pub fn parse_config() -> Result<Config, MprovError> {
    let config_path = expand_tilde(CONFIG_PATH);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .map_err(|e| MprovError::from(format!("Failed to read config file: {}", e)))?;

    toml::from_str(&config_content)
        .map_err(|e| MprovError::from(format!("Failed to parse config file: {}", e)))
}

/// Resolve the effective master address and scheme. Explicit CLI flags win
/// over config file values, which win over built-in defaults. The https flag
/// can only be turned on, never off, from the command line.
pub fn resolve(cli_master: Option<String>, cli_https: bool, config: Config) -> (String, bool) {
    let master = cli_master
        .or(config.master)
        .unwrap_or_else(|| DEFAULT_MASTER.to_string());
    let https = cli_https || config.https.unwrap_or(false);
    (master, https)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_builtin_default() {
        let (master, https) = resolve(None, false, Config::default());
        assert_eq!(master, "10.101.202.1");
        assert!(!https);
    }

    #[test]
    fn resolve_prefers_config_over_default() {
        let config = Config {
            master: Some("master.example.org".to_string()),
            https: Some(true),
        };
        let (master, https) = resolve(None, false, config);
        assert_eq!(master, "master.example.org");
        assert!(https);
    }

    #[test]
    fn resolve_prefers_cli_flags_over_config() {
        let config = Config {
            master: Some("master.example.org".to_string()),
            https: Some(false),
        };
        let (master, https) = resolve(Some("10.0.0.9".to_string()), true, config);
        assert_eq!(master, "10.0.0.9");
        assert!(https);
    }
}
