use crate::dashboard::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings read from a JSON file. Every field is optional.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(rename = "defaultCity")]
    pub default_city: Option<String>,
    #[serde(rename = "viewMode")]
    pub view_mode: Option<String>,
    pub normalize: Option<bool>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

pub fn parse_config(contents: &str) -> CliResult<DashboardConfig> {
    serde_json::from_str(contents).context(ParsingJsonSnafu {})
}

pub fn read_config(path: &str) -> CliResult<DashboardConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read config: {:?}", contents);
    parse_config(&contents)
}

/// Paths in the configuration file are relative to the directory of the file.
pub fn resolve_config_path(config_dir: Option<&Path>, path: &str) -> String {
    match config_dir {
        Some(dir) => dir.join(path).display().to_string(),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let config = parse_config(
            r#"{
                "defaultCity": "pune-mar-w1",
                "viewMode": "insights",
                "normalize": false,
                "outputPath": "pune.json"
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_city.as_deref(), Some("pune-mar-w1"));
        assert_eq!(config.view_mode.as_deref(), Some("insights"));
        assert_eq!(config.normalize, Some(false));
        assert_eq!(config.output_path.as_deref(), Some("pune.json"));
    }

    #[test]
    fn empty_config() {
        assert_eq!(parse_config("{}").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn malformed_config() {
        let err = parse_config(r#"{"normalize": "yes"}"#).unwrap_err();
        assert!(matches!(err, CliError::ParsingJson { .. }));
    }

    #[test]
    fn relative_paths() {
        assert_eq!(resolve_config_path(None, "a.json"), "a.json");
        assert_eq!(
            resolve_config_path(Some(Path::new("/etc/survey")), "a.json"),
            "/etc/survey/a.json"
        );
        assert_eq!(
            resolve_config_path(Some(Path::new("/etc/survey")), "/tmp/a.json"),
            "/tmp/a.json"
        );
    }
}
