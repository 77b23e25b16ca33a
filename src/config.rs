use crate::errors::{AppError, Result};
use crate::render::Charset;
use crate::tree::parse_name_list;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`; every field is optional and CLI flags win
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub theme: Option<String>,
    pub exclude: Vec<String>,
    pub charset: Option<Charset>,
    pub reset_collapse: Option<bool>,
    pub default_excludes: Option<bool>,
}

/// Default location: `<config dir>/ziptree/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ziptree").join("config.toml"))
}

impl FileConfig {
    /// Load the config.
    ///
    /// An explicitly requested file must exist and parse. The default file is
    /// optional and a broken one only produces a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let content = std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("cannot read {}: {}", path.display(), e))
            })?;
            return Self::parse(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)));
        }

        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        if !path.is_file() {
            return Ok(Self::default());
        }

        match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::parse(&content))
        {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    /// Parse TOML text into settings
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: toml::Value = toml::from_str(content).map_err(|e| e.to_string())?;
        let table = value
            .as_table()
            .ok_or_else(|| "expected a table".to_string())?;

        let mut config = Self::default();

        if let Some(theme) = table.get("theme") {
            let theme = theme
                .as_str()
                .ok_or_else(|| "`theme` must be a string".to_string())?;
            config.theme = Some(theme.to_string());
        }

        match table.get("exclude") {
            None => {}
            Some(toml::Value::String(csv)) => config.exclude = parse_name_list(csv),
            Some(toml::Value::Array(items)) => {
                for item in items {
                    let name = item
                        .as_str()
                        .ok_or_else(|| "`exclude` entries must be strings".to_string())?;
                    config.exclude.extend(parse_name_list(name));
                }
            }
            Some(_) => return Err("`exclude` must be a string or an array".to_string()),
        }

        if let Some(charset) = table.get("charset") {
            let name = charset
                .as_str()
                .ok_or_else(|| "`charset` must be a string".to_string())?;
            config.charset = Some(
                Charset::parse(name).ok_or_else(|| format!("unknown charset '{}'", name))?,
            );
        }

        config.reset_collapse = read_bool(table, "reset_collapse")?;
        config.default_excludes = read_bool(table, "default_excludes")?;

        Ok(config)
    }
}

fn read_bool(table: &toml::value::Table, key: &str) -> std::result::Result<Option<bool>, String> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_bool()
            .map(Some)
            .ok_or_else(|| format!("`{}` must be true or false", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::parse(
            r#"
theme = "blueprint"
exclude = ["dist", "coverage, tmp"]
charset = "ascii"
reset_collapse = false
default_excludes = true
"#,
        )
        .unwrap();

        assert_eq!(config.theme.as_deref(), Some("blueprint"));
        assert_eq!(config.exclude, vec!["dist", "coverage", "tmp"]);
        assert_eq!(config.charset, Some(Charset::Ascii));
        assert_eq!(config.reset_collapse, Some(false));
        assert_eq!(config.default_excludes, Some(true));
    }

    #[test]
    fn test_exclude_as_string() {
        let config = FileConfig::parse(r#"exclude = "build, out""#).unwrap();
        assert_eq!(config.exclude, vec!["build", "out"]);
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_type_errors() {
        assert!(FileConfig::parse("theme = 3").is_err());
        assert!(FileConfig::parse("reset_collapse = \"yes\"").is_err());
        assert!(FileConfig::parse("charset = \"ebcdic\"").is_err());
        assert!(FileConfig::parse("exclude = 1").is_err());
        assert!(FileConfig::parse("not toml [").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "theme = \"dark\"\n").unwrap();

        let config = FileConfig::load(Some(&path)).unwrap();
        assert_eq!(config.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = FileConfig::load(Some(&temp.path().join("missing.toml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
