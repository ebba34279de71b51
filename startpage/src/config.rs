use std::fs;
use std::path::PathBuf;

use owm_client::Units;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window title.
    pub title: String,
    pub weather: WeatherConfig,
    pub search: SearchConfig,
    /// Ordered bookmark list; rendered top to bottom.
    pub bookmarks: Vec<Bookmark>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Startpage".to_string(),
            weather: WeatherConfig::default(),
            search: SearchConfig::default(),
            bookmarks: default_bookmarks(),
        }
    }
}

/// Settings for the weather widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Provider API key; leave empty to disable the fetch.
    pub api_key: String,
    /// Location query, e.g. "Gdansk" or "Gdansk,PL".
    pub location: String,
    /// "metric", "imperial" or "standard".
    pub units: Units,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            location: "Gdansk".to_string(),
            units: Units::Metric,
        }
    }
}

/// Settings for the search widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// URL prefix the query gets appended to.
    pub engine_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: "https://duckduckgo.com/?q=".to_string(),
        }
    }
}

/// A single bookmark entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

fn default_bookmarks() -> Vec<Bookmark> {
    [
        ("GitHub", "https://github.com"),
        ("Hacker News", "https://news.ycombinator.com"),
        ("Lobsters", "https://lobste.rs"),
        ("Wikipedia", "https://wikipedia.org"),
        ("YouTube", "https://youtube.com"),
    ]
    .into_iter()
    .map(|(name, url)| Bookmark {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/startpage/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("startpage").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; read, parse, and
    /// validation failures are reported as typed errors.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.location.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "weather.location must not be empty".to_string(),
            });
        }

        if self.search.engine_url.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "search.engine_url must not be empty".to_string(),
            });
        }

        for bookmark in &self.bookmarks {
            if bookmark.name.trim().is_empty() || bookmark.url.trim().is_empty() {
                return Err(ConfigError::Validation {
                    message: format!(
                        "bookmark '{}' must have both a name and a url",
                        bookmark.name
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.bookmarks.is_empty());
        assert_eq!(config.title, "Startpage");
    }

    #[test]
    fn parses_full_config() {
        let content = r#"
            title = "Home"

            [weather]
            api_key = "secret"
            location = "Gdansk,PL"
            units = "imperial"

            [search]
            engine_url = "https://www.startpage.com/do/search?query="

            [[bookmarks]]
            name = "crates.io"
            url = "https://crates.io"

            [[bookmarks]]
            name = "docs.rs"
            url = "https://docs.rs"
        "#;

        let config: Config = toml::from_str(content).unwrap();
        config.validate().unwrap();

        assert_eq!(config.title, "Home");
        assert_eq!(config.weather.api_key, "secret");
        assert_eq!(config.weather.units, Units::Imperial);
        let names: Vec<&str> = config.bookmarks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["crates.io", "docs.rs"]);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("title = \"Home\"").unwrap();
        assert_eq!(config.weather.location, "Gdansk");
        assert_eq!(config.weather.units, Units::Metric);
        assert_eq!(config.bookmarks, default_bookmarks());
    }

    #[test]
    fn preserves_bookmark_order() {
        let content = r#"
            [[bookmarks]]
            name = "b"
            url = "https://b.example"

            [[bookmarks]]
            name = "a"
            url = "https://a.example"

            [[bookmarks]]
            name = "c"
            url = "https://c.example"
        "#;

        let config: Config = toml::from_str(content).unwrap();
        let names: Vec<&str> = config.bookmarks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn rejects_blank_location() {
        let mut config = Config::default();
        config.weather.location = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn rejects_bookmark_without_url() {
        let mut config = Config::default();
        config.bookmarks.push(Bookmark {
            name: "broken".to_string(),
            url: String::new(),
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn rejects_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("title = ");
        assert!(result.is_err());
    }
}
