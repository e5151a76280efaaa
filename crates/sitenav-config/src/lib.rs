//! Navigation configuration loading.
//!
//! Parses `navbar.toml` or `navbar.yaml` files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Link values support environment variable expansion (`${VAR}`,
//! `${VAR:-default}`) before validation, so CI can inject an external
//! base URL into absolute links.
//!
//! ## File schema
//!
//! ```toml
//! navbar = [
//!     "/",
//!     { text = "Get Started", icon = "lightbulb", link = "/get-started/" },
//! ]
//!
//! [locales.zh]
//! navbar = [
//!     "/",
//!     { text = "快速入门", icon = "lightbulb", link = "/get-started/" },
//! ]
//! ```

mod expand;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitenav::{LocaleNavbars, Navbar, NavbarError, NavbarItem};

/// TOML configuration filename to search for.
const TOML_FILENAME: &str = "navbar.toml";
/// YAML configuration filename to search for.
const YAML_FILENAME: &str = "navbar.yaml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Navbar configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    ParseToml(#[from] toml::de::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    /// File extension is neither `.toml` nor `.yaml`/`.yml`.
    #[error("Unsupported navbar config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A navbar sequence violated its invariants.
    #[error("Invalid {scope} navbar: {source}")]
    Navbar {
        /// Which sequence failed (`"default"` or `"locales.<code>"`).
        scope: String,
        /// The underlying validation error.
        #[source]
        source: NavbarError,
    },
    /// Environment variable error during link expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. "`navbar[2].link`").
        field: String,
        /// Error message (e.g. "${`DOCS_BASE_URL`} not set").
        message: String,
    },
}

/// Raw navbar file contents as parsed from TOML or YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NavbarFileRaw {
    /// Default navbar entry sequence.
    navbar: Vec<NavbarItem>,
    /// Per-locale sections.
    locales: HashMap<String, LocaleSectionRaw>,
}

/// Raw per-locale section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LocaleSectionRaw {
    navbar: Vec<NavbarItem>,
}

/// Loaded and validated navbar configuration.
///
/// Built once at load time; read-only thereafter.
#[derive(Debug, Default)]
pub struct NavbarConfig {
    /// Validated navbars with per-locale variants.
    navbars: LocaleNavbars,
    /// Path to the config file (None when defaults are used).
    config_path: Option<PathBuf>,
}

impl NavbarConfig {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `navbar.toml` or `navbar.yaml` in the current
    /// directory and parents, falling back to an empty configuration
    /// when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or
    /// if parsing, expansion, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        if let Some(discovered) = Self::discover_config() {
            return Self::load_from_file(&discovered);
        }

        tracing::debug!("No navbar config found, using empty navbar");
        Ok(Self::default())
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing, expansion, or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: NavbarFileRaw = toml::from_str(content)?;
        Self::from_raw(raw, None)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing, expansion, or validation fails.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: NavbarFileRaw = serde_yaml::from_str(content)?;
        Self::from_raw(raw, None)
    }

    /// Validated navbars with per-locale variants.
    #[must_use]
    pub fn navbars(&self) -> &LocaleNavbars {
        &self.navbars
    }

    /// Resolve the navbar for a locale (see [`LocaleNavbars::get`]).
    #[must_use]
    pub fn navbar(&self, locale: &str) -> &Navbar {
        self.navbars.get(locale)
    }

    /// Path the configuration was loaded from, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from a specific file, dispatching on extension.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let raw: NavbarFileRaw = match extension {
            "toml" => toml::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let config = Self::from_raw(raw, Some(path.to_path_buf()))?;
        tracing::debug!(path = %path.display(), "Loaded navbar configuration");
        Ok(config)
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_in(&current)
    }

    /// Search for a config file from `start` upward.
    ///
    /// TOML is preferred when both filenames exist in one directory.
    fn discover_in(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for filename in [TOML_FILENAME, YAML_FILENAME] {
                let candidate = current.join(filename);
                if candidate.exists() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Expand and validate raw file contents.
    fn from_raw(raw: NavbarFileRaw, config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let default = build_navbar(raw.navbar, "default")?;

        let mut locales = HashMap::with_capacity(raw.locales.len());
        for (code, section) in raw.locales {
            let scope = format!("locales.{code}");
            let navbar = build_navbar(section.navbar, &scope)?;
            locales.insert(code, navbar);
        }

        Ok(Self {
            navbars: LocaleNavbars::new(default, locales),
            config_path,
        })
    }
}

/// Expand link environment variables, then validate the sequence.
///
/// Expansion runs before validation so that expanded values are checked
/// for emptiness and uniqueness.
fn build_navbar(items: Vec<NavbarItem>, scope: &str) -> Result<Navbar, ConfigError> {
    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let field = format!("{scope}.navbar[{index}].link");
            let link = expand::expand_env(item.target(), &field)?;
            Ok(item.with_target(link))
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Navbar::new(items).map_err(|source| ConfigError::Navbar {
        scope: scope.to_owned(),
        source,
    })
}
