//! Optional `schematree.toml` defaults.
//!
//! ```toml
//! [controller]
//! host = "ctrl.example.net"
//! username = "admin"
//! password = "secret"
//! insecure = true
//! timeout = 30
//!
//! [render]
//! max_depth = 3
//! verbose = false
//! ```
//!
//! Command line flags override anything set here.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "schematree.toml";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass an existing file to --config, or omit it"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file")]
    #[diagnostic(code(schematree::config_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Parsed config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub controller: ControllerSection,

    #[serde(default)]
    pub render: RenderSection,
}

/// `[controller]` connection defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerSection {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub insecure: Option<bool>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// `[render]` defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    pub max_depth: Option<usize>,
    pub verbose: Option<bool>,
}

impl ConfigFile {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read from the current directory if present, and defaults are used
    /// otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<ConfigError>> {
        let path = match explicit {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
            None => {
                tracing::debug!("no config file, using defaults");
                return Ok(Self::default());
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config content, naming the file for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self, Box<ConfigError>> {
        toml::from_str(content).map_err(|source: toml::de::Error| {
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span: source.span().map(SourceSpan::from),
                source,
            })
        })
    }
}
