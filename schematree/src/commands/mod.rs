mod completions;

use std::{path::PathBuf, time::Duration};

use clap::{CommandFactory, Parser, error::ErrorKind};
use eyre::Result;
use miette::Diagnostic;
use schematree_client::{ControllerConfig, DEFAULT_TIMEOUT};
use schematree_model::{DEFAULT_PATH, SchemaPath};
use schematree_render::{Output, RenderOptions, SchemaTreeDisplay, TerminalOutput};

use crate::{config::ConfigFile, source::SchemaSource};

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "schematree")]
#[command(version)]
#[command(about = "Show a controller's REST schema as an indented tree")]
pub(crate) struct Cli {
    /// Dotted schema path, e.g. controller.core.switch
    #[arg(default_value = DEFAULT_PATH)]
    pub path: String,

    /// Controller host, host:port, or base URL
    #[arg(short = 'H', long, conflicts_with = "file")]
    pub host: Option<String>,

    /// User to log in as
    #[arg(short, long = "user", value_name = "USER", conflicts_with = "file")]
    pub username: Option<String>,

    /// Password to log in with
    #[arg(short, long, env = "SCHEMATREE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Read the schema from a JSON file instead of a controller
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Deepest level to show (the root is level 0)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Show descriptions, config markers and every enum value
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the schema document as JSON instead of a tree
    #[arg(short, long)]
    pub raw: bool,

    /// Accept invalid TLS certificates from the controller
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to the config file (defaults to ./schematree.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<tracing::Level>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        if let Some(shell) = self.completions {
            return completions::run(shell);
        }

        let config = ConfigFile::load(self.config.as_deref()).unwrap_or_exit();
        let path = SchemaPath::from_dotted(&self.path);
        let source = self.source(&config).unwrap_or_else(|missing| {
            Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    format!(
                        "{} required to fetch from a controller (or pass --file)",
                        missing.join(", ")
                    ),
                )
                .exit()
        });

        let document = source.load(&path)?;
        let mut out = TerminalOutput::new();

        if self.raw {
            return match out.line(&document.to_pretty_json()?) {
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                other => Ok(other?),
            };
        }

        let root = document.root().unwrap_or_exit();
        let rendered = SchemaTreeDisplay::new(&root, path.as_str())
            .options(self.render_options(&config))
            .render_to(&mut out);
        match rendered {
            Err(e) if e.is_broken_pipe() => Ok(()),
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
            Ok(()) => Ok(()),
        }
    }

    /// Pick the schema source, or list the settings missing for a controller.
    fn source(&self, config: &ConfigFile) -> std::result::Result<SchemaSource, Vec<&'static str>> {
        if let Some(file) = &self.file {
            return Ok(SchemaSource::File(file.clone()));
        }

        let section = &config.controller;
        let host = self.host.clone().or_else(|| section.host.clone());
        let username = self.username.clone().or_else(|| section.username.clone());
        let password = self.password.clone().or_else(|| section.password.clone());

        match (host, username, password) {
            (Some(host), Some(username), Some(password)) => {
                let timeout = self
                    .timeout
                    .or(section.timeout)
                    .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
                Ok(SchemaSource::Controller(
                    ControllerConfig::new(host, username, password)
                        .insecure(self.insecure || section.insecure.unwrap_or(false))
                        .timeout(timeout),
                ))
            }
            (host, username, password) => Err([
                (host.is_none(), "--host"),
                (username.is_none(), "--user"),
                (password.is_none(), "--password"),
            ]
            .into_iter()
            .filter_map(|(missing, flag)| missing.then_some(flag))
            .collect()),
        }
    }

    fn render_options(&self, config: &ConfigFile) -> RenderOptions {
        RenderOptions::new()
            .max_depth(self.max_depth.or(config.render.max_depth))
            .verbose(self.verbose || config.render.verbose.unwrap_or(false))
    }
}
