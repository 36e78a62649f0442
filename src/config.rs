//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, the config file, `CHATUI_`
//! environment variables, command line flags.

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::ui::UiSettings;

/// Default site title shown in the document `<title>` and the navbar.
pub const DEFAULT_TITLE: &str = "Chat UI";

/// Href of the stylesheet served out of the static directory.
pub const STYLESHEET_HREF: &str = "/static/app.css";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Interface to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub title: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

impl UiConfig {
    /// Settings handed to every page render.
    pub fn settings(&self) -> UiSettings {
        UiSettings {
            title: self.title.clone(),
            stylesheet: STYLESHEET_HREF.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("ui.title", DEFAULT_TITLE)?
            .set_default("ui.static_dir", "static")?;

        // An explicit file must exist; the cwd fallback is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. CHATUI_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("CHATUI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }
}
