//! Application configuration.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults,
//! 2. an optional TOML file (path given without extension, `config` by default),
//! 3. environment variables `POSTBOARD__<SECTION>__<KEY>`, e.g.
//!    `POSTBOARD__SERVER__PORT=9000`.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;

/// Default config file name, resolved relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config";

const ENV_PREFIX: &str = "POSTBOARD";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Request bodies larger than this are refused with `413`.
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory served for paths that match no route.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Config {
    /// Loads configuration from `path` (extension optional), the environment
    /// and defaults. A missing file is not an error.
    pub fn load_from(path: &str) -> Result<Self, Error> {
        Self::load_with_env(path, None)
    }

    /// Like [`load_from`](Config::load_from), reading `POSTBOARD__*` keys
    /// from `env` instead of the process environment when it is given.
    fn load_with_env(path: &str, env: Option<config::Map<String, String>>) -> Result<Self, Error> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.max_body_bytes", 1024 * 1024)?
            .set_default("assets.dir", "public")?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// The address the server listens on.
    pub fn listen_addr(&self) -> Result<SocketAddr, Error> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|source| Error::Addr { addr, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let cfg = Config::load_from("does/not/exist").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.max_body_bytes, 1024 * 1024);
        assert_eq!(cfg.assets.dir, PathBuf::from("public"));
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.listen_addr().unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postboard.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[assets]\ndir = \"static\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.assets.dir, PathBuf::from("static"));
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postboard.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let env = config::Map::from([
            ("POSTBOARD__SERVER__PORT".to_owned(), "9100".to_owned()),
            ("POSTBOARD__ASSETS__DIR".to_owned(), "www".to_owned()),
            ("OTHER__SERVER__PORT".to_owned(), "1".to_owned()),
        ]);
        let cfg = Config::load_with_env(path.to_str().unwrap(), Some(env)).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.assets.dir, PathBuf::from("www"));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn bad_host_is_reported() {
        let mut cfg = Config::load_from("does/not/exist").unwrap();
        cfg.server.host = "not a host".into();
        assert!(matches!(cfg.listen_addr(), Err(Error::Addr { .. })));
    }
}
