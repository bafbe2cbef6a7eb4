//! Runtime configuration.
//!
//! Values come from command-line flags, then environment variables, then defaults:
//!
//! | flag        | env              | default                    |
//! |-------------|------------------|----------------------------|
//! | `--port`    | `PORT`           | `3000`                     |
//! | `--source`  | `D2_DOCS_SOURCE` | `../d2lang-llms-full.txt`  |
//! | `--cache`   | `D2_DOCS_CACHE`  | `documentation.txt`        |
//! | `--stdio`   |                  | off (serve HTTP)           |

use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SOURCE_PATH: &str = "../d2lang-llms-full.txt";
pub const DEFAULT_CACHE_PATH: &str = "documentation.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub stdio: bool,
    /// Original documentation file, read when the cache is empty.
    pub source_path: PathBuf,
    /// Service-local copy of the documentation.
    pub cache_path: PathBuf,
}

impl ServerConfig {
    /// Reads the process arguments and environment.
    pub fn from_env_and_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    pub fn parse<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut port: Option<String> = None;
        let mut source: Option<String> = None;
        let mut cache: Option<String> = None;
        let mut stdio = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--stdio" => {
                    stdio = true;
                    i += 1;
                }
                flag @ ("--port" | "--source" | "--cache") => {
                    let value = args
                        .get(i + 1)
                        .cloned()
                        .ok_or_else(|| anyhow!("{} requires a value", flag))?;
                    match flag {
                        "--port" => port = Some(value),
                        "--source" => source = Some(value),
                        _ => cache = Some(value),
                    }
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let port = match port.or_else(|| env("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid port: {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            stdio,
            source_path: source
                .or_else(|| env("D2_DOCS_SOURCE"))
                .unwrap_or_else(|| DEFAULT_SOURCE_PATH.to_string())
                .into(),
            cache_path: cache
                .or_else(|| env("D2_DOCS_CACHE"))
                .unwrap_or_else(|| DEFAULT_CACHE_PATH.to_string())
                .into(),
        })
    }

    /// HTTP listen address (all interfaces).
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::parse(&[], no_env).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert!(!config.stdio);
        assert_eq!(config.source_path, PathBuf::from(DEFAULT_SOURCE_PATH));
        assert_eq!(config.cache_path, PathBuf::from(DEFAULT_CACHE_PATH));
    }

    #[test]
    fn test_flags_override_env() {
        let env: HashMap<&str, &str> = [("PORT", "4000"), ("D2_DOCS_CACHE", "/tmp/env.txt")].into();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let config = ServerConfig::parse(
            &args(&["--stdio", "--port", "5000", "--source", "docs/full.txt"]),
            lookup,
        )
        .unwrap();

        assert!(config.stdio);
        assert_eq!(config.port, 5000);
        assert_eq!(config.source_path, PathBuf::from("docs/full.txt"));
        assert_eq!(config.cache_path, PathBuf::from("/tmp/env.txt"));
    }

    #[test]
    fn test_env_port() {
        let config = ServerConfig::parse(&[], |key| (key == "PORT").then(|| "8081".to_string())).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.bind_addr().port(), 8081);
    }

    #[test]
    fn test_missing_flag_value_is_error() {
        let err = ServerConfig::parse(&args(&["--cache"]), no_env).unwrap_err();
        assert!(err.to_string().contains("--cache requires a value"));
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(ServerConfig::parse(&args(&["--port", "http"]), no_env).is_err());
        assert!(ServerConfig::parse(&args(&["--port", "70000"]), no_env).is_err());
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let config = ServerConfig::parse(&args(&["--verbose", "--stdio"]), no_env).unwrap();
        assert!(config.stdio);
    }
}
