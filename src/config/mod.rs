#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::{LogFormat, TomlConfig, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT};

/// Settings the server runs with after CLI flags, the TOML file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u32,
    pub log_level: String,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl ServiceConfig {
    /// 以 TOML 設定覆蓋預設值
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: file.host().map(str::to_string).unwrap_or(defaults.host),
            port: file.port().unwrap_or(defaults.port),
            log_level: file.log_level().map(str::to_string).unwrap_or(defaults.log_level),
            log_format: file.log_format().unwrap_or(defaults.log_format),
            verbose: false,
        }
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut config = Self::from_toml(&file);
        if let Some(host) = &cli.host {
            config.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(format) = cli.log_format {
            config.log_format = format;
        }
        config.verbose = cli.verbose;

        config.validate()?;
        Ok(config)
    }

    /// `host:port`, bracketing IPv6 literals.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_host("host", &self.host)?;
        validation::validate_range("port", self.port, 1, 65535)?;
        validation::validate_non_empty_string("log_level", &self.log_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let file = TomlConfig::from_toml_str("[server]\nport = 9090\n").unwrap();
        let config = ServiceConfig::from_toml(&file);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_ipv6_bind_address() {
        let config = ServiceConfig {
            host: "::1".to_string(),
            ..ServiceConfig::default()
        };
        assert_eq!(config.bind_address(), "[::1]:8000");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file() {
        use clap::Parser;
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 9000\n\n[logging]\nformat = \"json\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["ciphers-service", "--config", &path, "--port", "7000"]);
        let config = ServiceConfig::load(&cli).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7000);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_port_zero() {
        use clap::Parser;

        let cli = CliConfig::parse_from(["ciphers-service", "--port", "0"]);
        assert!(ServiceConfig::load(&cli).is_err());
    }
}
