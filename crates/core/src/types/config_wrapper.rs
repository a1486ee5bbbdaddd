use eyre::{Result, WrapErr, eyre};
use log::debug;
use serde::Deserialize;
use std::path::Path;
use std::{env, fs};
use toml::Value;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct SigningConfig {
    pub domain_name: Option<String>,
    pub domain_version: Option<String>,
    pub scheme: Option<String>,
}

pub struct ConfigWrapper {
    raw_config: Value,
}

impl ConfigWrapper {
    pub fn new(raw_config: Value) -> Self {
        Self { raw_config }
    }

    pub fn empty() -> Self {
        Self::new(Value::Table(Default::default()))
    }

    /// An explicitly named file must exist. Without one, `config.toml` in the
    /// working directory is used if present and an empty config otherwise.
    pub fn from_file(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => DEFAULT_CONFIG_PATH,
            None => return Ok(Self::empty()),
        };
        debug!("Reading config from {}", config_path);
        let config_content = fs::read_to_string(config_path)
            .wrap_err_with(|| format!("failed to read config {}", config_path))?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(config_content: &str) -> Result<Self> {
        let raw_config: Value = config_content.parse::<Value>()?;
        Ok(Self { raw_config })
    }

    // `rpc` is a URL, an `env:VAR` reference, or a key into [rpc_endpoints]
    // whose value is itself a URL or `env:VAR`.
    pub fn get_rpc_url(&self, rpc: &str) -> Result<String> {
        let url_str = self
            .raw_config
            .get("rpc_endpoints")
            .and_then(|e| e.get(rpc))
            .map(|v| {
                v.as_str()
                    .ok_or_else(|| eyre!("rpc_endpoints.{} must be a string", rpc))
            })
            .transpose()?
            .unwrap_or(rpc);

        if let Some(env_var) = url_str.strip_prefix("env:") {
            env::var(env_var).map_err(|_| eyre!("Environment variable {} not set", env_var))
        } else {
            Ok(url_str.to_string())
        }
    }

    pub fn get_signing_config(&self) -> Result<SigningConfig> {
        match self.raw_config.get("signing") {
            Some(signing) => signing
                .clone()
                .try_into()
                .wrap_err("invalid [signing] table in config"),
            None => Ok(SigningConfig::default()),
        }
    }
}
