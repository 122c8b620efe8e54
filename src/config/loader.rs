use std::{env, fs, path::Path};

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::auth::credentials::Credentials;
use crate::config::settings::ClientConfig;
use crate::config::validator;
use crate::utils::constants::{ENV_AUTH_EMAIL, ENV_AUTH_IO_SELLER_ID, ENV_AUTH_SECRET, ENV_BASE_URL};

impl ClientConfig {
    /// Build config from `IOPAY_*` environment variables, after loading a
    /// `.env` file from the working directory if there is one. Unset or empty
    /// variables are left as `None`.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("loaded environment from {}", path.display());
        }
        Self::read_env()
    }

    /// Same as [`ClientConfig::from_env`] with an explicit dotenv file.
    /// Variables already set in the process environment are not overridden.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)
            .with_context(|| format!("failed to load env file {}", path.display()))?;
        Ok(Self::read_env())
    }

    fn read_env() -> Self {
        Self {
            base_url: env_non_empty(ENV_BASE_URL),
            credentials: Credentials {
                secret: env_non_empty(ENV_AUTH_SECRET),
                email: env_non_empty(ENV_AUTH_EMAIL),
                io_seller_id: env_non_empty(ENV_AUTH_IO_SELLER_ID),
            },
            ..Default::default()
        }
    }

    /// Load and validate config from a YAML file. `${VAR}` and
    /// `${VAR:default}` placeholders are expanded from the environment first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        parse_config(&content)
    }
}

pub fn parse_config(content: &str) -> Result<ClientConfig> {
    let expanded = expand_env_vars(content);
    let mut config: ClientConfig = serde_yaml::from_str(&expanded)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    // expanded placeholders of unset variables end up as empty strings
    config.credentials = config.credentials.without_empty_fields();

    debug!("validating config ...");
    validator::validate_client_config(&config)
        .map_err(|errors| anyhow!("invalid config: {}", errors.join("; ")))?;
    Ok(config)
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static regex is valid");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
