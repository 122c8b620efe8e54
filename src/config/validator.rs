//! Config validation with aggregated errors.

use tracing::{error, info};

use crate::config::settings::{ClientConfig, LoggingConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_client_config(cfg: &ClientConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    if let Some(base_url) = cfg.base_url.as_deref().filter(|url| !url.is_empty()) {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("base_url '{}' must start with http:// or https://", base_url));
        }
    }

    if cfg.timeout_seconds == Some(0) {
        errors.push("timeout_seconds must be greater than 0".to_string());
    }

    if let Some(logging) = &cfg.logging {
        validate_logging(logging, &mut errors);
    }

    if errors.is_empty() {
        info!("config validation passed");
        Ok(())
    } else {
        for e in &errors {
            error!("config validation: {}", e);
        }
        Err(errors)
    }
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "logging.level '{}' is invalid; allowed: {}",
            logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
