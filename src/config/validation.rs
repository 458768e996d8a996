use std::path::PathBuf;

use super::{ServerConfig, TlsConfig};

/// Build the TLS settings, requiring both paths when TLS is enabled.
pub(super) fn resolve_tls(
    enabled: bool,
    cert_path: Option<String>,
    key_path: Option<String>,
) -> Result<Option<TlsConfig>, String> {
    if !enabled {
        return Ok(None);
    }

    match (cert_path, key_path) {
        (Some(cert), Some(key)) => Ok(Some(TlsConfig {
            cert_path: PathBuf::from(cert),
            key_path: PathBuf::from(key),
        })),
        (None, _) => Err("TLS is enabled but TLS_CERT_PATH is not set".to_string()),
        (_, None) => Err("TLS is enabled but TLS_KEY_PATH is not set".to_string()),
    }
}

/// AWS keys must come as a pair; a lone key would silently fall back to the
/// default credential chain.
pub(super) fn validate_aws_credentials(
    access_key_id: &Option<String>,
    secret_access_key: &Option<String>,
) -> Result<(), String> {
    match (access_key_id, secret_access_key) {
        (Some(_), None) => {
            Err("AWS_ACCESS_KEY_ID is set but AWS_SECRET_ACCESS_KEY is missing".to_string())
        }
        (None, Some(_)) => {
            Err("AWS_SECRET_ACCESS_KEY is set but AWS_ACCESS_KEY_ID is missing".to_string())
        }
        _ => Ok(()),
    }
}

pub(super) fn validate_synthesis(
    provider_timeout_seconds: u64,
    max_voice_pages: usize,
) -> Result<(), String> {
    if provider_timeout_seconds == 0 {
        return Err("PROVIDER_TIMEOUT_SECONDS must be greater than 0".to_string());
    }
    if max_voice_pages == 0 {
        return Err("MAX_VOICE_PAGES must be greater than 0".to_string());
    }
    Ok(())
}

/// Validate a fully merged configuration.
pub(super) fn validate_config(config: &ServerConfig) -> Result<(), String> {
    validate_aws_credentials(&config.aws_access_key_id, &config.aws_secret_access_key)?;
    validate_synthesis(config.provider_timeout_seconds, config.max_voice_pages)?;
    Ok(())
}
