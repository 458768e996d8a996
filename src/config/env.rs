use super::utils::{env_bool, env_parse, env_string};

/// Every environment variable the gateway reads. Tests clear these between cases.
#[cfg(test)]
pub(super) const ENV_VARS: [&str; 15] = [
    "HOST",
    "PORT",
    "TLS_ENABLED",
    "TLS_CERT_PATH",
    "TLS_KEY_PATH",
    "INDEX_PATH",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_REGION",
    "AWS_PROFILE",
    "PROVIDER_TIMEOUT_SECONDS",
    "MAX_VOICE_PAGES",
    "ESCAPE_SSML",
    "CORS_ALLOWED_ORIGINS",
];

/// Raw values read from the process environment, before defaults and YAML
/// overrides are applied.
#[derive(Debug, Default)]
pub(super) struct EnvConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls_enabled: Option<bool>,
    pub tls_cert_path: Option<String>,
    pub tls_key_path: Option<String>,
    pub index_path: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_session_token: Option<String>,
    pub aws_region: Option<String>,
    pub aws_profile: Option<String>,
    pub provider_timeout_seconds: Option<u64>,
    pub max_voice_pages: Option<usize>,
    pub escape_ssml: Option<bool>,
    pub cors_allowed_origins: Option<String>,
}

impl EnvConfig {
    /// Read every supported variable. Fails on values that do not parse.
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            host: env_string("HOST"),
            port: env_parse("PORT")?,
            tls_enabled: env_bool("TLS_ENABLED")?,
            tls_cert_path: env_string("TLS_CERT_PATH"),
            tls_key_path: env_string("TLS_KEY_PATH"),
            index_path: env_string("INDEX_PATH"),
            aws_access_key_id: env_string("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: env_string("AWS_SECRET_ACCESS_KEY"),
            aws_session_token: env_string("AWS_SESSION_TOKEN"),
            aws_region: env_string("AWS_REGION"),
            aws_profile: env_string("AWS_PROFILE"),
            provider_timeout_seconds: env_parse("PROVIDER_TIMEOUT_SECONDS")?,
            max_voice_pages: env_parse("MAX_VOICE_PAGES")?,
            escape_ssml: env_bool("ESCAPE_SSML")?,
            cors_allowed_origins: env_string("CORS_ALLOWED_ORIGINS"),
        })
    }
}
