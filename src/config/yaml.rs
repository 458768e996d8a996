use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present here
/// override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 8000
///   index_path: "static/index.html"
///   tls:
///     enabled: true
///     cert_path: "/etc/ssl/cert.pem"
///     key_path: "/etc/ssl/key.pem"
///
/// aws:
///   region: "eu-west-1"
///   profile: "speech"
///   access_key_id: "AKIA..."
///   secret_access_key: "..."
///   session_token: "..."
///
/// synthesis:
///   provider_timeout_seconds: 30
///   max_voice_pages: 100
///   escape_ssml: true
///
/// security:
///   cors_allowed_origins: "https://app.example.com"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub aws: Option<AwsYaml>,
    pub synthesis: Option<SynthesisYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls: Option<TlsYaml>,
    /// HTML page served at `/`
    pub index_path: Option<String>,
}

/// TLS configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TlsYaml {
    pub enabled: Option<bool>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// AWS credentials and region from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AwsYaml {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
}

/// Synthesis behavior from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SynthesisYaml {
    pub provider_timeout_seconds: Option<u64>,
    pub max_voice_pages: Option<usize>,
    pub escape_ssml: Option<bool>,
}

/// Security configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    /// "*", a comma-separated list, or unset for same-origin only
    pub cors_allowed_origins: Option<String>,
}

impl YamlConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the YAML is malformed.
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}
