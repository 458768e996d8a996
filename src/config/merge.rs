use std::path::PathBuf;

use super::env::EnvConfig;
use super::validation::resolve_tls;
use super::yaml::YamlConfig;
use super::{
    DEFAULT_HOST, DEFAULT_INDEX_PATH, DEFAULT_PORT, DEFAULT_PROVIDER_TIMEOUT_SECONDS, ServerConfig,
};
use crate::core::tts::DEFAULT_MAX_VOICE_PAGES;
use crate::core::tts::aws_polly::DEFAULT_REGION;

/// Merge environment variables (base) with optional YAML overrides
///
/// For every field the YAML value wins, then the environment, then the default.
pub(super) fn merge_config(
    yaml: Option<YamlConfig>,
) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let env = EnvConfig::load()?;
    let yaml = yaml.unwrap_or_default();

    let server = yaml.server.unwrap_or_default();
    let tls = server.tls.unwrap_or_default();
    let aws = yaml.aws.unwrap_or_default();
    let synthesis = yaml.synthesis.unwrap_or_default();
    let security = yaml.security.unwrap_or_default();

    let tls = resolve_tls(
        tls.enabled.or(env.tls_enabled).unwrap_or(false),
        tls.cert_path.or(env.tls_cert_path),
        tls.key_path.or(env.tls_key_path),
    )?;

    Ok(ServerConfig {
        host: server
            .host
            .or(env.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: server.port.or(env.port).unwrap_or(DEFAULT_PORT),
        tls,
        index_path: PathBuf::from(
            server
                .index_path
                .or(env.index_path)
                .unwrap_or_else(|| DEFAULT_INDEX_PATH.to_string()),
        ),
        aws_access_key_id: aws.access_key_id.or(env.aws_access_key_id),
        aws_secret_access_key: aws.secret_access_key.or(env.aws_secret_access_key),
        aws_session_token: aws.session_token.or(env.aws_session_token),
        aws_region: aws
            .region
            .or(env.aws_region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        aws_profile: aws.profile.or(env.aws_profile),
        provider_timeout_seconds: synthesis
            .provider_timeout_seconds
            .or(env.provider_timeout_seconds)
            .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECONDS),
        max_voice_pages: synthesis
            .max_voice_pages
            .or(env.max_voice_pages)
            .unwrap_or(DEFAULT_MAX_VOICE_PAGES),
        escape_ssml: synthesis.escape_ssml.or(env.escape_ssml).unwrap_or(true),
        cors_allowed_origins: security.cors_allowed_origins.or(env.cors_allowed_origins),
    })
}
