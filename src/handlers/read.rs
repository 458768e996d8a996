//! `GET /read`: synthesize text and stream the audio back.

use axum::{
    body::Body,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

use crate::core::tts::SynthesisRequest;
use crate::core::tts::aws_polly::DEFAULT_ENGINE;
use crate::core::tts::prosody::DEFAULT_SPEED;
use crate::errors::app_error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters of `/read`
///
/// Built from the raw key/value pairs so that a missing parameter is
/// reported as `Invalid parameters` rather than as an axum rejection. A
/// repeated key keeps its last value; unknown keys are ignored.
#[derive(Debug, Default)]
pub struct ReadQuery {
    pub text: Option<String>,
    pub voice_id: Option<String>,
    pub output_format: Option<String>,
    pub speed: Option<String>,
    pub engine: Option<String>,
}

impl FromIterator<(String, String)> for ReadQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = ReadQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "text" => &mut query.text,
                "voiceId" => &mut query.voice_id,
                "outputFormat" => &mut query.output_format,
                "speed" => &mut query.speed,
                "engine" => &mut query.engine,
                _ => continue,
            };
            *slot = Some(value);
        }
        query
    }
}

impl TryFrom<ReadQuery> for SynthesisRequest {
    type Error = AppError;

    fn try_from(query: ReadQuery) -> AppResult<Self> {
        let (Some(text), Some(voice_id), Some(output_format)) =
            (query.text, query.voice_id, query.output_format)
        else {
            return Err(AppError::InvalidRequest);
        };

        Ok(SynthesisRequest::new(text, voice_id, output_format)
            .with_speed(query.speed.unwrap_or_else(|| DEFAULT_SPEED.to_string()))
            .with_engine(query.engine.unwrap_or_else(|| DEFAULT_ENGINE.to_string())))
    }
}

pub async fn read_text(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Response> {
    let Query(pairs) = query.map_err(|rejection| {
        debug!(error = %rejection, "Unreadable query string");
        AppError::InvalidRequest
    })?;
    let request = SynthesisRequest::try_from(ReadQuery::from_iter(pairs))?;
    let speech = state.speech.synthesize(request).await?;

    let mut response = Body::from_stream(speech.chunks).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(speech.content_type),
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = parse_query("text=Hello&voiceId=Joanna&outputFormat=mp3");
        let request = SynthesisRequest::try_from(query).unwrap();

        assert_eq!(request.text, "Hello");
        assert_eq!(request.voice_id, "Joanna");
        assert_eq!(request.output_format, "mp3");
        assert_eq!(request.speed, "100%");
        assert_eq!(request.engine, "neural");
    }

    #[test]
    fn test_missing_parameter_is_invalid() {
        for raw in [
            "voiceId=Joanna&outputFormat=mp3",
            "text=Hello&outputFormat=mp3",
            "text=Hello&voiceId=Joanna",
            "",
        ] {
            let query: ReadQuery = parse_query(raw);
            assert!(
                matches!(SynthesisRequest::try_from(query), Err(AppError::InvalidRequest)),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_explicit_speed_and_engine() {
        let query: ReadQuery = parse_query(
            "text=Hi&voiceId=Matthew&outputFormat=pcm&speed=x-slow&engine=standard",
        );
        let request = SynthesisRequest::try_from(query).unwrap();

        assert_eq!(request.speed, "x-slow");
        assert_eq!(request.engine, "standard");
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let query = parse_query("text=a&text=b&voiceId=Joanna&outputFormat=mp3&outputFormat=pcm");
        let request = SynthesisRequest::try_from(query).unwrap();

        assert_eq!(request.text, "b");
        assert_eq!(request.output_format, "pcm");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let query = parse_query("text=Hi&voice=Amy&voiceId=Joanna&outputFormat=mp3&rate=fast");
        let request = SynthesisRequest::try_from(query).unwrap();

        assert_eq!(request.voice_id, "Joanna");
        assert_eq!(request.speed, "100%");
    }

    fn parse_query(raw: &str) -> ReadQuery {
        let uri: axum::http::Uri = format!("/read?{raw}").parse().unwrap();
        Query::<Vec<(String, String)>>::try_from_uri(&uri)
            .unwrap()
            .0
            .into_iter()
            .collect()
    }
}
