//! Request validation helpers shared by the translator handlers.
//!
//! Every rejection uses the common error envelope with
//! `code = invalid_request` so clients parse one shape.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::web::{JsonConfig, PathConfig};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, TranslatorId, TranslatorValidationErrors};

/// Field-level validation failure: every message under `details.errors`.
pub(crate) fn validation_error(errors: &TranslatorValidationErrors) -> Error {
    Error::invalid_request("validation failed").with_details(json!({
        "errors": errors.messages(),
    }))
}

fn json_payload_error(err: &JsonPayloadError) -> Error {
    let message = match err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large".to_owned()
        }
        other => format!("malformed JSON body: {other}"),
    };
    Error::invalid_request(message)
}

fn path_error(err: &PathError) -> Error {
    Error::invalid_request(format!("invalid path parameter: {err}"))
}

/// JSON extractor configuration rendering failures as `400` envelopes.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = req.path(), "rejected JSON payload");
        json_payload_error(&err).into()
    })
}

/// Path extractor configuration rendering failures as `400` envelopes.
pub fn path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = req.path(), "rejected path parameter");
        path_error(&err).into()
    })
}

/// Parse a raw path id; non-positive ids cannot name a translator.
pub(crate) fn translator_id(raw: i64) -> Result<TranslatorId, Error> {
    TranslatorId::new(raw).map_err(|err| {
        debug!(error = %err, "non-positive translator id requested");
        Error::not_found("Translator not found")
    })
}
