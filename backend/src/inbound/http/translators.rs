//! Translator HTTP handlers.
//!
//! ```text
//! GET    /api/translators
//! POST   /api/translators/create
//! PUT    /api/translators/update/{id}
//! DELETE /api/translators/delete/{id}
//! GET    /api/translators/{id}
//! ```
//!
//! The acting user for creation comes from the cookie session; every other
//! operation is addressed by translator id only.

use actix_web::{HttpResponse, Scope, delete, get, post, put, web};
use tracing::info;

use crate::domain::TranslatorDraft;
use crate::domain::ports::{CreateTranslatorRequest, UpdateTranslatorRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::{EmptyListPolicy, HttpState};
use crate::inbound::http::translators_dto::{TranslatorRequestBody, TranslatorResponseBody};
use crate::inbound::http::validation::{json_config, path_config, translator_id};

/// Mount point of the translator endpoints.
pub const TRANSLATORS_SCOPE: &str = "/api/translators";

/// Build the translator scope with its extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use translator_backend::inbound::http::state::HttpState;
/// use translator_backend::inbound::http::translators::translators_scope;
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .service(translators_scope());
/// ```
pub fn translators_scope() -> Scope {
    web::scope(TRANSLATORS_SCOPE)
        .app_data(json_config())
        .app_data(path_config())
        .service(list_translators)
        .service(create_translator)
        .service(update_translator)
        .service(delete_translator)
        .service(get_translator)
}

/// List every translator with its address.
///
/// An empty store answers `400` with `[]` unless the deployment opted into
/// `200` through `TRANSLATORS_EMPTY_LIST_IS_ERROR=false`.
#[utoipa::path(
    get,
    path = "/api/translators",
    responses(
        (status = 200, description = "Translators", body = [TranslatorResponseBody]),
        (status = 400, description = "No translators registered", body = [TranslatorResponseBody]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["translators"],
    operation_id = "listTranslators"
)]
#[get("")]
pub async fn list_translators(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let translators = state.translators_query.list_translators().await?;
    let body: Vec<TranslatorResponseBody> =
        translators.iter().map(TranslatorResponseBody::from).collect();

    if body.is_empty() && state.empty_list == EmptyListPolicy::BadRequest {
        return Ok(HttpResponse::BadRequest().json(body));
    }
    Ok(HttpResponse::Ok().json(body))
}

/// Register a translator owned by the session user.
#[utoipa::path(
    post,
    path = "/api/translators/create",
    request_body = TranslatorRequestBody,
    responses(
        (status = 201, description = "Translator created", body = TranslatorResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["translators"],
    operation_id = "createTranslator",
    security(("SessionCookie" = []))
)]
#[post("/create")]
pub async fn create_translator(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<TranslatorRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = TranslatorDraft::try_from(payload.into_inner())?;
    let acting_user = session.require_user_id()?;

    let translator = state
        .translators
        .create_translator(CreateTranslatorRequest { acting_user, draft })
        .await?;

    info!(translator_id = %translator.id(), owner = %acting_user, "translator registered");
    Ok(HttpResponse::Created().json(TranslatorResponseBody::from(translator)))
}

/// Overwrite a translator and its address.
#[utoipa::path(
    put,
    path = "/api/translators/update/{id}",
    params(("id" = i64, Path, description = "Translator identifier")),
    request_body = TranslatorRequestBody,
    responses(
        (status = 200, description = "Translator updated", body = TranslatorResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Translator not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["translators"],
    operation_id = "updateTranslator"
)]
#[put("/update/{id}")]
pub async fn update_translator(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<TranslatorRequestBody>,
) -> ApiResult<web::Json<TranslatorResponseBody>> {
    let translator_id = translator_id(path.into_inner())?;
    let draft = TranslatorDraft::try_from(payload.into_inner())?;

    let translator = state
        .translators
        .update_translator(UpdateTranslatorRequest {
            translator_id,
            draft,
        })
        .await?;

    Ok(web::Json(TranslatorResponseBody::from(translator)))
}

/// Delete a translator and its address.
#[utoipa::path(
    delete,
    path = "/api/translators/delete/{id}",
    params(("id" = i64, Path, description = "Translator identifier")),
    responses(
        (status = 200, description = "Translator deleted"),
        (status = 404, description = "Translator not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["translators"],
    operation_id = "deleteTranslator"
)]
#[delete("/delete/{id}")]
pub async fn delete_translator(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let translator_id = translator_id(path.into_inner())?;
    state.translators.delete_translator(translator_id).await?;
    info!(%translator_id, "translator removed");
    Ok(HttpResponse::Ok().finish())
}

/// Fetch one translator with its address.
#[utoipa::path(
    get,
    path = "/api/translators/{id}",
    params(("id" = i64, Path, description = "Translator identifier")),
    responses(
        (status = 200, description = "Translator", body = TranslatorResponseBody),
        (status = 404, description = "Translator not found", body = ErrorSchema)
    ),
    tags = ["translators"],
    operation_id = "getTranslator"
)]
#[get("/{id}")]
pub async fn get_translator(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<TranslatorResponseBody>> {
    let translator_id = translator_id(path.into_inner())?;
    let translator = state.translators_query.get_translator(translator_id).await?;
    Ok(web::Json(TranslatorResponseBody::from(translator)))
}

#[cfg(test)]
#[path = "translators_tests.rs"]
mod tests;
