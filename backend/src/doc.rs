//! OpenAPI document for the translator API.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::translators_dto::{
    AddressRequestBody, AddressResponseBody, TranslatorRequestBody, TranslatorResponseBody,
};

/// Register the session cookie used to identify the acting user.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie carrying the signed-in user's id.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Translator directory API",
        description = "Create, list, update and delete translators and their addresses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::translators::list_translators,
        crate::inbound::http::translators::create_translator,
        crate::inbound::http::translators::update_translator,
        crate::inbound::http::translators::delete_translator,
        crate::inbound::http::translators::get_translator,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TranslatorRequestBody,
        TranslatorResponseBody,
        AddressRequestBody,
        AddressResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "translators", description = "Translator profiles and their addresses"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
