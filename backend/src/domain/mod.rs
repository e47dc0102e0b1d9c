//! Domain primitives, aggregates and services.
//!
//! Purpose: define the translator aggregate, its address and owning user,
//! the validation rules for incoming drafts, and the service that
//! orchestrates persistence through the ports in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - Translator, Address, User: persisted aggregates.
//! - TranslatorDraft: validated create/update input.
//! - TranslatorService: implementation of the translator driving ports.

pub mod address;
pub mod error;
pub mod ids;
pub mod ports;
pub mod trace_id;
pub mod translator;
pub mod translator_service;
pub mod translator_validation;
pub mod user;

pub use self::address::{Address, AddressFields};
pub use self::error::{Error, ErrorCode};
pub use self::ids::{AddressId, InvalidIdError, TranslatorId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::translator::{NewTranslator, Translator, TranslatorDraft, TranslatorProfile};
pub use self::translator_service::TranslatorService;
pub use self::translator_validation::{TranslatorValidationError, TranslatorValidationErrors};
pub use self::user::{User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use translator_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Translator not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
