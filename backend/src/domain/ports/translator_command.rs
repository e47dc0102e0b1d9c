//! Driving port for translator mutations.

use async_trait::async_trait;

use crate::domain::{Error, Translator, TranslatorDraft, TranslatorId, UserId};

/// Request to register a translator for the acting user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTranslatorRequest {
    pub acting_user: UserId,
    pub draft: TranslatorDraft,
}

/// Request to overwrite an existing translator and its address.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTranslatorRequest {
    pub translator_id: TranslatorId,
    pub draft: TranslatorDraft,
}

/// Driving port for creating, updating and deleting translators.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslatorCommand: Send + Sync {
    async fn create_translator(
        &self,
        request: CreateTranslatorRequest,
    ) -> Result<Translator, Error>;

    async fn update_translator(
        &self,
        request: UpdateTranslatorRequest,
    ) -> Result<Translator, Error>;

    async fn delete_translator(&self, translator_id: TranslatorId) -> Result<(), Error>;
}

/// Fixture command used when no database is configured.
///
/// Nothing can be persisted, so every mutation reports the store as
/// unavailable rather than inventing a result.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTranslatorCommand;

const STORE_UNAVAILABLE: &str = "Translator store is not configured";

#[async_trait]
impl TranslatorCommand for FixtureTranslatorCommand {
    async fn create_translator(
        &self,
        request: CreateTranslatorRequest,
    ) -> Result<Translator, Error> {
        tracing::debug!(owner = %request.acting_user, "fixture create has no store");
        Err(Error::service_unavailable(STORE_UNAVAILABLE))
    }

    async fn update_translator(
        &self,
        request: UpdateTranslatorRequest,
    ) -> Result<Translator, Error> {
        tracing::debug!(translator_id = %request.translator_id, "fixture update has no store");
        Err(Error::service_unavailable(STORE_UNAVAILABLE))
    }

    async fn delete_translator(&self, _translator_id: TranslatorId) -> Result<(), Error> {
        Err(Error::service_unavailable(STORE_UNAVAILABLE))
    }
}
