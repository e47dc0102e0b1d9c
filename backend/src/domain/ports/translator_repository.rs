//! Port abstraction for translator persistence.
//!
//! Translators are always loaded together with their address, so every read
//! returns a complete [`Translator`] aggregate.

use async_trait::async_trait;

use crate::domain::{NewTranslator, Translator, TranslatorId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by translator repository adapters.
    pub enum TranslatorRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "translator repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "translator repository query failed: {message}",
        /// The targeted translator does not exist.
        NotFound { translator_id: i64 } => "translator {translator_id} not found",
    }
}

/// Port for translator storage and eager retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslatorRepository: Send + Sync {
    /// Persist a translator that references an already stored address.
    async fn insert(&self, translator: &NewTranslator)
    -> Result<Translator, TranslatorRepositoryError>;

    /// Fetch a translator and its address.
    async fn find_by_id(
        &self,
        id: TranslatorId,
    ) -> Result<Option<Translator>, TranslatorRepositoryError>;

    /// List every translator with its address, ordered by identifier.
    async fn list(&self) -> Result<Vec<Translator>, TranslatorRepositoryError>;

    /// Overwrite the scalar fields of an existing translator.
    ///
    /// The owner and address reference are not rewritten.
    async fn update(&self, translator: &Translator) -> Result<(), TranslatorRepositoryError>;

    /// Delete a translator row, returning whether a row was removed.
    async fn delete(&self, id: TranslatorId) -> Result<bool, TranslatorRepositoryError>;
}
