//! Driving port for translator reads.

use async_trait::async_trait;

use crate::domain::{Error, Translator, TranslatorId};

/// Driving port for listing and fetching translators.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslatorQuery: Send + Sync {
    /// Every translator with its address, ordered by identifier.
    async fn list_translators(&self) -> Result<Vec<Translator>, Error>;

    /// A single translator with its address.
    async fn get_translator(&self, translator_id: TranslatorId) -> Result<Translator, Error>;
}

/// Fixture query backed by an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTranslatorQuery;

#[async_trait]
impl TranslatorQuery for FixtureTranslatorQuery {
    async fn list_translators(&self) -> Result<Vec<Translator>, Error> {
        Ok(Vec::new())
    }

    async fn get_translator(&self, _translator_id: TranslatorId) -> Result<Translator, Error> {
        Err(Error::not_found("Translator not found"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_nothing() {
        let translators = FixtureTranslatorQuery
            .list_translators()
            .await
            .expect("fixture list succeeds");
        assert!(translators.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_get_is_not_found() {
        let err = FixtureTranslatorQuery
            .get_translator(TranslatorId::new(1).expect("valid id"))
            .await
            .expect_err("fixture is empty");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
