//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend on
//! the translator driving ports only and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureTranslatorCommand, FixtureTranslatorQuery, TranslatorCommand, TranslatorQuery,
};

/// How `GET /api/translators` answers when no translator exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    /// Respond `400 Bad Request` with an empty JSON array.
    #[default]
    BadRequest,
    /// Respond `200 OK` with an empty JSON array.
    Ok,
}

impl EmptyListPolicy {
    /// Map the `empty_list_is_error` setting onto a policy.
    pub fn from_flag(empty_list_is_error: bool) -> Self {
        if empty_list_is_error {
            Self::BadRequest
        } else {
            Self::Ok
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub translators: Arc<dyn TranslatorCommand>,
    pub translators_query: Arc<dyn TranslatorQuery>,
    pub empty_list: EmptyListPolicy,
}

impl HttpState {
    /// Construct state from the translator ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use translator_backend::domain::ports::{FixtureTranslatorCommand, FixtureTranslatorQuery};
    /// use translator_backend::inbound::http::state::{EmptyListPolicy, HttpState};
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureTranslatorCommand),
    ///     Arc::new(FixtureTranslatorQuery),
    /// )
    /// .with_empty_list_policy(EmptyListPolicy::Ok);
    /// assert_eq!(state.empty_list, EmptyListPolicy::Ok);
    /// ```
    pub fn new(
        translators: Arc<dyn TranslatorCommand>,
        translators_query: Arc<dyn TranslatorQuery>,
    ) -> Self {
        Self {
            translators,
            translators_query,
            empty_list: EmptyListPolicy::default(),
        }
    }

    /// Override the empty list behaviour.
    #[must_use]
    pub fn with_empty_list_policy(mut self, policy: EmptyListPolicy) -> Self {
        self.empty_list = policy;
        self
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureTranslatorCommand),
            Arc::new(FixtureTranslatorQuery),
        )
    }
}
