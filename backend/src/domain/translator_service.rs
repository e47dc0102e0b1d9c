//! Translator domain service.
//!
//! Implements the translator driving ports on top of the user, address and
//! translator repositories. Address and translator writes are issued as two
//! ordered repository calls; a failed translator insert removes the address
//! written just before it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    AddressRepository, AddressRepositoryError, CreateTranslatorRequest, TranslatorCommand,
    TranslatorQuery, TranslatorRepository, TranslatorRepositoryError, UpdateTranslatorRequest,
    UserRepository, UserRepositoryError,
};
use crate::domain::{Error, NewTranslator, Translator, TranslatorId};

const TRANSLATOR_NOT_FOUND: &str = "Translator not found";
const USER_NOT_FOUND: &str = "User not found in the database";

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_address_error(error: AddressRepositoryError) -> Error {
    match error {
        AddressRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("address repository unavailable: {message}"))
        }
        AddressRepositoryError::Query { message } => {
            Error::internal(format!("address repository error: {message}"))
        }
        AddressRepositoryError::NotFound { address_id } => {
            Error::not_found(format!("Address {address_id} not found"))
        }
    }
}

fn map_translator_error(error: TranslatorRepositoryError) -> Error {
    match error {
        TranslatorRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("translator repository unavailable: {message}"))
        }
        TranslatorRepositoryError::Query { message } => {
            Error::internal(format!("translator repository error: {message}"))
        }
        TranslatorRepositoryError::NotFound { .. } => Error::not_found(TRANSLATOR_NOT_FOUND),
    }
}

/// Translator service implementing both command and query driving ports.
pub struct TranslatorService<U, A, T> {
    users: Arc<U>,
    addresses: Arc<A>,
    translators: Arc<T>,
}

impl<U, A, T> Clone for TranslatorService<U, A, T> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            addresses: Arc::clone(&self.addresses),
            translators: Arc::clone(&self.translators),
        }
    }
}

impl<U, A, T> TranslatorService<U, A, T> {
    /// Create a service over the three repositories.
    pub fn new(users: Arc<U>, addresses: Arc<A>, translators: Arc<T>) -> Self {
        Self {
            users,
            addresses,
            translators,
        }
    }
}

impl<U, A, T> TranslatorService<U, A, T>
where
    T: TranslatorRepository,
{
    async fn load(&self, id: TranslatorId) -> Result<Translator, Error> {
        self.translators
            .find_by_id(id)
            .await
            .map_err(map_translator_error)?
            .ok_or_else(|| Error::not_found(TRANSLATOR_NOT_FOUND))
    }
}

#[async_trait]
impl<U, A, T> TranslatorCommand for TranslatorService<U, A, T>
where
    U: UserRepository,
    A: AddressRepository,
    T: TranslatorRepository,
{
    async fn create_translator(
        &self,
        request: CreateTranslatorRequest,
    ) -> Result<Translator, Error> {
        let CreateTranslatorRequest { acting_user, draft } = request;

        let owner = self
            .users
            .find_by_id(acting_user)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;

        let (profile, fields) = draft.into_parts();
        let address = self
            .addresses
            .insert(&fields)
            .await
            .map_err(map_address_error)?;
        let address_id = address.id();

        let new_translator = NewTranslator {
            owner: owner.id(),
            address,
            profile,
        };
        match self.translators.insert(&new_translator).await {
            Ok(translator) => {
                debug!(translator_id = %translator.id(), owner = %owner.id(), "translator created");
                Ok(translator)
            }
            Err(error) => {
                if let Err(cleanup) = self.addresses.delete(address_id).await {
                    warn!(
                        %address_id,
                        error = %cleanup,
                        "failed to remove address after translator insert failure"
                    );
                }
                Err(map_translator_error(error))
            }
        }
    }

    async fn update_translator(
        &self,
        request: UpdateTranslatorRequest,
    ) -> Result<Translator, Error> {
        let UpdateTranslatorRequest {
            translator_id,
            draft,
        } = request;

        let mut translator = self.load(translator_id).await?;
        translator.apply(draft);

        self.addresses
            .update(translator.address())
            .await
            .map_err(map_address_error)?;
        self.translators
            .update(&translator)
            .await
            .map_err(map_translator_error)?;

        debug!(%translator_id, "translator updated");
        Ok(translator)
    }

    async fn delete_translator(&self, translator_id: TranslatorId) -> Result<(), Error> {
        let translator = self.load(translator_id).await?;

        let removed = self
            .translators
            .delete(translator_id)
            .await
            .map_err(map_translator_error)?;
        if !removed {
            return Err(Error::not_found(TRANSLATOR_NOT_FOUND));
        }

        // The translator row is gone; address cleanup failures are logged only.
        let address_id = translator.address().id();
        match self.addresses.delete(address_id).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(%translator_id, %address_id, "translator address was already gone");
            }
            Err(error) => {
                warn!(%translator_id, %address_id, %error, "failed to delete translator address");
            }
        }

        debug!(%translator_id, "translator deleted");
        Ok(())
    }
}

#[async_trait]
impl<U, A, T> TranslatorQuery for TranslatorService<U, A, T>
where
    U: UserRepository,
    A: AddressRepository,
    T: TranslatorRepository,
{
    async fn list_translators(&self) -> Result<Vec<Translator>, Error> {
        self.translators.list().await.map_err(map_translator_error)
    }

    async fn get_translator(&self, translator_id: TranslatorId) -> Result<Translator, Error> {
        self.load(translator_id).await
    }
}

#[cfg(test)]
#[path = "translator_service_tests.rs"]
mod tests;
