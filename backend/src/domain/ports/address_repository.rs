//! Port for address persistence.

use async_trait::async_trait;

use crate::domain::{Address, AddressFields, AddressId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by address repository adapters.
    pub enum AddressRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "address repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "address repository query failed: {message}",
        /// The targeted address does not exist.
        NotFound { address_id: i64 } => "address {address_id} not found",
    }
}

/// Port for creating, reading, updating and deleting addresses by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Persist a new address and return it with its issued identifier.
    async fn insert(&self, fields: &AddressFields) -> Result<Address, AddressRepositoryError>;

    /// Overwrite the fields of an existing address.
    ///
    /// Returns [`AddressRepositoryError::NotFound`] when no row matches.
    async fn update(&self, address: &Address) -> Result<(), AddressRepositoryError>;

    /// Delete an address, returning whether a row was removed.
    async fn delete(&self, id: AddressId) -> Result<bool, AddressRepositoryError>;
}
