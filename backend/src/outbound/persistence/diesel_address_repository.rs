//! PostgreSQL-backed `AddressRepository` implementation using Diesel ORM.
//!
//! Updates overwrite every column of an existing row in place; the identifier
//! issued on insert never changes.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AddressRepository, AddressRepositoryError};
use crate::domain::{Address, AddressFields, AddressId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AddressRow, AddressUpdate, NewAddressRow};
use super::pool::{DbPool, PoolError};
use super::schema::addresses;

/// Diesel-backed implementation of the address repository port.
#[derive(Clone)]
pub struct DieselAddressRepository {
    pool: DbPool,
}

impl DieselAddressRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AddressRepositoryError {
    map_basic_pool_error(error, |message| {
        AddressRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> AddressRepositoryError {
    map_basic_diesel_error(
        error,
        AddressRepositoryError::query,
        AddressRepositoryError::connection,
    )
}

fn row_to_address(row: AddressRow) -> Result<Address, AddressRepositoryError> {
    row.into_domain()
        .map_err(|err| AddressRepositoryError::query(err.to_string()))
}

#[async_trait]
impl AddressRepository for DieselAddressRepository {
    async fn insert(&self, fields: &AddressFields) -> Result<Address, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(addresses::table)
            .values(NewAddressRow::from(fields))
            .returning(AddressRow::as_returning())
            .get_result::<AddressRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_address(row)
    }

    async fn update(&self, address: &Address) -> Result<(), AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(addresses::table.find(address.id().get()))
            .set(AddressUpdate::from(address))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(AddressRepositoryError::not_found(address.id().get()));
        }
        Ok(())
    }

    async fn delete(&self, id: AddressId) -> Result<bool, AddressRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(addresses::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
