//! PostgreSQL-backed `TranslatorRepository` implementation using Diesel ORM.
//!
//! Reads join `translators` with `addresses` so every returned aggregate
//! carries its address. Updates never touch the owner or address columns.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TranslatorRepository, TranslatorRepositoryError};
use crate::domain::{NewTranslator, Translator, TranslatorId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{
    AddressRow, NewTranslatorRow, TranslatorRow, TranslatorUpdate, translator_from_rows,
};
use super::pool::{DbPool, PoolError};
use super::schema::{addresses, translators};

/// Diesel-backed implementation of the translator repository port.
#[derive(Clone)]
pub struct DieselTranslatorRepository {
    pool: DbPool,
}

impl DieselTranslatorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TranslatorRepositoryError {
    map_basic_pool_error(error, |message| {
        TranslatorRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> TranslatorRepositoryError {
    map_basic_diesel_error(
        error,
        TranslatorRepositoryError::query,
        TranslatorRepositoryError::connection,
    )
}

fn rows_to_translator(
    (translator, address): (TranslatorRow, AddressRow),
) -> Result<Translator, TranslatorRepositoryError> {
    translator_from_rows(translator, address)
        .map_err(|err| TranslatorRepositoryError::query(err.to_string()))
}

#[async_trait]
impl TranslatorRepository for DieselTranslatorRepository {
    async fn insert(
        &self,
        translator: &NewTranslator,
    ) -> Result<Translator, TranslatorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let profile = &translator.profile;

        let row = diesel::insert_into(translators::table)
            .values(NewTranslatorRow {
                user_id: translator.owner.get(),
                address_id: translator.address.id().get(),
                age: profile.age,
                gender: &profile.gender,
                phone: &profile.phone,
                cin: &profile.cin,
                image: &profile.image,
                description: &profile.description,
                price: profile.price,
            })
            .returning(TranslatorRow::as_returning())
            .get_result::<TranslatorRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let id = TranslatorId::new(row.id)
            .map_err(|err| TranslatorRepositoryError::query(err.to_string()))?;
        Ok(Translator::new(
            id,
            translator.owner,
            translator.address.clone(),
            profile.clone(),
        ))
    }

    async fn find_by_id(
        &self,
        id: TranslatorId,
    ) -> Result<Option<Translator>, TranslatorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = translators::table
            .inner_join(addresses::table)
            .filter(translators::id.eq(id.get()))
            .select((TranslatorRow::as_select(), AddressRow::as_select()))
            .first::<(TranslatorRow, AddressRow)>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        rows.map(rows_to_translator).transpose()
    }

    async fn list(&self) -> Result<Vec<Translator>, TranslatorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(TranslatorRow, AddressRow)> = translators::table
            .inner_join(addresses::table)
            .order(translators::id.asc())
            .select((TranslatorRow::as_select(), AddressRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(rows_to_translator).collect()
    }

    async fn update(&self, translator: &Translator) -> Result<(), TranslatorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(translators::table.find(translator.id().get()))
            .set(TranslatorUpdate::from(translator.profile()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(TranslatorRepositoryError::not_found(translator.id().get()));
        }
        Ok(())
    }

    async fn delete(&self, id: TranslatorId) -> Result<bool, TranslatorRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(translators::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
