//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions back into domain types
//! re-validate identifiers, so a corrupt row surfaces as a query error rather
//! than an invalid aggregate.

use diesel::prelude::*;

use crate::domain::{
    Address, AddressFields, AddressId, InvalidIdError, Translator, TranslatorId,
    TranslatorProfile, User, UserId, UserValidationError,
};

use super::schema::{addresses, translators, users};

/// A stored row failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RowConversionError {
    #[error(transparent)]
    Id(#[from] InvalidIdError),
    #[error(transparent)]
    User(#[from] UserValidationError),
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub user_name: String,
    pub email: String,
}

impl UserRow {
    pub(crate) fn into_domain(self) -> Result<User, UserValidationError> {
        Ok(User::new(UserId::new(self.id)?, self.user_name, self.email))
    }
}

// ---------------------------------------------------------------------------
// Address models
// ---------------------------------------------------------------------------

/// Row struct for reading from the addresses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AddressRow {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl AddressRow {
    pub(crate) fn into_domain(self) -> Result<Address, InvalidIdError> {
        let AddressRow {
            id,
            street,
            city,
            state,
            postal_code,
        } = self;
        Ok(Address::new(
            AddressId::new(id)?,
            AddressFields {
                street,
                city,
                state,
                postal_code,
            },
        ))
    }
}

/// Insertable struct for creating address records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = addresses)]
pub(crate) struct NewAddressRow<'a> {
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub postal_code: &'a str,
}

impl<'a> From<&'a AddressFields> for NewAddressRow<'a> {
    fn from(fields: &'a AddressFields) -> Self {
        Self {
            street: &fields.street,
            city: &fields.city,
            state: &fields.state,
            postal_code: &fields.postal_code,
        }
    }
}

/// Changeset struct for overwriting an address in place.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = addresses)]
pub(crate) struct AddressUpdate<'a> {
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub postal_code: &'a str,
}

impl<'a> From<&'a Address> for AddressUpdate<'a> {
    fn from(address: &'a Address) -> Self {
        Self {
            street: address.street(),
            city: address.city(),
            state: address.state(),
            postal_code: address.postal_code(),
        }
    }
}

// ---------------------------------------------------------------------------
// Translator models
// ---------------------------------------------------------------------------

/// Row struct for reading from the translators table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = translators)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TranslatorRow {
    pub id: i64,
    pub user_id: i64,
    pub address_id: i64,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub cin: String,
    pub image: String,
    pub description: String,
    pub price: f64,
}

/// Insertable struct for creating translator records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = translators)]
pub(crate) struct NewTranslatorRow<'a> {
    pub user_id: i64,
    pub address_id: i64,
    pub age: i32,
    pub gender: &'a str,
    pub phone: &'a str,
    pub cin: &'a str,
    pub image: &'a str,
    pub description: &'a str,
    pub price: f64,
}

/// Changeset struct for overwriting a translator's mutable columns.
///
/// Owner and address columns are deliberately absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = translators)]
pub(crate) struct TranslatorUpdate<'a> {
    pub age: i32,
    pub gender: &'a str,
    pub phone: &'a str,
    pub cin: &'a str,
    pub image: &'a str,
    pub description: &'a str,
    pub price: f64,
}

impl<'a> From<&'a TranslatorProfile> for TranslatorUpdate<'a> {
    fn from(profile: &'a TranslatorProfile) -> Self {
        Self {
            age: profile.age,
            gender: &profile.gender,
            phone: &profile.phone,
            cin: &profile.cin,
            image: &profile.image,
            description: &profile.description,
            price: profile.price,
        }
    }
}

/// Assemble a translator aggregate from a joined row pair.
pub(crate) fn translator_from_rows(
    translator: TranslatorRow,
    address: AddressRow,
) -> Result<Translator, RowConversionError> {
    let TranslatorRow {
        id,
        user_id,
        address_id: _,
        age,
        gender,
        phone,
        cin,
        image,
        description,
        price,
    } = translator;

    Ok(Translator::new(
        TranslatorId::new(id)?,
        UserId::new(user_id)?,
        address.into_domain()?,
        TranslatorProfile {
            age,
            gender,
            phone,
            cin,
            image,
            description,
            price,
        },
    ))
}
