//! Mailing address owned by exactly one translator.

use super::AddressId;

/// Free-text address fields, without identity.
///
/// This is the shape used both for a not-yet-persisted address and for the
/// values copied onto an existing address during an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Persisted address.
///
/// Updates mutate the fields in place; the identifier never changes once
/// issued by the store.
///
/// # Examples
/// ```
/// use translator_backend::domain::{Address, AddressFields, AddressId};
///
/// let mut address = Address::new(
///     AddressId::new(1).expect("valid id"),
///     AddressFields {
///         street: "1 Rue de Rome".to_owned(),
///         city: "Tunis".to_owned(),
///         state: "Tunis".to_owned(),
///         postal_code: "1000".to_owned(),
///     },
/// );
/// address.overwrite(AddressFields {
///     street: "2 Rue de Rome".to_owned(),
///     city: "Tunis".to_owned(),
///     state: "Tunis".to_owned(),
///     postal_code: "1001".to_owned(),
/// });
/// assert_eq!(address.id().get(), 1);
/// assert_eq!(address.street(), "2 Rue de Rome");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    id: AddressId,
    fields: AddressFields,
}

impl Address {
    /// Pair store-issued identity with its fields.
    pub fn new(id: AddressId, fields: AddressFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> AddressId {
        self.id
    }

    pub fn street(&self) -> &str {
        self.fields.street.as_str()
    }

    pub fn city(&self) -> &str {
        self.fields.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.fields.state.as_str()
    }

    pub fn postal_code(&self) -> &str {
        self.fields.postal_code.as_str()
    }

    /// Borrow every field at once.
    pub fn fields(&self) -> &AddressFields {
        &self.fields
    }

    /// Replace every field while keeping the identifier.
    pub fn overwrite(&mut self, fields: AddressFields) {
        self.fields = fields;
    }
}
