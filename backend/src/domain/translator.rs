//! Translator aggregate: a profile owned by one user and composed with one
//! address.
//!
//! The aggregate can only be assembled around a persisted [`Address`], so a
//! translator never references an address the store has not issued.

use super::translator_validation::{TranslatorValidationErrors, validate_draft};
use super::{Address, AddressFields, TranslatorId, UserId};

/// Scalar translator profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorProfile {
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub cin: String,
    pub image: String,
    pub description: String,
    pub price: f64,
}

/// Validated input for creating or updating a translator.
///
/// # Examples
/// ```
/// use translator_backend::domain::{AddressFields, TranslatorDraft, TranslatorProfile};
///
/// let draft = TranslatorDraft::new(
///     TranslatorProfile {
///         age: 31,
///         gender: "female".to_owned(),
///         phone: "+216 20 123 456".to_owned(),
///         cin: "09876543".to_owned(),
///         image: String::new(),
///         description: "Arabic and French".to_owned(),
///         price: 40.0,
///     },
///     AddressFields {
///         street: "1 Rue de Rome".to_owned(),
///         city: "Tunis".to_owned(),
///         state: "Tunis".to_owned(),
///         postal_code: "1000".to_owned(),
///     },
/// )
/// .expect("valid draft");
/// assert_eq!(draft.profile().age, 31);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorDraft {
    profile: TranslatorProfile,
    address: AddressFields,
}

impl TranslatorDraft {
    /// Validate every field, reporting all violations at once.
    pub fn new(
        profile: TranslatorProfile,
        address: AddressFields,
    ) -> Result<Self, TranslatorValidationErrors> {
        validate_draft(&profile, &address)?;
        Ok(Self { profile, address })
    }

    pub fn profile(&self) -> &TranslatorProfile {
        &self.profile
    }

    pub fn address(&self) -> &AddressFields {
        &self.address
    }

    /// Split into profile and address fields.
    pub fn into_parts(self) -> (TranslatorProfile, AddressFields) {
        (self.profile, self.address)
    }
}

/// Translator about to be inserted: owner and persisted address are known,
/// the translator identifier is not.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTranslator {
    pub owner: UserId,
    pub address: Address,
    pub profile: TranslatorProfile,
}

/// Persisted translator aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Translator {
    id: TranslatorId,
    owner: UserId,
    address: Address,
    profile: TranslatorProfile,
}

impl Translator {
    /// Assemble an aggregate from persisted parts.
    pub fn new(
        id: TranslatorId,
        owner: UserId,
        address: Address,
        profile: TranslatorProfile,
    ) -> Self {
        Self {
            id,
            owner,
            address,
            profile,
        }
    }

    pub fn id(&self) -> TranslatorId {
        self.id
    }

    /// Owning user; fixed at creation.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn profile(&self) -> &TranslatorProfile {
        &self.profile
    }

    /// Overwrite every scalar field and every address field from `draft`.
    ///
    /// The translator id, the owner and the address id are left untouched,
    /// so the existing address record is mutated rather than replaced.
    pub fn apply(&mut self, draft: TranslatorDraft) {
        let (profile, address) = draft.into_parts();
        self.profile = profile;
        self.address.overwrite(address);
    }
}
