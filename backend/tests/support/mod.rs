//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module hosts an in-memory store implementing every driven repository port
//! so HTTP flows run end to end without PostgreSQL.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use translator_backend::domain::ports::{
    AddressRepository, AddressRepositoryError, TranslatorRepository, TranslatorRepositoryError,
    UserRepository, UserRepositoryError,
};
use translator_backend::domain::{
    Address, AddressFields, AddressId, NewTranslator, Translator, TranslatorId, TranslatorProfile,
    User, UserId,
};

#[derive(Debug, Clone)]
struct StoredTranslator {
    owner: UserId,
    address_id: AddressId,
    profile: TranslatorProfile,
}

#[derive(Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    addresses: BTreeMap<AddressId, Address>,
    translators: BTreeMap<TranslatorId, StoredTranslator>,
    next_address_id: i64,
    next_translator_id: i64,
}

impl StoreState {
    fn assemble(
        &self,
        id: TranslatorId,
        stored: &StoredTranslator,
    ) -> Result<Translator, TranslatorRepositoryError> {
        let address = self
            .addresses
            .get(&stored.address_id)
            .cloned()
            .ok_or_else(|| TranslatorRepositoryError::query("dangling address reference"))?;
        Ok(Translator::new(
            id,
            stored.owner,
            address,
            stored.profile.clone(),
        ))
    }
}

/// In-memory user, address and translator store with sequential ids.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    fail_translator_insert: AtomicBool,
}

impl InMemoryStore {
    /// Seed a registered user.
    pub fn with_user(self, id: i64, user_name: &str) -> Self {
        let user_id = UserId::new(id).expect("positive user id");
        let user = User::new(user_id, user_name, format!("{user_name}@example.com"));
        self.state
            .lock()
            .expect("store lock")
            .users
            .insert(user_id, user);
        self
    }

    /// Make every subsequent translator insert fail with a query error.
    pub fn fail_translator_inserts(&self) {
        self.fail_translator_insert.store(true, Ordering::SeqCst);
    }

    pub fn address_count(&self) -> usize {
        self.state.lock().expect("store lock").addresses.len()
    }

    pub fn translator_count(&self) -> usize {
        self.state.lock().expect("store lock").translators.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.state.lock().expect("store lock").users.get(&id).cloned())
    }
}

#[async_trait]
impl AddressRepository for InMemoryStore {
    async fn insert(&self, fields: &AddressFields) -> Result<Address, AddressRepositoryError> {
        let mut state = self.state.lock().expect("store lock");
        state.next_address_id += 1;
        let id = AddressId::new(state.next_address_id).expect("sequential id");
        let address = Address::new(id, fields.clone());
        state.addresses.insert(id, address.clone());
        Ok(address)
    }

    async fn update(&self, address: &Address) -> Result<(), AddressRepositoryError> {
        let mut state = self.state.lock().expect("store lock");
        match state.addresses.get_mut(&address.id()) {
            Some(stored) => {
                *stored = address.clone();
                Ok(())
            }
            None => Err(AddressRepositoryError::not_found(address.id().get())),
        }
    }

    async fn delete(&self, id: AddressId) -> Result<bool, AddressRepositoryError> {
        Ok(self
            .state
            .lock()
            .expect("store lock")
            .addresses
            .remove(&id)
            .is_some())
    }
}

#[async_trait]
impl TranslatorRepository for InMemoryStore {
    async fn insert(
        &self,
        translator: &NewTranslator,
    ) -> Result<Translator, TranslatorRepositoryError> {
        if self.fail_translator_insert.load(Ordering::SeqCst) {
            return Err(TranslatorRepositoryError::query("constraint violated"));
        }
        let mut state = self.state.lock().expect("store lock");
        state.next_translator_id += 1;
        let id = TranslatorId::new(state.next_translator_id).expect("sequential id");
        state.translators.insert(
            id,
            StoredTranslator {
                owner: translator.owner,
                address_id: translator.address.id(),
                profile: translator.profile.clone(),
            },
        );
        Ok(Translator::new(
            id,
            translator.owner,
            translator.address.clone(),
            translator.profile.clone(),
        ))
    }

    async fn find_by_id(
        &self,
        id: TranslatorId,
    ) -> Result<Option<Translator>, TranslatorRepositoryError> {
        let state = self.state.lock().expect("store lock");
        state
            .translators
            .get(&id)
            .map(|stored| state.assemble(id, stored))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Translator>, TranslatorRepositoryError> {
        let state = self.state.lock().expect("store lock");
        state
            .translators
            .iter()
            .map(|(id, stored)| state.assemble(*id, stored))
            .collect()
    }

    async fn update(&self, translator: &Translator) -> Result<(), TranslatorRepositoryError> {
        let mut state = self.state.lock().expect("store lock");
        match state.translators.get_mut(&translator.id()) {
            Some(stored) => {
                stored.profile = translator.profile().clone();
                Ok(())
            }
            None => Err(TranslatorRepositoryError::not_found(translator.id().get())),
        }
    }

    async fn delete(&self, id: TranslatorId) -> Result<bool, TranslatorRepositoryError> {
        Ok(self
            .state
            .lock()
            .expect("store lock")
            .translators
            .remove(&id)
            .is_some())
    }
}
