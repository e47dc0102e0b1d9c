//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the user, address and translator repository
//! ports, backed by `diesel-async` over a `bb8` pool. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module; adapters only translate between rows and domain types.
//!
//! # Example
//!
//! ```ignore
//! use translator_backend::outbound::persistence::{
//!     DbPool, DieselTranslatorRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/translators")).await?;
//! let repo = DieselTranslatorRepository::new(pool);
//! ```

mod diesel_address_repository;
mod diesel_basic_error_mapping;
mod diesel_translator_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_address_repository::DieselAddressRepository;
pub use diesel_translator_repository::DieselTranslatorRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
