//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the domain needs from storage.
//! Driving ports (`*Command`, `*Query`) describe what inbound adapters may
//! ask of the domain.

mod macros;
pub(crate) use macros::define_port_error;

mod address_repository;
mod translator_command;
mod translator_query;
mod translator_repository;
mod user_repository;

#[cfg(test)]
pub use address_repository::MockAddressRepository;
pub use address_repository::{AddressRepository, AddressRepositoryError};
#[cfg(test)]
pub use translator_command::MockTranslatorCommand;
pub use translator_command::{
    CreateTranslatorRequest, FixtureTranslatorCommand, TranslatorCommand, UpdateTranslatorRequest,
};
#[cfg(test)]
pub use translator_query::MockTranslatorQuery;
pub use translator_query::{FixtureTranslatorQuery, TranslatorQuery};
#[cfg(test)]
pub use translator_repository::MockTranslatorRepository;
pub use translator_repository::{TranslatorRepository, TranslatorRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
