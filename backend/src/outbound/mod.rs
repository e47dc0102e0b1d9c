//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: PostgreSQL-backed user, address and translator
//!   repositories using Diesel ORM.

pub mod persistence;
