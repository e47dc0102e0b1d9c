//! HTTP inbound adapter exposing the translator REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod translators;
pub mod translators_dto;
pub mod validation;

pub use error::ApiResult;
