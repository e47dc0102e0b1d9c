//! Embedded PostgreSQL helpers for the Diesel repository suites.
//!
//! Every context gets its own database on the shared cluster with the
//! translator tables created. The schema is owned outside this service, so
//! the DDL below mirrors `src/outbound/persistence/schema.rs`.
//!
//! Set `SKIP_TEST_CLUSTER=1` where the cluster cannot start; suites then
//! report a skip instead of failing.

// Not every suite calls every helper.
#![allow(dead_code)]

use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use postgres::{Client, NoTls};
use uuid::Uuid;

const TRANSLATOR_SCHEMA: &str = concat!(
    "CREATE TABLE users (",
    "  id BIGSERIAL PRIMARY KEY,",
    "  user_name VARCHAR NOT NULL,",
    "  email VARCHAR NOT NULL",
    ");",
    "CREATE TABLE addresses (",
    "  id BIGSERIAL PRIMARY KEY,",
    "  street VARCHAR NOT NULL,",
    "  city VARCHAR NOT NULL,",
    "  state VARCHAR NOT NULL,",
    "  postal_code VARCHAR NOT NULL",
    ");",
    "CREATE TABLE translators (",
    "  id BIGSERIAL PRIMARY KEY,",
    "  user_id BIGINT NOT NULL REFERENCES users (id),",
    "  address_id BIGINT NOT NULL UNIQUE REFERENCES addresses (id),",
    "  age INTEGER NOT NULL,",
    "  gender VARCHAR NOT NULL,",
    "  phone VARCHAR NOT NULL,",
    "  cin VARCHAR NOT NULL,",
    "  image TEXT NOT NULL,",
    "  description TEXT NOT NULL,",
    "  price DOUBLE PRECISION NOT NULL",
    ");"
);

/// Render a `postgres` error with its SQLSTATE and message when available.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db_error) => format!(
            "postgres error {:?}: {}",
            db_error.code(),
            db_error.message()
        ),
        None => error.to_string(),
    }
}

/// Skip when `SKIP_TEST_CLUSTER` is truthy, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    let skip = std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if skip {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Run a batch of SQL statements against `url`.
pub fn execute_sql(url: &str, sql: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(sql)
        .map_err(|err| format_postgres_error(&err))
}

/// Create a fresh database on the shared cluster with the translator tables.
pub fn provision_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster_handle().map_err(|err| err.to_string())?;
    let name = format!("translators_{}", Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(name.as_str())
        .map_err(|err| format!("create database {name}: {err:?}"))?;
    execute_sql(database.url(), TRANSLATOR_SCHEMA)?;
    Ok(database)
}

/// Insert a user row and return its issued id.
pub fn seed_user(url: &str, user_name: &str, email: &str) -> Result<i64, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let row = client
        .query_one(
            "INSERT INTO users (user_name, email) VALUES ($1, $2) RETURNING id",
            &[&user_name, &email],
        )
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
