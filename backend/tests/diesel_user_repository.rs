//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Users are seeded with plain SQL because this service never writes them.

use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

use translator_backend::domain::UserId;
use translator_backend::domain::ports::{UserRepository, UserRepositoryError};
use translator_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

#[path = "support/pg_embed.rs"]
mod pg_embed;

use pg_embed::{execute_sql, handle_cluster_setup_failure, provision_database, seed_user};

struct TestContext {
    runtime: Runtime,
    repository: DieselUserRepository,
    database_url: String,
    _database: TemporaryDatabase,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_database()?;
    let database_url = database.url().to_string();

    let pool = runtime
        .block_on(DbPool::new(
            PoolConfig::new(database_url.as_str()).with_max_size(2),
        ))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        repository: DieselUserRepository::new(pool),
        database_url,
        _database: database,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn user_id(value: i64) -> UserId {
    UserId::new(value).expect("positive user id")
}

#[rstest]
fn seeded_user_is_found(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: seeded_user_is_found skipped");
        return;
    };
    let id = seed_user(&context.database_url, "amel", "amel@example.com").expect("seed user");

    let user = context
        .runtime
        .block_on(context.repository.find_by_id(user_id(id)))
        .expect("lookup succeeds")
        .expect("user exists");

    assert_eq!(user.id().get(), id);
    assert_eq!(user.user_name(), "amel");
    assert_eq!(user.email(), "amel@example.com");
}

#[rstest]
fn unknown_user_is_none(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: unknown_user_is_none skipped");
        return;
    };

    let user = context
        .runtime
        .block_on(context.repository.find_by_id(user_id(4242)))
        .expect("lookup succeeds");

    assert!(user.is_none());
}

#[rstest]
fn blank_profile_fields_still_resolve(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: blank_profile_fields_still_resolve skipped");
        return;
    };
    let id = seed_user(&context.database_url, "", " ").expect("seed user");

    let user = context
        .runtime
        .block_on(context.repository.find_by_id(user_id(id)))
        .expect("lookup succeeds")
        .expect("user exists");

    assert_eq!(user.id().get(), id);
}

#[rstest]
fn missing_table_is_a_query_error(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: missing_table_is_a_query_error skipped");
        return;
    };
    execute_sql(&context.database_url, "DROP TABLE users CASCADE").expect("drop users");

    let error = context
        .runtime
        .block_on(context.repository.find_by_id(user_id(1)))
        .expect_err("lookup fails without the table");

    assert!(matches!(error, UserRepositoryError::Query { .. }));
}
