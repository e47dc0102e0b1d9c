//! Builders for the HTTP state's translator command/query pair.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use translator_backend::domain::TranslatorService;
use translator_backend::domain::ports::{
    FixtureTranslatorCommand, FixtureTranslatorQuery, TranslatorCommand, TranslatorQuery,
};
use translator_backend::inbound::http::state::HttpState;
use translator_backend::outbound::persistence::{
    DbPool, DieselAddressRepository, DieselTranslatorRepository, DieselUserRepository,
};

use super::ServerConfig;

type TranslatorPorts = (Arc<dyn TranslatorCommand>, Arc<dyn TranslatorQuery>);

/// Build a command/query pair using the real service when a pool is
/// available, otherwise using fixture implementations.
fn build_service_pair<Pool, S>(
    pool: &Option<Pool>,
    make_service: impl FnOnce(&Pool) -> S,
) -> TranslatorPorts
where
    S: TranslatorCommand + TranslatorQuery + 'static,
{
    match pool {
        Some(pool) => {
            let service = Arc::new(make_service(pool));
            (
                service.clone() as Arc<dyn TranslatorCommand>,
                service as Arc<dyn TranslatorQuery>,
            )
        }
        None => {
            warn!("no database configured; translator mutations will answer 503");
            (
                Arc::new(FixtureTranslatorCommand),
                Arc::new(FixtureTranslatorQuery),
            )
        }
    }
}

type DieselTranslatorService =
    TranslatorService<DieselUserRepository, DieselAddressRepository, DieselTranslatorRepository>;

fn diesel_service(pool: &DbPool) -> DieselTranslatorService {
    TranslatorService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselAddressRepository::new(pool.clone())),
        Arc::new(DieselTranslatorRepository::new(pool.clone())),
    )
}

/// Build the shared HTTP state from the configured pool or fixtures.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (translators, translators_query) = build_service_pair(&config.db_pool, diesel_service);
    web::Data::new(
        HttpState::new(translators, translators_query).with_empty_list_policy(config.empty_list),
    )
}
