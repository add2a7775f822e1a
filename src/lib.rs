pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::candidate_service::CandidateService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub candidate_service: CandidateService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let candidate_service = CandidateService::new(pool.clone());

        Self {
            pool,
            candidate_service,
        }
    }
}
