use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};

use crate::conf::Settings;
use crate::prelude::Result;

pub fn db_pool(settings: &Settings) -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

/// Composition root: configuration and the connection pool are built once
/// at startup and handed to the router, never read from globals.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<AppState> {
        let pool = db_pool(&settings)?;
        Ok(AppState {
            db_pool: Arc::new(pool),
            settings: Arc::new(settings),
        })
    }
}
