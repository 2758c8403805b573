use std::sync::Arc;

use anyhow::{Result, anyhow};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tokio::sync::Mutex;

use crate::store::memory::MemoryLedgerStore;
use crate::utils::commons::DbPool;

const DEFAULT_POOL_SIZE: u32 = 10;
const MEMORY_DATABASE_URL: &str = "memory://";

/// Where records live. Postgres in production; the in-memory store backs
/// tests and `DATABASE_URL=memory://` demo runs.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Postgres(DbPool),
    Memory(Arc<Mutex<MemoryLedgerStore>>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
}

impl AppConfig {
    pub fn new(pool: DbPool) -> Self {
        Self {
            store: StoreBackend::Postgres(pool),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            store: StoreBackend::Memory(Arc::new(Mutex::new(MemoryLedgerStore::new()))),
        }
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow!("DATABASE_URL must be set in .env file or environment variables"))?;

        let pool_size = match std::env::var("DATABASE_POOL_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| anyhow!("DATABASE_POOL_SIZE must be a positive integer, got '{}'", raw))?,
            Err(_) => DEFAULT_POOL_SIZE,
        };

        Self::from_database_url(&database_url, pool_size)
    }

    pub fn from_database_url(database_url: &str, pool_size: u32) -> Result<Self> {
        if database_url == MEMORY_DATABASE_URL {
            tracing::warn!("Using in-memory store, records will not survive a restart");
            return Ok(Self::in_memory());
        }

        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        Ok(Self::new(pool))
    }
}
