use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::utils::commons::DbPool;
use crate::utils::errors::TrackerResult;

pub fn get_conn(pool: &DbPool) -> TrackerResult<PooledConnection<ConnectionManager<PgConnection>>> {
    let conn = pool.get()?;

    Ok(conn)
}
