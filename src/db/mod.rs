pub mod initialize;
pub mod pool;
pub mod queries;

use crate::config::Config;
use crate::errors::AppResult;
use self::pool::DbPool;

/// Open the configured database and make sure the schema exists.
pub fn open(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    initialize::init_db(&pool.conn)?;
    Ok(pool)
}
