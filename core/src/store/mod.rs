//! SQLite persistence layer.
//!
//! RULE: Only the store module talks to the database.
//! The aggregator and scheduler call store methods; they never execute SQL directly.
//!
//! Per-lottery table names come from `LotteryCatalogEntry`, whose table
//! code is validated when the catalog is built.

use crate::{config::LotteryCatalog, error::StatResult};
mod draws;
mod hit_stat;
mod play_types;
mod predictions;
use rusqlite::Connection;

pub struct StatStore {
    conn: Connection,
}

impl StatStore {
    pub fn open(path: &str) -> StatResult<Self> {
        let conn = Connection::open(path)?;
        // WAL only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> StatResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create the shared catalog table and every lottery's tables.
    /// Safe to run repeatedly.
    pub fn migrate(&self, catalog: &LotteryCatalog) -> StatResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_catalog.sql"))?;
        for lottery in catalog.entries() {
            let ddl = include_str!("../../../migrations/002_lottery_tables.sql")
                .replace("{code}", &lottery.table_code);
            self.conn.execute_batch(&ddl)?;
            log::debug!("Tables ready for {} ({})", lottery.name, lottery.table_code);
        }
        Ok(())
    }

    /// Run raw SQL. Only for fixtures and admin tooling.
    pub fn execute_batch(&self, sql: &str) -> StatResult<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }
}
