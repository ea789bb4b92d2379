use super::StatStore;
use crate::{error::StatResult, types::PlayTypeId};
use rusqlite::params;

impl StatStore {
    // ── Play-type catalog ──────────────────────────────────────

    pub fn upsert_play_type(
        &self,
        lottery_id: &str,
        play_type_id: &str,
        name: &str,
    ) -> StatResult<()> {
        self.conn.execute(
            "INSERT INTO play_type_catalog (lottery_id, play_type_id, name)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(lottery_id, play_type_id) DO UPDATE SET name = excluded.name",
            params![lottery_id, play_type_id, name],
        )?;
        Ok(())
    }

    pub fn play_type_names(&self, lottery_id: &str) -> StatResult<Vec<(PlayTypeId, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT play_type_id, name FROM play_type_catalog
             WHERE lottery_id = ?1 ORDER BY play_type_id ASC",
        )?;
        let names = stmt
            .query_map(params![lottery_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}
