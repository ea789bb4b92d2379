use super::StatStore;
use crate::{
    aggregator::HitStatRow, config::LotteryCatalogEntry, error::StatResult, types::IssueId,
};
use rusqlite::params;
use std::collections::BTreeSet;

fn hit_stat_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<HitStatRow> {
    Ok(HitStatRow {
        lottery_id: row.get(0)?,
        issue_id: row.get(1)?,
        forecaster_id: row.get(2)?,
        play_type_id: row.get(3)?,
        total_count: row.get(4)?,
        hit_count: row.get(5)?,
        hit_number_count: row.get(6)?,
        avg_hit_gap: row.get(7)?,
    })
}

impl StatStore {
    // ── Hit statistics ─────────────────────────────────────────

    /// Upsert one issue's rollups in a single transaction. Existing rows
    /// for the same (lottery, issue, forecaster, play type) are overwritten.
    pub fn write_hit_stats(
        &self,
        lottery: &LotteryCatalogEntry,
        rows: &[HitStatRow],
    ) -> StatResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} (
                    lottery_id, issue_id, forecaster_id, play_type_id,
                    total_count, hit_count, hit_number_count, avg_hit_gap
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(lottery_id, issue_id, forecaster_id, play_type_id) DO UPDATE SET
                    total_count      = excluded.total_count,
                    hit_count        = excluded.hit_count,
                    hit_number_count = excluded.hit_number_count,
                    avg_hit_gap      = excluded.avg_hit_gap",
                lottery.hit_stat_table()
            ))?;
            for row in rows {
                stmt.execute(params![
                    &row.lottery_id,
                    &row.issue_id,
                    row.forecaster_id,
                    &row.play_type_id,
                    row.total_count,
                    row.hit_count,
                    row.hit_number_count,
                    row.avg_hit_gap,
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    /// Issues that already have rollups for this lottery.
    pub fn aggregated_issues(&self, lottery: &LotteryCatalogEntry) -> StatResult<BTreeSet<IssueId>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT issue_id FROM {} WHERE lottery_id = ?1",
            lottery.hit_stat_table()
        ))?;
        let issues = stmt
            .query_map(params![&lottery.lottery_id], |row| row.get::<_, String>(0))?
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(issues)
    }

    pub fn hit_stats_for_issue(
        &self,
        lottery: &LotteryCatalogEntry,
        issue_id: &str,
    ) -> StatResult<Vec<HitStatRow>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT lottery_id, issue_id, forecaster_id, play_type_id,
                    total_count, hit_count, hit_number_count, avg_hit_gap
             FROM {} WHERE lottery_id = ?1 AND issue_id = ?2
             ORDER BY forecaster_id ASC, play_type_id ASC",
            lottery.hit_stat_table()
        ))?;
        let rows = stmt
            .query_map(params![&lottery.lottery_id, issue_id], hit_stat_row_mapper)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn hit_stat_count(&self, lottery: &LotteryCatalogEntry) -> StatResult<i64> {
        self.conn
            .query_row(
                &format!(
                    "SELECT COUNT(*) FROM {} WHERE lottery_id = ?1",
                    lottery.hit_stat_table()
                ),
                params![&lottery.lottery_id],
                |row| row.get(0),
            )
            .map_err(Into::into)
    }
}
