use super::StatStore;
use crate::{config::LotteryCatalogEntry, draw::Draw, error::StatResult, types::IssueId};
use rusqlite::{params, OptionalExtension};
use std::collections::BTreeSet;

impl StatStore {
    // ── Draw results ───────────────────────────────────────────

    pub fn insert_draw(
        &self,
        lottery: &LotteryCatalogEntry,
        issue_id: &str,
        open_code: &str,
        blue_code: Option<&str>,
    ) -> StatResult<()> {
        self.conn.execute(
            &format!(
                "INSERT INTO {} (issue_id, open_code, blue_code) VALUES (?1, ?2, ?3)
                 ON CONFLICT(issue_id) DO UPDATE SET
                    open_code = excluded.open_code,
                    blue_code = excluded.blue_code",
                lottery.result_table()
            ),
            params![issue_id, open_code, blue_code],
        )?;
        Ok(())
    }

    /// The draw for one issue, or `None` while it is still pending.
    /// The blue code is only read for lotteries that have a second pool.
    pub fn fetch_draw(
        &self,
        lottery: &LotteryCatalogEntry,
        issue_id: &str,
    ) -> StatResult<Option<Draw>> {
        let blue_col = if lottery.has_secondary_draw { "blue_code" } else { "NULL" };
        let codes = self
            .conn
            .query_row(
                &format!(
                    "SELECT open_code, {blue_col} FROM {} WHERE issue_id = ?1",
                    lottery.result_table()
                ),
                params![issue_id],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?)),
            )
            .optional()?;
        Ok(codes.map(|(open_code, blue_code)| {
            Draw::from_codes(&lottery.lottery_id, issue_id, &open_code, blue_code.as_deref())
        }))
    }

    pub fn draw_issues(&self, lottery: &LotteryCatalogEntry) -> StatResult<BTreeSet<IssueId>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT DISTINCT issue_id FROM {}", lottery.result_table()))?;
        let issues = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(issues)
    }
}
