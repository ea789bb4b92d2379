use super::StatStore;
use crate::{
    aggregator::PredictionRow, config::LotteryCatalogEntry, error::StatResult, types::IssueId,
};
use rusqlite::params;
use std::collections::BTreeSet;

impl StatStore {
    // ── Predictions ────────────────────────────────────────────

    pub fn insert_prediction(
        &self,
        lottery: &LotteryCatalogEntry,
        row: &PredictionRow,
    ) -> StatResult<()> {
        self.conn.execute(
            &format!(
                "INSERT INTO {} (issue_id, forecaster_id, play_type_id, numbers)
                 VALUES (?1, ?2, ?3, ?4)",
                lottery.prediction_table()
            ),
            params![&row.issue_id, row.forecaster_id, &row.play_type_id, &row.numbers],
        )?;
        Ok(())
    }

    pub fn predictions_for_issue(
        &self,
        lottery: &LotteryCatalogEntry,
        issue_id: &str,
    ) -> StatResult<Vec<PredictionRow>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT issue_id, forecaster_id, play_type_id, numbers
             FROM {} WHERE issue_id = ?1
             ORDER BY id ASC",
            lottery.prediction_table()
        ))?;
        let rows = stmt
            .query_map(params![issue_id], |row| {
                Ok(PredictionRow {
                    lottery_id: lottery.lottery_id.clone(),
                    issue_id: row.get(0)?,
                    forecaster_id: row.get(1)?,
                    play_type_id: row.get(2)?,
                    numbers: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every issue with at least one prediction, oldest first.
    pub fn prediction_issues(&self, lottery: &LotteryCatalogEntry) -> StatResult<Vec<IssueId>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT DISTINCT issue_id FROM {} ORDER BY issue_id ASC",
            lottery.prediction_table()
        ))?;
        let issues = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    pub fn prediction_issue_set(
        &self,
        lottery: &LotteryCatalogEntry,
    ) -> StatResult<BTreeSet<IssueId>> {
        Ok(self.prediction_issues(lottery)?.into_iter().collect())
    }
}
