//! Backlog scheduling: decide which issues need aggregation and run them.
//!
//! Full mode re-aggregates every issue that has predictions, oldest first.
//! Incremental mode aggregates only
//!   (issues with a draw) ∩ (issues with predictions) − (issues with rollups)
//! where the rollup set is scoped to the lottery being processed.
//!
//! A failure on one issue is logged and counted; the batch continues.
//! Across lotteries the same holds: a lottery whose issue sets cannot be
//! read gets a report carrying the error, and the next lottery still runs.

use crate::{
    aggregator::{AggregateOutcome, HitStatAggregator},
    command::RunCommand,
    config::{LotteryCatalog, LotteryCatalogEntry},
    error::StatResult,
    store::StatStore,
    types::{IssueId, LotteryId},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogMode {
    Full,
    Incremental,
    SingleIssue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BacklogReport {
    pub lottery_id: LotteryId,
    pub lottery_name: String,
    pub mode: BacklogMode,
    pub issues_total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub rows_written: usize,
    pub failed_issues: Vec<IssueId>,
    /// Set when the lottery could not be scheduled at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BacklogReport {
    fn new(lottery: &LotteryCatalogEntry, mode: BacklogMode, issues_total: usize) -> Self {
        Self {
            lottery_id: lottery.lottery_id.clone(),
            lottery_name: lottery.name.clone(),
            mode,
            issues_total,
            processed: 0,
            skipped: 0,
            failed: 0,
            rows_written: 0,
            failed_issues: Vec::new(),
            error: None,
        }
    }
}

/// Issues that have a draw and predictions but no rollups yet, ascending.
pub fn incremental_issues(
    drawn: &BTreeSet<IssueId>,
    predicted: &BTreeSet<IssueId>,
    aggregated: &BTreeSet<IssueId>,
) -> Vec<IssueId> {
    drawn
        .intersection(predicted)
        .filter(|issue| !aggregated.contains(*issue))
        .cloned()
        .collect()
}

pub struct BacklogScheduler<'a> {
    catalog: &'a LotteryCatalog,
    store: &'a StatStore,
    aggregator: HitStatAggregator<'a>,
}

impl<'a> BacklogScheduler<'a> {
    pub fn new(catalog: &'a LotteryCatalog, store: &'a StatStore) -> Self {
        Self {
            catalog,
            store,
            aggregator: HitStatAggregator::new(catalog, store),
        }
    }

    /// Issues `mode` would aggregate for one lottery, in processing order.
    pub fn pending_issues(&self, lottery_id: &str, mode: BacklogMode) -> StatResult<Vec<IssueId>> {
        let lottery = self.catalog.get(lottery_id)?;
        match mode {
            BacklogMode::Full => self.store.prediction_issues(lottery),
            BacklogMode::Incremental => Ok(incremental_issues(
                &self.store.draw_issues(lottery)?,
                &self.store.prediction_issue_set(lottery)?,
                &self.store.aggregated_issues(lottery)?,
            )),
            // Single-issue runs name their issue explicitly.
            BacklogMode::SingleIssue => Ok(Vec::new()),
        }
    }

    pub fn run(&self, lottery_id: &str, mode: BacklogMode) -> StatResult<BacklogReport> {
        let lottery = self.catalog.get(lottery_id)?;
        let issues = self.pending_issues(lottery_id, mode)?;
        log::info!(
            "[{}] {:?}: {} issues to aggregate",
            lottery.name,
            mode,
            issues.len()
        );
        Ok(self.run_issues(lottery, mode, &issues))
    }

    pub fn run_issue(&self, lottery_id: &str, issue_id: &str) -> StatResult<BacklogReport> {
        let lottery = self.catalog.get(lottery_id)?;
        Ok(self.run_issues(lottery, BacklogMode::SingleIssue, &[issue_id.to_string()]))
    }

    /// Run `mode` for every catalog lottery, in catalog order. Every
    /// lottery gets a report, including those that fail to schedule.
    pub fn run_all(&self, mode: BacklogMode) -> Vec<BacklogReport> {
        self.catalog
            .entries()
            .iter()
            .map(|lottery| match self.run(&lottery.lottery_id, mode) {
                Ok(report) => report,
                Err(e) => {
                    log::warn!("[{}] {:?} aborted: {e}", lottery.name, mode);
                    BacklogReport {
                        error: Some(e.to_string()),
                        ..BacklogReport::new(lottery, mode, 0)
                    }
                }
            })
            .collect()
    }

    /// Execute a parsed invocation. Lottery names are resolved before any
    /// issue is touched, so an unknown lottery aborts with nothing written.
    pub fn dispatch(&self, command: &RunCommand) -> StatResult<Vec<BacklogReport>> {
        match command {
            RunCommand::BackfillAll => Ok(self.run_all(BacklogMode::Full)),
            RunCommand::IncrementalAll => Ok(self.run_all(BacklogMode::Incremental)),
            RunCommand::Backfill { lottery } => {
                let id = &self.catalog.resolve(lottery)?.lottery_id;
                Ok(vec![self.run(id, BacklogMode::Full)?])
            }
            RunCommand::Incremental { lottery } => {
                let id = &self.catalog.resolve(lottery)?.lottery_id;
                Ok(vec![self.run(id, BacklogMode::Incremental)?])
            }
            RunCommand::SingleIssue { lottery, issue_id } => {
                let id = &self.catalog.resolve(lottery)?.lottery_id;
                Ok(vec![self.run_issue(id, issue_id)?])
            }
        }
    }

    fn run_issues(
        &self,
        lottery: &LotteryCatalogEntry,
        mode: BacklogMode,
        issues: &[IssueId],
    ) -> BacklogReport {
        let mut report = BacklogReport::new(lottery, mode, issues.len());
        for (idx, issue_id) in issues.iter().enumerate() {
            log::debug!("[{}] [{}/{}] issue {issue_id}", lottery.name, idx + 1, issues.len());
            match self.aggregator.aggregate(&lottery.lottery_id, issue_id) {
                Ok(AggregateOutcome::Written { rows }) => {
                    report.processed += 1;
                    report.rows_written += rows;
                }
                Ok(_) => report.skipped += 1,
                Err(e) => {
                    log::warn!("[{}] issue {issue_id} failed: {e}", lottery.name);
                    report.failed += 1;
                    report.failed_issues.push(issue_id.clone());
                }
            }
        }
        log::info!(
            "[{}] {:?} done: {} processed, {} skipped, {} failed",
            lottery.name,
            mode,
            report.processed,
            report.skipped,
            report.failed
        );
        report
    }
}
