//! Hit statistics aggregation for a single (lottery, issue).
//!
//! For one issue:
//!   1. Resolve the lottery in the catalog (unknown → error)
//!   2. Read the draw (pending → skip)
//!   3. Read every prediction row (none → skip)
//!   4. Resolve each row's play type; unknown ids keep their raw id as label
//!   5. Group by (forecaster, play type), score each row, roll up
//!   6. Upsert one row per group, last write wins
//!
//! The result is a pure function of the stored draw and predictions,
//! so running it again for the same issue leaves the same final state.

use crate::{
    config::LotteryCatalog,
    draw::Draw,
    error::StatResult,
    play_type::PlayTypeCatalog,
    rules::{count_partial, evaluate},
    store::StatStore,
    types::{ForecasterId, IssueId, LotteryId, PlayTypeId},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRow {
    pub lottery_id: LotteryId,
    pub issue_id: IssueId,
    pub forecaster_id: ForecasterId,
    pub play_type_id: PlayTypeId,
    /// Raw submitted numbers, usually comma-joined.
    pub numbers: String,
}

/// Persisted rollup. Unique per (lottery, issue, forecaster, play type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitStatRow {
    pub lottery_id: LotteryId,
    pub issue_id: IssueId,
    pub forecaster_id: ForecasterId,
    pub play_type_id: PlayTypeId,
    pub total_count: i64,
    pub hit_count: i64,
    pub hit_number_count: i64,
    /// `total_count / hit_count` to two decimals; `None` without hits.
    pub avg_hit_gap: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AggregateOutcome {
    Written { rows: usize },
    MissingDraw,
    NoPredictions,
}

// ── Aggregator ───────────────────────────────────────────────────────────────

pub struct HitStatAggregator<'a> {
    catalog: &'a LotteryCatalog,
    store: &'a StatStore,
}

impl<'a> HitStatAggregator<'a> {
    pub fn new(catalog: &'a LotteryCatalog, store: &'a StatStore) -> Self {
        Self { catalog, store }
    }

    pub fn aggregate(&self, lottery_id: &str, issue_id: &str) -> StatResult<AggregateOutcome> {
        let lottery = self.catalog.get(lottery_id)?;

        let Some(draw) = self.store.fetch_draw(lottery, issue_id)? else {
            log::info!("[{}] issue {issue_id}: no draw yet, skipped", lottery.name);
            return Ok(AggregateOutcome::MissingDraw);
        };

        let rows = self.store.predictions_for_issue(lottery, issue_id)?;
        if rows.is_empty() {
            log::info!("[{}] issue {issue_id}: no predictions, skipped", lottery.name);
            return Ok(AggregateOutcome::NoPredictions);
        }

        let play_types =
            PlayTypeCatalog::build(lottery, self.store.play_type_names(&lottery.lottery_id)?);
        let stats = compute_rollups(&draw, &rows, &play_types);
        let written = self.store.write_hit_stats(lottery, &stats)?;

        log::info!(
            "[{}] issue {issue_id}: {} predictions → {written} rollups",
            lottery.name,
            rows.len()
        );
        Ok(AggregateOutcome::Written { rows: written })
    }
}

#[derive(Default)]
struct Tally {
    total: i64,
    hits: i64,
    matched_numbers: i64,
}

/// Score every prediction against `draw` and roll them up per
/// (forecaster, play type), ordered by that key.
pub fn compute_rollups(
    draw: &Draw,
    rows: &[PredictionRow],
    play_types: &PlayTypeCatalog,
) -> Vec<HitStatRow> {
    let mut groups: BTreeMap<(ForecasterId, &str), Vec<&PredictionRow>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.forecaster_id, row.play_type_id.as_str()))
            .or_default()
            .push(row);
    }

    groups
        .into_iter()
        .map(|((forecaster_id, play_type_id), group)| {
            let play_type = play_types.resolve(play_type_id);
            let mut tally = Tally::default();
            for row in group {
                tally.total += 1;
                if evaluate(play_type.family, &row.numbers, &draw.primary, &draw.secondary) {
                    tally.hits += 1;
                }
                tally.matched_numbers += count_partial(&row.numbers, &draw.primary) as i64;
            }
            log::debug!(
                "forecaster {forecaster_id} / {}: {}/{} hits, {} numbers",
                play_type.name,
                tally.hits,
                tally.total,
                tally.matched_numbers
            );
            HitStatRow {
                lottery_id: draw.lottery_id.clone(),
                issue_id: draw.issue_id.clone(),
                forecaster_id,
                play_type_id: play_type_id.to_string(),
                total_count: tally.total,
                hit_count: tally.hits,
                hit_number_count: tally.matched_numbers,
                avg_hit_gap: avg_hit_gap(tally.total, tally.hits),
            }
        })
        .collect()
}

/// `total / hits` rounded to two decimals; undefined when nothing hit.
pub fn avg_hit_gap(total_count: i64, hit_count: i64) -> Option<f64> {
    if hit_count == 0 {
        return None;
    }
    let gap = total_count as f64 / hit_count as f64;
    Some((gap * 100.0).round() / 100.0)
}
