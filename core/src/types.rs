//! Shared primitive types used across the whole crate.

/// Catalog identifier of a lottery, e.g. "6" for Fucai 3D.
pub type LotteryId = String;

/// One draw period. Scoped to a lottery, not globally unique.
pub type IssueId = String;

/// The party that submitted a prediction row.
pub type ForecasterId = i64;

/// Play-type identifier as stored on prediction rows.
pub type PlayTypeId = String;
