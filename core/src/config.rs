//! Lottery catalog: static configuration loaded once at startup.
//!
//! Each entry names the per-lottery tables through its `table_code`.
//! The code is interpolated into SQL, so it is validated on load.

use crate::{
    error::{StatError, StatResult},
    types::LotteryId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Draw structure of a lottery. Decides which play-type labels exist
/// and how position-based families index into the draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LotteryKind {
    /// Three digits 0-9 (Fucai 3D, Pailie 3).
    ThreeDigit,
    /// Five digits 0-9 (Pailie 5).
    FiveDigit,
    /// Twenty numbers drawn from 1-80 (Kuaile 8).
    Keno,
    /// Six red balls plus one blue ball (Shuangseqiu).
    RedBlue,
    /// Five front-area plus two back-area balls (Daletou).
    FrontBack,
}

impl LotteryKind {
    /// Numbers strictly above this count as "big" in a draw summary.
    pub fn big_threshold(self) -> u32 {
        match self {
            LotteryKind::ThreeDigit | LotteryKind::FiveDigit => 5,
            LotteryKind::Keno      => 40,
            LotteryKind::RedBlue   => 16,
            LotteryKind::FrontBack => 17,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotteryCatalogEntry {
    pub lottery_id: LotteryId,
    pub name: String,
    pub table_code: String,
    pub kind: LotteryKind,
    pub has_secondary_draw: bool,
}

impl LotteryCatalogEntry {
    pub fn prediction_table(&self) -> String {
        format!("expert_predictions_{}", self.table_code)
    }

    pub fn result_table(&self) -> String {
        format!("lottery_results_{}", self.table_code)
    }

    pub fn hit_stat_table(&self) -> String {
        format!("expert_hit_stat_{}", self.table_code)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LotteriesFile {
    lotteries: Vec<LotteryCatalogEntry>,
}

#[derive(Debug, Clone)]
pub struct LotteryCatalog {
    entries: Vec<LotteryCatalogEntry>,
}

impl LotteryCatalog {
    /// Build a catalog, rejecting duplicate ids and unsafe table codes.
    pub fn from_entries(entries: Vec<LotteryCatalogEntry>) -> StatResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.lottery_id.as_str()) {
                return Err(StatError::Config(format!(
                    "duplicate lottery id '{}'",
                    entry.lottery_id
                )));
            }
            let code_ok = !entry.table_code.is_empty()
                && entry
                    .table_code
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
            if !code_ok {
                return Err(StatError::Config(format!(
                    "invalid table code '{}' for lottery '{}'",
                    entry.table_code, entry.lottery_id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Load the catalog from `{data_dir}/lotteries.json`.
    pub fn load(data_dir: &str) -> StatResult<Self> {
        let path = format!("{data_dir}/lotteries.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| StatError::Config(format!("Cannot read {path}: {e}")))?;
        let file: LotteriesFile = serde_json::from_str(&content)?;
        let catalog = Self::from_entries(file.lotteries)?;
        log::info!("Loaded {} lotteries from {path}", catalog.entries.len());
        Ok(catalog)
    }

    /// The six lotteries the prediction feeds cover.
    pub fn builtin() -> Self {
        let entry = |id: &str, name: &str, code: &str, kind: LotteryKind| LotteryCatalogEntry {
            lottery_id: id.into(),
            name: name.into(),
            table_code: code.into(),
            kind,
            has_secondary_draw: matches!(kind, LotteryKind::RedBlue | LotteryKind::FrontBack),
        };
        Self {
            entries: vec![
                entry("6",  "福彩3D", "3d",  LotteryKind::ThreeDigit),
                entry("63", "排列3",  "p3",  LotteryKind::ThreeDigit),
                entry("64", "排列5",  "p5",  LotteryKind::FiveDigit),
                entry("8",  "快乐8",  "klb", LotteryKind::Keno),
                entry("5",  "双色球", "ssq", LotteryKind::RedBlue),
                entry("39", "大乐透", "dlt", LotteryKind::FrontBack),
            ],
        }
    }

    pub fn entries(&self) -> &[LotteryCatalogEntry] {
        &self.entries
    }

    pub fn get(&self, lottery_id: &str) -> StatResult<&LotteryCatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.lottery_id == lottery_id)
            .ok_or_else(|| StatError::UnknownLottery {
                lottery: lottery_id.to_string(),
            })
    }

    /// Look a lottery up by id first, then by human name.
    pub fn resolve(&self, id_or_name: &str) -> StatResult<&LotteryCatalogEntry> {
        self.get(id_or_name).or_else(|_| {
            self.entries
                .iter()
                .find(|e| e.name == id_or_name)
                .ok_or_else(|| StatError::UnknownLottery {
                    lottery: id_or_name.to_string(),
                })
        })
    }
}
