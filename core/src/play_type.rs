//! Play types and the hit families they belong to.
//!
//! A play type's label is mapped to a `PlayFamily` exactly once, when the
//! catalog for a lottery is built. Labels are matched whole first. The
//! positional and keno labels are parsed from a fixed prefix, and
//! two-pool labels outside the fixed list are read as an area marker
//! followed by one family token. The tokens of one area never contain
//! each other, so "红球杀三" and "红球杀六" can never shadow each other.

use crate::{
    config::{LotteryCatalogEntry, LotteryKind},
    types::{LotteryId, PlayTypeId},
};
use std::collections::HashMap;

/// Place value of a digit in a 3- or 5-digit draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    TenThousands,
    Thousands,
    Hundreds,
    Tens,
    Units,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::TenThousands,
        Position::Thousands,
        Position::Hundreds,
        Position::Tens,
        Position::Units,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::TenThousands => "万位",
            Position::Thousands    => "千位",
            Position::Hundreds     => "百位",
            Position::Tens         => "十位",
            Position::Units        => "个位",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Index of this place in a draw of `len` digits, counted from the
    /// left. Only 3- and 5-digit draws have positions.
    pub fn index_in(self, len: usize) -> Option<usize> {
        if len != 3 && len != 5 {
            return None;
        }
        let place = match self {
            Position::Units        => 0,
            Position::Tens         => 1,
            Position::Hundreds     => 2,
            Position::Thousands    => 3,
            Position::TenThousands => 4,
        };
        (place < len).then(|| len - 1 - place)
    }
}

/// The matching rule a play type is scored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayFamily {
    /// At least `picks` submitted numbers appear in the primary draw.
    Dantou { picks: usize },
    /// The whole primary draw must be contained in the submission.
    FullCover { codes: usize },
    /// No submitted number may appear in the primary draw.
    Kill { codes: usize },
    /// Fewer than three submitted numbers appear in the primary draw.
    KillBelowThree,
    /// Dragon-head / phoenix-tail two-number picks: at least two matches.
    EdgePair,
    /// Keno "K码": at least `codes` matches.
    RankedCodes { codes: usize },
    /// Keno "杀K码": no matches. `codes` is display only.
    KillCodes { codes: usize },
    /// The whole secondary draw must be contained in the submission.
    SecondaryCover { codes: usize },
    /// No submitted number may appear in the secondary draw.
    SecondaryKill { codes: usize },
    /// The drawn digit at this position must be absent from the submission.
    PositionKill(Position),
    /// The drawn digit at this position must be present in the submission.
    PositionFix(Position),
    /// 三胆 and the 5/6/7-code digit picks; threshold depends on the
    /// draw's structure (triplet, group-of-three, or all distinct).
    GroupAware { codes: usize },
    /// Label not recognised for this lottery. Never hits.
    Unrecognized,
}

impl PlayFamily {
    pub fn resolve(kind: LotteryKind, label: &str) -> Self {
        let label = label.trim();
        match kind {
            LotteryKind::ThreeDigit | LotteryKind::FiveDigit => resolve_digit(label),
            LotteryKind::Keno => resolve_keno(label),
            LotteryKind::RedBlue | LotteryKind::FrontBack => resolve_two_pool(label),
        }
    }
}

fn resolve_digit(label: &str) -> PlayFamily {
    match label {
        "独胆" => PlayFamily::Dantou { picks: 1 },
        "双胆" => PlayFamily::Dantou { picks: 2 },
        "三胆" => PlayFamily::GroupAware { codes: 3 },
        "五码" => PlayFamily::GroupAware { codes: 5 },
        "六码" => PlayFamily::GroupAware { codes: 6 },
        "七码" => PlayFamily::GroupAware { codes: 7 },
        "杀一" => PlayFamily::Kill { codes: 1 },
        "杀二" => PlayFamily::Kill { codes: 2 },
        _ => resolve_position(label).unwrap_or(PlayFamily::Unrecognized),
    }
}

fn resolve_position(label: &str) -> Option<PlayFamily> {
    // "定位3*3*3-百位": fixed digit at the place named after the last dash.
    if label.starts_with("定位") {
        let (_, place) = label.rsplit_once('-')?;
        return Position::from_label(place).map(PlayFamily::PositionFix);
    }
    // "百位定3", "万位杀1"
    Position::ALL.into_iter().find_map(|position| {
        let rest = label.strip_prefix(position.label())?;
        if rest.starts_with('定') {
            Some(PlayFamily::PositionFix(position))
        } else if rest.starts_with('杀') {
            Some(PlayFamily::PositionKill(position))
        } else {
            None
        }
    })
}

fn resolve_keno(label: &str) -> PlayFamily {
    if let Some(codes) = label.strip_prefix('杀').and_then(code_count) {
        return PlayFamily::KillCodes { codes };
    }
    code_count(label)
        .map(|codes| PlayFamily::RankedCodes { codes })
        .unwrap_or(PlayFamily::Unrecognized)
}

/// "12码" → 12. The whole label must be digits followed by 码.
fn code_count(label: &str) -> Option<usize> {
    let digits = label.strip_suffix('码')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&n| n > 0)
}

fn resolve_two_pool(label: &str) -> PlayFamily {
    match label {
        "红球独胆" => PlayFamily::Dantou { picks: 1 },
        "红球双胆" => PlayFamily::Dantou { picks: 2 },
        "红球三胆" => PlayFamily::Dantou { picks: 3 },
        "红球12码" => PlayFamily::FullCover { codes: 12 },
        "红球20码" => PlayFamily::FullCover { codes: 20 },
        "红球25码" => PlayFamily::FullCover { codes: 25 },
        "红球杀三" => PlayFamily::Kill { codes: 3 },
        "红球杀六" => PlayFamily::Kill { codes: 6 },
        "龙头两码" | "凤尾两码" => PlayFamily::EdgePair,
        "蓝球定三" => PlayFamily::SecondaryCover { codes: 3 },
        "蓝球定五" => PlayFamily::SecondaryCover { codes: 5 },
        "蓝球杀五" => PlayFamily::SecondaryKill { codes: 5 },
        _ => resolve_area_label(label).unwrap_or(PlayFamily::Unrecognized),
    }
}

const RED_AREA: &str = "红球";
const BLUE_AREA: &str = "蓝球";

const RED_TOKENS: &[(&str, PlayFamily)] = &[
    ("独胆", PlayFamily::Dantou { picks: 1 }),
    ("双胆", PlayFamily::Dantou { picks: 2 }),
    ("三胆", PlayFamily::Dantou { picks: 3 }),
    ("12码", PlayFamily::FullCover { codes: 12 }),
    ("20码", PlayFamily::FullCover { codes: 20 }),
    ("25码", PlayFamily::FullCover { codes: 25 }),
    ("杀三", PlayFamily::KillBelowThree),
    ("杀六", PlayFamily::Kill { codes: 6 }),
];

const BLUE_TOKENS: &[(&str, PlayFamily)] = &[
    ("定三", PlayFamily::SecondaryCover { codes: 3 }),
    ("定五", PlayFamily::SecondaryCover { codes: 5 }),
    ("杀五", PlayFamily::SecondaryKill { codes: 5 }),
];

/// Labels outside the fixed list, e.g. "前区红球独胆" or "红球杀三码".
/// The area marker picks the token table (red before edge before blue)
/// and the family token must follow the marker. "杀三" here keeps up to
/// two red hits as a pass.
fn resolve_area_label(label: &str) -> Option<PlayFamily> {
    if let Some(at) = label.find(RED_AREA) {
        return family_token(&label[at + RED_AREA.len()..], RED_TOKENS);
    }
    if label.contains("龙头") || label.contains("凤尾") {
        return Some(PlayFamily::EdgePair);
    }
    let at = label.find(BLUE_AREA)?;
    family_token(&label[at + BLUE_AREA.len()..], BLUE_TOKENS)
}

/// Longest token present in `rest`; ties go to the earlier table entry.
fn family_token(rest: &str, tokens: &[(&str, PlayFamily)]) -> Option<PlayFamily> {
    let mut best: Option<(usize, PlayFamily)> = None;
    for &(token, family) in tokens {
        let len = token.chars().count();
        if rest.contains(token) && best.map_or(true, |(best_len, _)| len > best_len) {
            best = Some((len, family));
        }
    }
    best.map(|(_, family)| family)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayType {
    pub lottery_id: LotteryId,
    pub play_type_id: PlayTypeId,
    pub name: String,
    pub family: PlayFamily,
}

/// Play types of one lottery, keyed by id, with families pre-resolved.
#[derive(Debug, Clone)]
pub struct PlayTypeCatalog {
    lottery_id: LotteryId,
    kind: LotteryKind,
    by_id: HashMap<PlayTypeId, PlayType>,
}

impl PlayTypeCatalog {
    pub fn build(
        lottery: &LotteryCatalogEntry,
        names: impl IntoIterator<Item = (PlayTypeId, String)>,
    ) -> Self {
        let by_id = names
            .into_iter()
            .map(|(play_type_id, name)| {
                let family = PlayFamily::resolve(lottery.kind, &name);
                if family == PlayFamily::Unrecognized {
                    log::debug!(
                        "[{}] play type {play_type_id} '{name}' has no hit rule",
                        lottery.name
                    );
                }
                let play_type = PlayType {
                    lottery_id: lottery.lottery_id.clone(),
                    play_type_id: play_type_id.clone(),
                    name,
                    family,
                };
                (play_type_id, play_type)
            })
            .collect();
        Self {
            lottery_id: lottery.lottery_id.clone(),
            kind: lottery.kind,
            by_id,
        }
    }

    pub fn get(&self, play_type_id: &str) -> Option<&PlayType> {
        self.by_id.get(play_type_id)
    }

    /// The catalog entry for `play_type_id`, or a stand-in labelled with
    /// the raw id when the catalog has no such entry.
    pub fn resolve(&self, play_type_id: &str) -> PlayType {
        self.get(play_type_id).cloned().unwrap_or_else(|| PlayType {
            lottery_id: self.lottery_id.clone(),
            play_type_id: play_type_id.to_string(),
            name: play_type_id.to_string(),
            family: PlayFamily::resolve(self.kind, play_type_id),
        })
    }
}
