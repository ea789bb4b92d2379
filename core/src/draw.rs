//! Official draw results as read from the per-lottery results table.

use crate::{
    config::LotteryKind,
    numbers::parse_numbers,
    types::{IssueId, LotteryId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub lottery_id: LotteryId,
    pub issue_id: IssueId,
    /// Drawn numbers in draw order. Positional families index into this.
    pub primary: Vec<u32>,
    /// Blue ball / back area. Empty for single-pool lotteries.
    pub secondary: Vec<u32>,
}

impl Draw {
    pub fn from_codes(
        lottery_id: &str,
        issue_id: &str,
        open_code: &str,
        blue_code: Option<&str>,
    ) -> Self {
        Self {
            lottery_id: lottery_id.to_string(),
            issue_id: issue_id.to_string(),
            primary: parse_numbers(open_code),
            secondary: blue_code.map(parse_numbers).unwrap_or_default(),
        }
    }

    pub fn summary(&self, kind: LotteryKind) -> Option<DrawSummary> {
        DrawSummary::of(&self.primary, kind)
    }
}

/// Shape statistics of a primary draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawSummary {
    pub sum: u64,
    pub span: u32,
    pub odd_even_ratio: String,
    pub big_small_ratio: String,
}

impl DrawSummary {
    pub fn of(numbers: &[u32], kind: LotteryKind) -> Option<Self> {
        let max = *numbers.iter().max()?;
        let min = *numbers.iter().min()?;
        let odd = numbers.iter().filter(|&&n| n % 2 == 1).count();
        let big = numbers.iter().filter(|&&n| n > kind.big_threshold()).count();
        Some(Self {
            sum: numbers.iter().map(|&n| u64::from(n)).sum(),
            span: max - min,
            odd_even_ratio: format!("{odd}:{}", numbers.len() - odd),
            big_small_ratio: format!("{big}:{}", numbers.len() - big),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_digit_draw() {
        let draw = Draw::from_codes("6", "2024001", "1,6,9", None);
        let summary = draw.summary(LotteryKind::ThreeDigit).unwrap();
        assert_eq!(summary.sum, 16);
        assert_eq!(summary.span, 8);
        assert_eq!(summary.odd_even_ratio, "2:1");
        assert_eq!(summary.big_small_ratio, "2:1");
    }

    #[test]
    fn sum_of_oversized_numbers_does_not_wrap() {
        let draw = Draw::from_codes("8", "2024001", "4294967295,1", None);
        let summary = draw.summary(LotteryKind::Keno).unwrap();
        assert_eq!(draw.primary, vec![u32::MAX, 1]);
        assert_eq!(summary.sum, 4_294_967_296);
        assert_eq!(summary.span, u32::MAX - 1);
    }

    #[test]
    fn empty_draw_has_no_summary() {
        assert!(DrawSummary::of(&[], LotteryKind::Keno).is_none());
    }
}
