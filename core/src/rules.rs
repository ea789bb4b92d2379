//! Hit rules: the pure scoring functions.
//!
//! `evaluate` decides whether one submission hits a draw under its play
//! family. `count_partial` counts individually matched numbers and is
//! independent of the hit decision. Both are total: any input, including
//! garbage submissions and short draws, produces an answer.

use crate::{numbers::number_set, play_type::PlayFamily};
use std::collections::BTreeSet;

pub fn evaluate(family: PlayFamily, submitted: &str, primary: &[u32], secondary: &[u32]) -> bool {
    let picks = number_set(submitted);
    if picks.is_empty() {
        return false;
    }
    let drawn: BTreeSet<u32> = primary.iter().copied().collect();
    let overlap = picks.intersection(&drawn).count();

    match family {
        PlayFamily::Dantou { picks: needed } => overlap >= needed,
        PlayFamily::RankedCodes { codes } => overlap >= codes,
        PlayFamily::EdgePair => overlap >= 2,
        PlayFamily::FullCover { .. } => !drawn.is_empty() && drawn.is_subset(&picks),
        PlayFamily::Kill { .. } | PlayFamily::KillCodes { .. } => overlap == 0,
        PlayFamily::KillBelowThree => overlap < 3,
        PlayFamily::SecondaryCover { .. } => {
            let back: BTreeSet<u32> = secondary.iter().copied().collect();
            !back.is_empty() && back.is_subset(&picks)
        }
        PlayFamily::SecondaryKill { .. } => {
            let back: BTreeSet<u32> = secondary.iter().copied().collect();
            !back.is_empty() && back.is_disjoint(&picks)
        }
        PlayFamily::PositionKill(position) => position
            .index_in(primary.len())
            .is_some_and(|i| !picks.contains(&primary[i])),
        PlayFamily::PositionFix(position) => position
            .index_in(primary.len())
            .is_some_and(|i| picks.contains(&primary[i])),
        PlayFamily::GroupAware { .. } => {
            if primary.len() != 3 && primary.len() != 5 {
                return false;
            }
            match drawn.len() {
                // Triplet: the single repeated digit decides.
                1 => picks.contains(&primary[0]),
                // Group-of-three: two distinct digits, both must be covered.
                2 => overlap >= 2,
                _ => overlap == 3,
            }
        }
        PlayFamily::Unrecognized => false,
    }
}

/// Number of distinct submitted numbers that appear in the primary draw.
pub fn count_partial(submitted: &str, primary: &[u32]) -> usize {
    let picks = number_set(submitted);
    if picks.is_empty() {
        return 0;
    }
    let drawn: BTreeSet<u32> = primary.iter().copied().collect();
    picks.intersection(&drawn).count()
}
