//! Hit rules: every play family, scored against literal draws.

use hitstat_core::{
    config::LotteryKind,
    numbers::parse_numbers,
    play_type::{PlayFamily, Position},
    rules::{count_partial, evaluate},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn hits(family: PlayFamily, submitted: &str, open_code: &str) -> bool {
    evaluate(family, submitted, &parse_numbers(open_code), &[])
}

const GROUP_THREE: PlayFamily = PlayFamily::GroupAware { codes: 3 };

// ── Group-aware digit picks ──────────────────────────────────────────────────

/// A triplet draw (5,5,5) hits when the submission contains the repeated digit.
#[test]
fn triplet_draw_hits_iff_the_repeated_digit_is_submitted() {
    assert!(hits(GROUP_THREE, "5,1,2", "5,5,5"));
    assert!(!hits(GROUP_THREE, "1,2,3", "5,5,5"));
    assert!(hits(PlayFamily::GroupAware { codes: 7 }, "0,1,2,3,4,5,6", "5,5,5"));
}

/// A draw with exactly one repeated digit needs two distinct matches.
#[test]
fn group_of_three_draw_needs_two_matches() {
    assert!(hits(GROUP_THREE, "1,2,9", "1,1,2"));
    assert!(!hits(GROUP_THREE, "1,3,4", "1,1,2"));
}

/// Three distinct digits must all be submitted.
#[test]
fn distinct_draw_needs_all_three_digits() {
    assert!(hits(PlayFamily::GroupAware { codes: 5 }, "1,2,3,4,5", "3,1,2"));
    assert!(!hits(PlayFamily::GroupAware { codes: 5 }, "1,2,4,5,6", "3,1,2"));
}

/// Group-aware picks only score 3- and 5-digit draws.
#[test]
fn group_aware_never_hits_on_other_draw_lengths() {
    assert!(!hits(GROUP_THREE, "1,2,3,4", "1,2,3,4"));
    assert!(!hits(GROUP_THREE, "1", ""));
}

// ── Full cover and kill families ─────────────────────────────────────────────

/// Dropping any one drawn number from a 12-code cover turns the hit into a miss.
#[test]
fn full_cover_requires_every_drawn_number() {
    let family = PlayFamily::FullCover { codes: 12 };
    let drawn = "1,2,3,4,5,6";
    assert!(hits(family, "1,2,3,4,5,6,10,11,20,21,30,33", drawn));

    for missing in 1..=6 {
        let submission: Vec<String> = (1..=6)
            .filter(|n| *n != missing)
            .chain([10, 11, 20, 21, 30, 33])
            .map(|n| n.to_string())
            .collect();
        assert!(
            !hits(family, &submission.join(","), drawn),
            "submission without {missing} must not hit"
        );
    }
}

/// Two overlapping numbers fail a plain kill but still pass kill-three.
#[test]
fn plain_kill_and_kill_three_disagree_on_partial_overlap() {
    // Two of the three drawn numbers were submitted.
    assert!(!hits(PlayFamily::Kill { codes: 3 }, "1,2,7", "1,2,3"));
    assert!(hits(PlayFamily::KillBelowThree, "1,2,7", "1,2,3"));

    assert!(hits(PlayFamily::Kill { codes: 6 }, "7,8,9", "1,2,3"));
    assert!(!hits(PlayFamily::KillBelowThree, "1,2,3", "1,2,3,4,5"));
}

/// Daletou "红球杀三" is a plain kill; token labels such as "红球杀三码"
/// allow up to two red hits, and "红球杀六" needs zero overlap.
#[test]
fn front_back_kill_labels_resolve_to_distinct_rules() {
    let draw = "03,11,19,25,31";
    let exact = PlayFamily::resolve(LotteryKind::FrontBack, "红球杀三");
    let token = PlayFamily::resolve(LotteryKind::FrontBack, "红球杀三码");
    let kill_six = PlayFamily::resolve(LotteryKind::FrontBack, "红球杀六");
    // One red overlap: the listed label is a plain kill, the token label passes.
    assert!(!hits(exact, "03,20,21", draw));
    assert!(hits(token, "03,20,21", draw));
    assert!(hits(token, "03,11,20", draw));
    assert!(!hits(token, "03,11,19", draw));
    assert!(!hits(kill_six, "03,20,21,22,23,24", draw));
    assert!(hits(kill_six, "01,02,04,05,06,07", draw));
}

/// Labels with text before the area marker resolve through their token.
#[test]
fn front_back_area_prefixed_labels_score_like_their_token() {
    let draw = "03,11,19,25,31";
    let dantou = PlayFamily::resolve(LotteryKind::FrontBack, "前区红球独胆");
    assert!(hits(dantou, "11", draw));
    assert!(!hits(dantou, "12", draw));

    let back_kill = PlayFamily::resolve(LotteryKind::FrontBack, "后区蓝球杀五码");
    let back = parse_numbers("02,07");
    assert!(evaluate(back_kill, "01,03,04,05,06", &parse_numbers(draw), &back));
    assert!(!evaluate(back_kill, "01,02,04,05,06", &parse_numbers(draw), &back));
}

/// "杀一" hits only when the killed digit was not drawn.
#[test]
fn digit_kill_picks() {
    let kill_one = PlayFamily::resolve(LotteryKind::ThreeDigit, "杀一");
    assert!(hits(kill_one, "7", "1,2,3"));
    assert!(!hits(kill_one, "3", "1,2,3"));
}

// ── Secondary draw ───────────────────────────────────────────────────────────

/// Blue-ball families are scored against the secondary draw, not the primary.
#[test]
fn secondary_cover_and_kill_use_the_back_area() {
    let primary = parse_numbers("1,2,3,4,5");
    let back = parse_numbers("3,9");

    let cover = PlayFamily::SecondaryCover { codes: 3 };
    assert!(evaluate(cover, "3,9,11", &primary, &back));
    assert!(!evaluate(cover, "3,11,12", &primary, &back));

    let kill = PlayFamily::SecondaryKill { codes: 5 };
    assert!(evaluate(kill, "1,2,4,5,6", &primary, &back));
    assert!(!evaluate(kill, "9,10", &primary, &back));
}

/// With no secondary draw there is nothing to cover or kill.
#[test]
fn secondary_families_never_hit_without_a_secondary_draw() {
    let primary = parse_numbers("1,2,3,4,5,6");
    assert!(!evaluate(PlayFamily::SecondaryCover { codes: 3 }, "1,2,3", &primary, &[]));
    assert!(!evaluate(PlayFamily::SecondaryKill { codes: 5 }, "10,11", &primary, &[]));
}

// ── Positional families ──────────────────────────────────────────────────────

/// In a 5-digit draw ten-thousands is the first digit and units the last.
#[test]
fn five_digit_positions() {
    let draw = "1,2,3,4,5";
    assert!(hits(PlayFamily::PositionFix(Position::TenThousands), "1,7", draw));
    assert!(hits(PlayFamily::PositionFix(Position::Hundreds), "3", draw));
    assert!(!hits(PlayFamily::PositionKill(Position::Units), "5,6", draw));
    assert!(hits(PlayFamily::PositionKill(Position::Units), "6,7", draw));
}

/// "百位定7" and "定位3*3*3-个位" pick the right digit of a 3-digit draw.
#[test]
fn three_digit_shorthand_positions() {
    let draw = "7,8,9";
    let hundreds = PlayFamily::resolve(LotteryKind::ThreeDigit, "百位定7");
    let units = PlayFamily::resolve(LotteryKind::ThreeDigit, "定位3*3*3-个位");
    assert!(hits(hundreds, "7,1,2", draw));
    assert!(!hits(hundreds, "9", draw));
    assert!(hits(units, "9", draw));
    assert!(!hits(PlayFamily::PositionFix(Position::Thousands), "7,8,9", draw));
}

/// A 4-digit draw has no positions, so positional plays never hit.
#[test]
fn positions_need_three_or_five_digit_draws() {
    assert!(!hits(PlayFamily::PositionFix(Position::Units), "4", "1,2,3,4"));
    assert!(!hits(PlayFamily::PositionKill(Position::Units), "9", "1,2,3,4"));
}

// ── Keno code counts ─────────────────────────────────────────────────────────

/// Keno "K码" needs K matches; "杀K码" needs none of its codes drawn.
#[test]
fn ranked_codes_need_k_matches_and_kill_codes_need_none() {
    let draw: Vec<String> = (1..=20).map(|n| n.to_string()).collect();
    let draw = draw.join(",");

    assert!(hits(PlayFamily::RankedCodes { codes: 3 }, "1,2,3", &draw));
    assert!(!hits(PlayFamily::RankedCodes { codes: 3 }, "1,2,30", &draw));
    assert!(hits(PlayFamily::KillCodes { codes: 5 }, "21,22,23,24,25", &draw));
    assert!(!hits(PlayFamily::KillCodes { codes: 5 }, "20,22,23,24,25", &draw));
}

// ── Totality ─────────────────────────────────────────────────────────────────

/// Blank or unparseable submissions miss, even for kill families.
#[test]
fn empty_or_malformed_submissions_never_hit() {
    assert!(!hits(PlayFamily::Kill { codes: 1 }, "", "1,2,3"));
    assert!(!hits(PlayFamily::KillCodes { codes: 5 }, "n/a", "1,2,3"));
    assert!(!hits(PlayFamily::Dantou { picks: 1 }, ",,,", "1,2,3"));
}

/// A label with no rule for the lottery never hits.
#[test]
fn unrecognized_play_types_never_hit() {
    assert!(!hits(PlayFamily::Unrecognized, "1,2,3", "1,2,3"));
    let family = PlayFamily::resolve(LotteryKind::Keno, "红球杀三");
    assert!(!hits(family, "30", "1,2,3"));
}

// ── Partial matches ──────────────────────────────────────────────────────────

/// A missed dantou still contributes its one matched number.
#[test]
fn partial_matches_count_even_when_the_play_misses() {
    let drawn = parse_numbers("2,3,4");
    assert!(!evaluate(PlayFamily::Dantou { picks: 2 }, "1,2", &drawn, &[]));
    assert_eq!(count_partial("1,2", &drawn), 1);
}

/// Repeated submitted numbers are counted once.
#[test]
fn partial_matches_count_distinct_numbers() {
    let drawn = parse_numbers("2,3,4");
    assert_eq!(count_partial("2,2,3", &drawn), 2);
    assert_eq!(count_partial("", &drawn), 0);
    assert_eq!(count_partial("2,3", &[]), 0);
}
