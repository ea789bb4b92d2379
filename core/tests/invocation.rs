//! Command-line invocation parsing.

use hitstat_core::{
    command::{RunCommand, RunOptions, DEFAULT_DB_PATH},
    error::StatError,
};

fn parse(args: &[&str]) -> Result<RunOptions, StatError> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    RunOptions::parse(&args)
}

/// Without `--lottery`, both modes run across the whole catalog.
#[test]
fn all_and_today_cover_every_lottery_by_default() {
    assert_eq!(parse(&["All"]).unwrap().command, RunCommand::BackfillAll);
    assert_eq!(parse(&["today"]).unwrap().command, RunCommand::IncrementalAll);
}

/// `--lottery` turns a mode into a single-lottery run; other flags are kept.
#[test]
fn lottery_flag_narrows_the_run() {
    let options = parse(&["all", "--lottery", "排列5", "--db", "x.db", "--json"]).unwrap();
    assert_eq!(
        options.command,
        RunCommand::Backfill {
            lottery: "排列5".into()
        }
    );
    assert_eq!(options.db_path, "x.db");
    assert!(options.json);
}

/// `issue <id>` parses with `--lottery` and is rejected without it.
#[test]
fn single_issue_needs_a_lottery() {
    let options = parse(&["issue", "2024100", "--lottery", "6"]).unwrap();
    assert_eq!(
        options.command,
        RunCommand::SingleIssue {
            lottery: "6".into(),
            issue_id: "2024100".into()
        }
    );
    assert_eq!(options.db_path, DEFAULT_DB_PATH);

    assert!(matches!(
        parse(&["issue", "2024100"]),
        Err(StatError::InvalidInvocation(_))
    ));
}

/// Missing modes, stray arguments and unknown flags are invocation errors.
#[test]
fn malformed_invocations_are_rejected() {
    for args in [
        &[][..],
        &["issue"][..],
        &["sometimes"][..],
        &["all", "2024100"][..],
        &["today", "--lottery"][..],
        &["all", "--verbose"][..],
    ] {
        assert!(
            matches!(parse(args), Err(StatError::InvalidInvocation(_))),
            "{args:?} should be rejected"
        );
    }
}
