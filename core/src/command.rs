//! Runner invocation: which issues of which lotteries to aggregate.
//!
//! Usage:
//!   hitstat-runner all                      full backfill, every lottery
//!   hitstat-runner today                    incremental, every lottery
//!   hitstat-runner all   --lottery 排列5     full backfill, one lottery
//!   hitstat-runner today --lottery 64       incremental, one lottery
//!   hitstat-runner issue 2024100 --lottery 6
//!
//! Options: --db <path>, --data-dir <dir>, --json
//!
//! Invalid combinations are rejected here, before anything is aggregated.

use crate::{
    error::{StatError, StatResult},
    types::IssueId,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DB_PATH: &str = "hitstat.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum RunCommand {
    BackfillAll,
    IncrementalAll,
    Backfill { lottery: String },
    Incremental { lottery: String },
    SingleIssue { lottery: String, issue_id: IssueId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub db_path: String,
    pub data_dir: Option<String>,
    pub json: bool,
    pub command: RunCommand,
}

impl RunOptions {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> StatResult<Self> {
        let mut db_path = DEFAULT_DB_PATH.to_string();
        let mut data_dir = None;
        let mut lottery = None;
        let mut json = false;
        let mut positional = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--db" => db_path = flag_value(&mut iter, "--db")?,
                "--data-dir" => data_dir = Some(flag_value(&mut iter, "--data-dir")?),
                "--lottery" => lottery = Some(flag_value(&mut iter, "--lottery")?),
                "--json" => json = true,
                flag if flag.starts_with("--") => {
                    return Err(StatError::InvalidInvocation(format!("unknown option {flag}")))
                }
                _ => positional.push(arg.as_str()),
            }
        }

        let command = match positional.as_slice() {
            [mode] if is_full(mode) => match lottery {
                Some(lottery) => RunCommand::Backfill { lottery },
                None => RunCommand::BackfillAll,
            },
            [mode] if is_incremental(mode) => match lottery {
                Some(lottery) => RunCommand::Incremental { lottery },
                None => RunCommand::IncrementalAll,
            },
            ["issue", issue_id] => match lottery {
                Some(lottery) => RunCommand::SingleIssue {
                    lottery,
                    issue_id: issue_id.to_string(),
                },
                None => {
                    return Err(StatError::InvalidInvocation(format!(
                        "issue {issue_id} given without --lottery"
                    )))
                }
            },
            ["issue"] => {
                return Err(StatError::InvalidInvocation("issue mode needs an issue id".into()))
            }
            [] => {
                return Err(StatError::InvalidInvocation(
                    "missing mode: expected all, today or issue <id>".into(),
                ))
            }
            other => {
                return Err(StatError::InvalidInvocation(format!(
                    "unexpected arguments: {}",
                    other.join(" ")
                )))
            }
        };

        Ok(Self {
            db_path,
            data_dir,
            json,
            command,
        })
    }
}

fn is_full(mode: &str) -> bool {
    mode.eq_ignore_ascii_case("all") || mode == "full"
}

fn is_incremental(mode: &str) -> bool {
    mode.eq_ignore_ascii_case("today") || mode == "incremental"
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> StatResult<String> {
    iter.next()
        .filter(|v| !v.starts_with("--"))
        .cloned()
        .ok_or_else(|| StatError::InvalidInvocation(format!("{flag} needs a value")))
}
