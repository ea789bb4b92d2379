//! hitstat-runner: batch aggregation of forecaster hit statistics.
//!
//! Usage:
//!   hitstat-runner all   [--lottery <id|name>] [--db hitstat.db] [--data-dir ./data] [--json]
//!   hitstat-runner today [--lottery <id|name>] ...
//!   hitstat-runner issue <issue-id> --lottery <id|name> ...

use anyhow::Result;
use hitstat_core::{
    command::{RunCommand, RunOptions},
    config::LotteryCatalog,
    scheduler::{BacklogReport, BacklogScheduler},
    store::StatStore,
};
use std::env;

#[derive(serde::Serialize)]
struct RunSummary<'a> {
    command: &'a RunCommand,
    finished_at: String,
    reports: &'a [BacklogReport],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = RunOptions::parse(&args)?;

    let catalog = match &options.data_dir {
        Some(dir) => LotteryCatalog::load(dir)?,
        None => LotteryCatalog::builtin(),
    };

    let store = StatStore::open(&options.db_path)?;
    store.migrate(&catalog)?;

    if !options.json {
        println!("hitstat-runner");
        println!("  db:        {}", options.db_path);
        println!("  lotteries: {}", catalog.entries().len());
        println!("  command:   {:?}", options.command);
        println!();
    }

    log::info!("Starting {:?} against {}", options.command, options.db_path);
    let scheduler = BacklogScheduler::new(&catalog, &store);
    let reports = scheduler.dispatch(&options.command)?;
    for r in &reports {
        match &r.error {
            Some(e) => log::warn!("[{}] not run: {e}", r.lottery_name),
            None => log::info!(
                "[{}] finished: {} processed, {} skipped, {} failed, {} rows",
                r.lottery_name,
                r.processed,
                r.skipped,
                r.failed,
                r.rows_written
            ),
        }
    }

    if options.json {
        let summary = RunSummary {
            command: &options.command,
            finished_at: chrono::Utc::now().to_rfc3339(),
            reports: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&reports);
        if let RunCommand::SingleIssue { lottery, issue_id } = &options.command {
            print_draw(&catalog, &store, lottery, issue_id)?;
        }
    }

    Ok(())
}

fn print_summary(reports: &[BacklogReport]) {
    println!("=== RUN SUMMARY ===");
    for r in reports {
        println!(
            "  {:<8} {:?} | issues: {} | processed: {} | skipped: {} | failed: {} | rows: {}",
            r.lottery_name, r.mode, r.issues_total, r.processed, r.skipped, r.failed, r.rows_written
        );
        if !r.failed_issues.is_empty() {
            println!("           failed issues: {}", r.failed_issues.join(", "));
        }
        if let Some(e) = &r.error {
            println!("           error: {e}");
        }
    }
}

fn print_draw(catalog: &LotteryCatalog, store: &StatStore, lottery: &str, issue_id: &str) -> Result<()> {
    let entry = catalog.resolve(lottery)?;
    let Some(draw) = store.fetch_draw(entry, issue_id)? else {
        println!("  (no draw for issue {issue_id})");
        return Ok(());
    };
    println!();
    println!("=== DRAW {issue_id} ===");
    println!("  primary:   {:?}", draw.primary);
    if !draw.secondary.is_empty() {
        println!("  secondary: {:?}", draw.secondary);
    }
    if let Some(s) = draw.summary(entry.kind) {
        println!(
            "  sum: {} | span: {} | odd:even {} | big:small {}",
            s.sum, s.span, s.odd_even_ratio, s.big_small_ratio
        );
    }
    Ok(())
}
