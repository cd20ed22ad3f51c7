//! Show command - one user's records and average

use std::process::exit;

use anyhow::Result;
use colored::Colorize;
use waterlog_core::UserSummary;

use super::get_loaded_context;
use crate::output;

pub fn run(user_id: &str, json: bool) -> Result<()> {
    let (ctx, load_report) = get_loaded_context()?;
    if !json {
        output::load_diagnostics(&load_report);
    }

    let Some(user) = ctx.store.get_user(user_id) else {
        if json {
            let result: waterlog_core::OperationResult<UserSummary> =
                waterlog_core::OperationResult::fail(format!("Not found: user '{}'", user_id));
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            output::error(&format!("User '{}' not found", user_id));
        }
        exit(1);
    };

    let summary = UserSummary::for_user(user);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!(
        "{}",
        format!("User '{}' (ID: {})", summary.name, summary.user_id).bold()
    );

    let mut table = output::create_table();
    table.add_row(vec!["Records", &summary.record_count.to_string()]);
    table.add_row(vec!["Total", &output::format_liters(summary.total_liters)]);
    table.add_row(vec![
        "Average",
        &output::format_liters(summary.average_liters),
    ]);
    println!("{}", table);

    if !summary.records.is_empty() {
        let rendered: Vec<String> = summary.records.iter().map(|r| r.to_string()).collect();
        println!("Entries: {}", rendered.join(", "));
    }
    println!();

    Ok(())
}
