//! Remove command - remove a user and their records

use std::process::exit;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use serde_json::json;
use waterlog_core::{LogEvent, OperationResult};

use super::{get_loaded_context, get_logger, log_event};
use crate::output;

pub fn run(user_id: &str, force: bool, json: bool) -> Result<()> {
    let logger = get_logger();
    let (mut ctx, load_report) = get_loaded_context()?;
    if !json {
        output::load_diagnostics(&load_report);
    }

    let Some(user) = ctx.store.get_user(user_id) else {
        log_event(
            &logger,
            LogEvent::new("remove_user_failed")
                .with_command("remove")
                .with_error("user not found"),
        );
        if json {
            let result: OperationResult<serde_json::Value> =
                OperationResult::fail(format!("Not found: user '{}'", user_id));
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            output::error(&format!("User '{}' not found", user_id));
        }
        exit(1);
    };
    let record_count = user.records.len();

    // Confirm removal unless --force (or --json, which is non-interactive)
    if !force && !json {
        println!(
            "\n{}",
            format!(
                "This will remove user '{}' and their {} record(s).",
                user.name, record_count
            )
            .yellow()
        );
        println!("{}\n", "Removed records cannot be recovered.".dimmed());

        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let removed = ctx.store.remove_user(user_id)?;
    let report = ctx.save()?;
    log_event(&logger, LogEvent::new("user_removed").with_command("remove"));

    if json {
        let result = OperationResult::ok_with_diagnostics(
            json!({ "user_id": removed.user_id, "records_removed": record_count }),
            report.diagnostics,
        );
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("\n{} User '{}' removed\n", "✓".green(), user_id);
        output::diagnostics(&report.diagnostics);
    }

    Ok(())
}
