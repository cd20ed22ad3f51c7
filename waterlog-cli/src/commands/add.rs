//! Add command - add a new user, optionally with initial records

use std::process::exit;

use anyhow::Result;
use serde_json::json;
use waterlog_core::{LogEvent, OperationResult};

use super::{get_loaded_context, get_logger, log_event};
use crate::output;

pub fn run(user_id: &str, name: &str, amounts: &[String], json: bool) -> Result<()> {
    let logger = get_logger();
    let (mut ctx, load_report) = get_loaded_context()?;
    if !json {
        output::load_diagnostics(&load_report);
    }

    if let Err(e) = ctx.store.add_user(user_id, name) {
        log_event(
            &logger,
            LogEvent::new("add_user_failed")
                .with_command("add")
                .with_error(e.to_string()),
        );
        if json {
            let result: OperationResult<serde_json::Value> = OperationResult::fail(e.to_string());
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            output::error(&format!("A user with ID '{}' already exists", user_id));
        }
        exit(1);
    }

    // Initial records keep the add-then-record workflow alive across
    // invocations: a user with no records is not written to the data
    // file, so without one they would vanish when this process exits.
    // Nothing is saved until every amount validates.
    let mut recorded = Vec::new();
    for amount in amounts {
        match ctx.store.add_user_record(user_id, amount) {
            Ok(value) => recorded.push(value),
            Err(e) => {
                log_event(
                    &logger,
                    LogEvent::new("add_user_failed")
                        .with_command("add")
                        .with_error(e.to_string()),
                );
                if json {
                    let result: OperationResult<serde_json::Value> =
                        OperationResult::fail(e.to_string());
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    output::error(&e.to_string());
                }
                exit(1);
            }
        }
    }

    let report = ctx.save()?;
    log_event(&logger, LogEvent::new("user_added").with_command("add"));

    if json {
        let result = OperationResult::ok_with_diagnostics(
            json!({ "user_id": user_id, "name": name, "records": recorded }),
            report.diagnostics,
        );
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::success(&format!("User '{}' added", name));
        if !recorded.is_empty() {
            let rendered: Vec<String> = recorded.iter().map(|r| r.to_string()).collect();
            output::success(&format!("Recorded: {} L", rendered.join(" L, ")));
        }
        output::diagnostics(&report.diagnostics);
    }

    Ok(())
}
