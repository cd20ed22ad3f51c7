//! Rename command - change a user's display name

use std::process::exit;

use anyhow::Result;
use serde_json::json;
use waterlog_core::{LogEvent, OperationResult};

use super::{get_loaded_context, get_logger, log_event};
use crate::output;

pub fn run(user_id: &str, new_name: &str, json: bool) -> Result<()> {
    let logger = get_logger();
    let (mut ctx, load_report) = get_loaded_context()?;
    if !json {
        output::load_diagnostics(&load_report);
    }

    if let Err(e) = ctx.store.update_user_name(user_id, new_name) {
        log_event(
            &logger,
            LogEvent::new("rename_failed")
                .with_command("rename")
                .with_error(e.to_string()),
        );
        if json {
            let result: OperationResult<serde_json::Value> = OperationResult::fail(e.to_string());
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            output::error(&format!("User '{}' not found", user_id));
        }
        exit(1);
    }

    let report = ctx.save()?;
    log_event(&logger, LogEvent::new("user_renamed").with_command("rename"));

    if json {
        let result = OperationResult::ok_with_diagnostics(
            json!({ "user_id": user_id, "name": new_name }),
            report.diagnostics,
        );
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::success(&format!("User '{}' renamed to '{}'", user_id, new_name));
        output::diagnostics(&report.diagnostics);
    }

    Ok(())
}
