//! Record command - append a consumption record

use std::process::exit;

use anyhow::Result;
use serde_json::json;
use waterlog_core::{LogEvent, OperationResult};

use super::{get_loaded_context, get_logger, log_event};
use crate::output;

pub fn run(user_id: &str, amount: &str, json: bool) -> Result<()> {
    let logger = get_logger();
    let (mut ctx, load_report) = get_loaded_context()?;
    if !json {
        output::load_diagnostics(&load_report);
    }

    let value = match ctx.store.add_user_record(user_id, amount) {
        Ok(value) => value,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("add_record_failed")
                    .with_command("record")
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
    };

    let report = ctx.save()?;
    log_event(&logger, LogEvent::new("record_added").with_command("record"));

    // The user exists at this point or add_user_record would have failed
    let user = ctx.store.get_user(user_id);
    let name = user.map(|u| u.name.as_str()).unwrap_or(user_id);
    let average = user.map(|u| u.average_consumption()).unwrap_or(0.0);

    if json {
        let result = OperationResult::ok_with_diagnostics(
            json!({ "user_id": user_id, "amount": value, "average": average }),
            report.diagnostics,
        );
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::success(&format!(
            "Added record {} for user '{}' (ID: {})",
            output::format_liters(value),
            name,
            user_id
        ));
        output::diagnostics(&report.diagnostics);
    }

    Ok(())
}
