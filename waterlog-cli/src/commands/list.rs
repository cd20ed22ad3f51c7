//! List command - all users with their averages

use anyhow::Result;
use colored::Colorize;
use waterlog_core::StoreSummary;

use super::get_loaded_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let (ctx, load_report) = get_loaded_context()?;
    if !json {
        output::load_diagnostics(&load_report);
    }

    let summary = StoreSummary::for_store(&ctx.store);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.users.is_empty() {
        println!("No users yet. Add one with: wl add <user_id> <name>");
        return Ok(());
    }

    println!();
    println!("{}", "Users".bold());

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Records", "Average"]);
    for user in &summary.users {
        table.add_row(vec![
            user.user_id.clone(),
            user.name.clone(),
            user.record_count.to_string(),
            output::format_liters(user.average_liters),
        ]);
    }
    println!("{}", table);
    println!(
        "{} user(s), {} record(s)",
        summary.total_users, summary.total_records
    );
    println!();

    Ok(())
}
