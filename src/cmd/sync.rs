//! Sync command: yesterday's backlog for today's note

use std::io;

use journal_sync::resolve_today;

use super::context::{print_json, Context};
use super::extract::render_backlog;

pub fn run(ctx: &Context, today: Option<String>) -> io::Result<()> {
    let today = resolve_today(today.as_deref())?;

    // None means the user was already notified
    let outcome = match ctx.journal_sync()?.sync(today)? {
        Some(outcome) => outcome,
        None => return Ok(()),
    };

    if ctx.json {
        return print_json(&outcome);
    }

    println!("today: {}", outcome.today_path);
    println!("from:  {}", outcome.yesterday_path);
    if !outcome.backlog.is_empty() {
        println!();
        print!("{}", render_backlog(&outcome.backlog));
    }
    Ok(())
}
