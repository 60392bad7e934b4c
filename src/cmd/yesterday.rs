//! Previous entry lookup command

use std::io;

use journal_sync::resolve_today;
use serde_json::json;

use super::context::{print_json, Context};

pub fn run(ctx: &Context, today: Option<String>) -> io::Result<()> {
    let today = resolve_today(today.as_deref())?;
    // Not finding anything is not an error; the user is notified either way
    let found = ctx.journal_sync()?.locate_previous(today)?;

    if ctx.json {
        return print_json(&json!({ "today": today, "path": found }));
    }
    if let Some(path) = found {
        println!("{}", path);
    }
    Ok(())
}
