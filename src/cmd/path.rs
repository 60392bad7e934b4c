//! Journal path command

use std::io;

use journal_sync::{day_identifier, journal_path, resolve_today};
use serde_json::json;

use super::context::{print_json, Context};

pub fn run(ctx: &Context, date: Option<String>) -> io::Result<()> {
    let date = resolve_today(date.as_deref())?;
    let path = journal_path(date);

    if ctx.json {
        print_json(&json!({
            "date": date,
            "day": day_identifier(date),
            "path": path,
        }))
    } else {
        println!("{}", path);
        Ok(())
    }
}
