//! Task extraction command

use std::io::{self, Read};

use journal_sync::{extract, Backlog, FileStore};

use super::context::{print_json, Context};

pub fn run(ctx: &Context, note: Option<String>) -> io::Result<()> {
    let content = match note.as_deref() {
        None | Some("-") => read_from_stdin()?,
        Some(path) => ctx.open_vault()?.read_file(path)?,
    };

    let backlog = extract(&content);
    if ctx.json {
        print_json(&backlog)
    } else {
        print!("{}", render_backlog(&backlog));
        Ok(())
    }
}

/// Render a backlog as markdown sections ready to paste into a note.
/// Empty sections are left out.
pub fn render_backlog(backlog: &Backlog) -> String {
    let mut out = String::new();
    for (title, items) in [("Todo", &backlog.todo), ("Done", &backlog.done)] {
        if items.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("## {}\n\n", title));
        for item in items {
            // Callout blocks already end with a newline
            out.push_str(item.trim_end_matches('\n'));
            out.push('\n');
        }
    }
    out
}

/// Read all content from stdin
fn read_from_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
