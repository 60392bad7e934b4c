use std::io;

use journal_sync::{journal_entries, FileStore};

use super::context::{print_json, Context};

pub fn run(ctx: &Context) -> io::Result<()> {
    let paths = ctx.open_vault()?.list_markdown_paths()?;
    let entries = journal_entries(&paths);

    if ctx.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        eprintln!("No journal entries found in {}", journal_sync::display_path(&ctx.vault));
        return Ok(());
    }
    for entry in entries {
        println!("{}  {}", entry.date, entry.path);
    }
    Ok(())
}
