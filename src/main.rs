use clap::Parser;
use journal_sync::{logging, Cli, Command, Config};

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let env_log = logging::env_spec();
    let spec = logging::resolve_spec(env_log.as_deref(), cli.verbose, config.log_level.as_deref());
    logging::init_logging(&spec)?;

    let vault = config.resolve_vault(cli.vault.as_deref());
    let ctx = cmd::context::Context::new(config, vault, cli.json);

    match cli.command {
        Command::Path { date } => cmd::path::run(&ctx, date),
        Command::Yesterday { today } => cmd::yesterday::run(&ctx, today),
        Command::Extract { note } => cmd::extract::run(&ctx, note),
        Command::Sync { today } => cmd::sync::run(&ctx, today),
        Command::Entries => cmd::entries::run(&ctx),
    }
}

mod cmd {
    pub mod context;
    pub mod entries;
    pub mod extract;
    pub mod path;
    pub mod sync;
    pub mod yesterday;
}
