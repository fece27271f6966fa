mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use todo_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Ok(log_path) = std::env::var("TODO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else if cli.command.is_some() {
        // The TUI owns the terminal, so it only logs when given a file.
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    match cli.command {
        None => {
            let ctx = CliContext::load(cli.data_dir, cli.key)?;
            let mut app = App::new(ctx.gateway(), ctx.config.notice_ttl())?;
            app.run().await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        }
        Some(Commands::Shell) => {
            let ctx = CliContext::load(cli.data_dir, cli.key)?;
            handlers::shell::run(&ctx, std::io::stdin().lock())?;
        }
        Some(Commands::Task(action)) => {
            let result = CliContext::load(cli.data_dir, cli.key)
                .map_err(anyhow::Error::from)
                .and_then(|ctx| handlers::task::handle(&ctx, action));
            if let Err(e) = result {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}
