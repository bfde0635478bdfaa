use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::context::AppContext;
use crate::handlers;
use crate::types::LogLevel;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(cli))
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    let ctx = AppContext::new(cli.data_dir.as_deref(), cli.format)?;

    match cli.command {
        Commands::Config { command } => handlers::config::handle(&ctx, command),
        Commands::Auth { command } => handlers::auth::handle(&ctx, command),
        Commands::Services { command } => handlers::services::handle(&ctx, command).await,
        Commands::Projects { command } => handlers::projects::handle(&ctx, command).await,
        Commands::Posts { command } => handlers::posts::handle(&ctx, command).await,
        Commands::Team { command } => handlers::team::handle(&ctx, command).await,
        Commands::Media { command } => handlers::media::handle(&ctx, command).await,
        Commands::Settings { command } => handlers::settings::handle(&ctx, command).await,
        Commands::Contact { command } => handlers::contact::handle(&ctx, command).await,
        Commands::Analytics { command } => handlers::analytics::handle(&ctx, command).await,
        Commands::Dashboard => handlers::dashboard::handle(&ctx).await,
        Commands::Track {
            path,
            referrer,
            user_agent,
        } => handlers::track::handle(&ctx, &path, referrer, user_agent).await,
    }
}
