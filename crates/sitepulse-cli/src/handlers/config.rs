use anyhow::Result;

use sitepulse_client::ClientConfig;

use crate::args::ConfigCommand;
use crate::context::AppContext;
use crate::output::emit;

pub fn handle(ctx: &AppContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init {
            api_base,
            collector_base,
        } => {
            let mut config = ClientConfig::default();
            if let Some(base) = api_base {
                config.api_base = base;
            }
            if let Some(base) = collector_base {
                config.collector_base = Some(base);
            }

            config.save(&ctx.data_dir)?;
            println!(
                "Wrote {}",
                ClientConfig::default_path(&ctx.data_dir).display()
            );
            Ok(())
        }

        ConfigCommand::Show => emit(ctx.format, &ctx.config, |config| {
            println!("api_base:            {}", config.api_base);
            println!(
                "collector_base:      {}",
                config.collector_base.as_deref().unwrap_or("(tracking disabled)")
            );
            println!("admin_prefix:        {}", config.admin_prefix);
            println!("debounce_window_ms:  {}", config.debounce_window_ms);
            println!("timeout_secs:        {}", config.timeout_secs);
        }),
    }
}
