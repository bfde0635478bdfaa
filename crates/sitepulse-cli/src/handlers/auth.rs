use anyhow::Result;

use sitepulse_client::auth::{clear_credentials, store_credentials};

use crate::args::AuthCommand;
use crate::context::AppContext;

pub fn handle(ctx: &AppContext, command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::SetToken { token } => {
            store_credentials(ctx.store.as_ref(), &token, None)?;
            println!("Token stored");
            Ok(())
        }

        AuthCommand::Clear => {
            clear_credentials(ctx.store.as_ref());
            println!("Credentials cleared");
            Ok(())
        }
    }
}
