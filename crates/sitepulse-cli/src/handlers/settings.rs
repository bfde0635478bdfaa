use anyhow::Result;

use crate::args::SettingsCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: SettingsCommand) -> Result<()> {
    let client = ctx.client_at("/admin/settings")?;

    match command {
        SettingsCommand::Show => {
            let settings = client.settings().get().await?;
            emit(ctx.format, &settings, |settings| {
                println!("site name:  {}", settings.site_name);
                if let Some(tagline) = &settings.tagline {
                    println!("tagline:    {}", tagline);
                }
                if let Some(email) = &settings.contact_email {
                    println!("email:      {}", email);
                }
                if let Some(phone) = &settings.phone {
                    println!("phone:      {}", phone);
                }
                if let Some(address) = &settings.address {
                    println!("address:    {}", address);
                }
                for (network, url) in &settings.social_links {
                    println!("{:<10} {}", format!("{}:", network), url);
                }
            })
        }
    }
}
