use anyhow::Result;

use sitepulse_types::ContactDraft;

use crate::args::ContactCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: ContactCommand) -> Result<()> {
    match command {
        ContactCommand::Send {
            name,
            email,
            subject,
            message,
        } => {
            let client = ctx.client_at("/contact")?;
            let draft = ContactDraft {
                name,
                email,
                subject,
                message,
            };

            let sent = client.contacts().submit(&draft).await?;
            println!("Message sent (id {})", sent.id);
            Ok(())
        }

        ContactCommand::List { page, per_page } => {
            let client = ctx.client_at("/admin/contacts")?;
            let messages = client.contacts().list(page, per_page).await?;

            emit(ctx.format, &messages, |page| {
                for message in &page.data {
                    let marker = if message.read { " " } else { "*" };
                    println!(
                        "{} [{}] {:<24} {:<28} {}",
                        marker,
                        message.created_at.format("%Y-%m-%d %H:%M"),
                        message.name,
                        message.email,
                        message.subject.as_deref().unwrap_or("(no subject)")
                    );
                }
                println!("{} of {} total", page.len(), page.total);
            })
        }
    }
}
