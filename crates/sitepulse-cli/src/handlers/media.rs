use anyhow::Result;

use crate::args::MediaCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: MediaCommand) -> Result<()> {
    let client = ctx.client_at("/admin/media")?;

    match command {
        MediaCommand::List { page, per_page } => {
            let items = client.media().list(page, per_page).await?;
            emit(ctx.format, &items, |page| {
                for item in &page.data {
                    println!(
                        "{:<6} {:<36} {:<20} {:>10} bytes",
                        item.id, item.file_name, item.mime_type, item.size_bytes
                    );
                }
                println!("{} of {} total", page.len(), page.total);
            })
        }
    }
}
