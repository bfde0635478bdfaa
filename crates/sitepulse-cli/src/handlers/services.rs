use anyhow::Result;

use sitepulse_client::Error;
use sitepulse_client::resources::ServiceQuery;

use crate::args::ServicesCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: ServicesCommand) -> Result<()> {
    let client = ctx.client_at("/services")?;

    match command {
        ServicesCommand::List {
            page,
            per_page,
            status,
            search,
        } => {
            let mut query = ServiceQuery::new();
            if let Some(page) = page {
                query = query.page(page);
            }
            if let Some(per_page) = per_page {
                query = query.per_page(per_page);
            }
            if let Some(status) = status {
                query = query.status(status.into());
            }
            if let Some(search) = search {
                query = query.search(search);
            }

            let services = client.services().list(query).await?;
            emit(ctx.format, &services, |page| {
                for service in &page.data {
                    println!(
                        "{:<24} {:<32} {}",
                        service.slug, service.title, service.status
                    );
                }
                println!("{} of {} total", page.len(), page.total);
            })
        }

        ServicesCommand::Show { slug } => match client.services().get(&slug).await {
            Ok(service) => emit(ctx.format, &service, |service| {
                println!("{} ({})", service.title, service.slug);
                println!("{}", service.description);
                if !service.features.is_empty() {
                    println!("features: {}", service.features.join(", "));
                }
            }),
            Err(Error::NotFound(_)) => {
                println!("service '{}' not found", slug);
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
    }
}
