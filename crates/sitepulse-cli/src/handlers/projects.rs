use anyhow::Result;

use sitepulse_client::Error;
use sitepulse_client::resources::ProjectQuery;

use crate::args::ProjectsCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: ProjectsCommand) -> Result<()> {
    let client = ctx.client_at("/projects")?;

    match command {
        ProjectsCommand::List {
            page,
            per_page,
            category,
            featured,
            search,
        } => {
            let mut query = ProjectQuery::new();
            if let Some(page) = page {
                query = query.page(page);
            }
            if let Some(per_page) = per_page {
                query = query.per_page(per_page);
            }
            if let Some(category) = category {
                query = query.category(category);
            }
            if featured {
                query = query.featured(true);
            }
            if let Some(search) = search {
                query = query.search(search);
            }

            let projects = client.projects().list(query).await?;
            emit(ctx.format, &projects, |page| {
                for project in &page.data {
                    println!(
                        "{:<24} {:<32} {:<16} {}",
                        project.slug,
                        project.title,
                        project.category,
                        project.technologies.join(", ")
                    );
                }
                println!("{} of {} total", page.len(), page.total);
            })
        }

        ProjectsCommand::Show { slug } => match client.projects().get(&slug).await {
            Ok(project) => emit(ctx.format, &project, |project| {
                println!("{} ({})", project.title, project.slug);
                println!("category: {}", project.category);
                if let Some(client_name) = &project.client_name {
                    println!("client: {}", client_name);
                }
                println!("{}", project.description);
                if !project.technologies.is_empty() {
                    println!("technologies: {}", project.technologies.join(", "));
                }
                for url in &project.gallery {
                    println!("  {}", url);
                }
            }),
            Err(Error::NotFound(_)) => {
                println!("project '{}' not found", slug);
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
    }
}
