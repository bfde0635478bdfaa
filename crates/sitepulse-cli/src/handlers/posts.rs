use anyhow::Result;

use sitepulse_client::Error;
use sitepulse_client::resources::PostQuery;

use crate::args::PostsCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: PostsCommand) -> Result<()> {
    let client = ctx.client_at("/blog")?;

    match command {
        PostsCommand::List {
            page,
            per_page,
            tag,
            search,
        } => {
            let mut query = PostQuery::new();
            if let Some(page) = page {
                query = query.page(page);
            }
            if let Some(per_page) = per_page {
                query = query.per_page(per_page);
            }
            if let Some(tag) = tag {
                query = query.tag(tag);
            }
            if let Some(search) = search {
                query = query.search(search);
            }

            let posts = client.posts().list(query).await?;
            emit(ctx.format, &posts, |page| {
                for post in &page.data {
                    println!(
                        "{:<32} {:<40} {}",
                        post.slug,
                        post.title,
                        post.tags.join(", ")
                    );
                }
                println!("{} of {} total", page.len(), page.total);
            })
        }

        PostsCommand::Show { slug } => match client.posts().get(&slug).await {
            Ok(post) => emit(ctx.format, &post, |post| {
                println!("{}", post.title);
                println!("by {} | tags: {}", post.author, post.tags.join(", "));
                println!();
                println!("{}", post.content);
            }),
            Err(Error::NotFound(_)) => {
                println!("post '{}' not found", slug);
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
    }
}
