use anyhow::Result;

use crate::args::TeamCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: TeamCommand) -> Result<()> {
    let client = ctx.client_at("/about")?;

    match command {
        TeamCommand::List => {
            let members = client.team().list().await?;
            emit(ctx.format, &members, |members| {
                for member in members {
                    println!("{:<28} {}", member.name, member.role);
                }
            })
        }

        TeamCommand::Testimonials => {
            let testimonials = client.testimonials().list().await?;
            emit(ctx.format, &testimonials, |testimonials| {
                for t in testimonials {
                    let attribution = match (&t.company, &t.author_role) {
                        (Some(company), _) => format!("{}, {}", t.author_name, company),
                        (None, Some(role)) => format!("{}, {}", t.author_name, role),
                        (None, None) => t.author_name.clone(),
                    };
                    println!("\"{}\"", t.quote);
                    println!("  - {}", attribution);
                }
            })
        }
    }
}
