use anyhow::Result;

use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext) -> Result<()> {
    let client = ctx.client_at("/admin/dashboard")?;
    let stats = client.dashboard().stats().await?;

    emit(ctx.format, &stats, |stats| {
        println!("services:         {}", stats.services);
        println!("projects:         {}", stats.projects);
        println!("posts:            {}", stats.posts);
        println!("team members:     {}", stats.team_members);
        println!("testimonials:     {}", stats.testimonials);
        println!("unread contacts:  {}", stats.unread_contacts);
        println!("sessions (30d):   {}", stats.sessions_last_30_days);
    })
}
