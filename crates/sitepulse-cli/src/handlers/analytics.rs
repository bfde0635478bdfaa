use anyhow::Result;

use sitepulse_client::resources::AnalyticsQuery;
use sitepulse_types::PageViewRow;

use crate::args::AnalyticsCommand;
use crate::context::AppContext;
use crate::output::emit;

pub async fn handle(ctx: &AppContext, command: AnalyticsCommand) -> Result<()> {
    let client = ctx.client_at("/admin/analytics")?;

    match command {
        AnalyticsCommand::Summary { since, until } => {
            let mut query = AnalyticsQuery::new();
            if let Some(since) = since {
                query = query.since(since);
            }
            if let Some(until) = until {
                query = query.until(until);
            }

            let summary = client.analytics().summary(query).await?;
            emit(ctx.format, &summary, |summary| {
                println!("sessions:    {}", summary.total_sessions);
                println!("page views:  {}", summary.total_page_views);
                println!(
                    "devices:     {} mobile / {} desktop",
                    summary.device_split.mobile, summary.device_split.desktop
                );
                if !summary.top_pages.is_empty() {
                    println!();
                    println!("top pages:");
                    for row in &summary.top_pages {
                        println!("  {:<32} {:>8} views", row.page, row.views);
                    }
                }
            })
        }

        AnalyticsCommand::Export {
            out,
            since,
            until,
            limit,
        } => {
            let mut query = AnalyticsQuery::new();
            if let Some(since) = since {
                query = query.since(since);
            }
            if let Some(until) = until {
                query = query.until(until);
            }
            if let Some(limit) = limit {
                query = query.limit(limit);
            }

            let rows = client.analytics().page_views(query).await?;
            write_page_views_csv(&out, &rows)?;
            println!("Wrote {} rows to {}", rows.len(), out.display());
            Ok(())
        }

        AnalyticsCommand::Sessions { limit } => {
            let mut query = AnalyticsQuery::new();
            if let Some(limit) = limit {
                query = query.limit(limit);
            }

            let sessions = client.analytics().sessions(query).await?;
            emit(ctx.format, &sessions, |page| {
                for session in &page.data {
                    println!(
                        "{:<38} {:<20} {:>4} pages  {}",
                        session.session_id,
                        session.landing_page,
                        session.page_count,
                        session.first_seen.format("%Y-%m-%d %H:%M")
                    );
                }
                println!("{} of {} total", page.len(), page.total);
            })
        }
    }
}

fn write_page_views_csv(path: &std::path::Path, rows: &[PageViewRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
