use anyhow::Result;

use sitepulse_client::TrackOutcome;
use sitepulse_types::PageVisit;

use crate::context::AppContext;

pub async fn handle(
    ctx: &AppContext,
    path: &str,
    referrer: Option<String>,
    user_agent: Option<String>,
) -> Result<()> {
    let tracker = ctx.client_at("/")?.tracker()?;

    let visit = PageVisit {
        referrer,
        user_agent: user_agent
            .unwrap_or_else(|| format!("sitepulse-cli/{}", env!("CARGO_PKG_VERSION"))),
    };

    match tracker.track_navigation(path, &visit).await {
        TrackOutcome::Sent => println!("Event sent for {}", path),
        TrackOutcome::SkippedAdmin => println!("Skipped: {} is an admin route", path),
        TrackOutcome::SkippedDuplicate => println!("Skipped: duplicate within debounce window"),
        TrackOutcome::Disabled => {
            println!("Tracking is disabled (no collector_base configured)")
        }
    }

    Ok(())
}
