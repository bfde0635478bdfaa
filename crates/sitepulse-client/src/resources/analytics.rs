use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::Method;

use sitepulse_types::{AnalyticsSummary, PageViewRow, Paginated, VisitorSession};

use crate::error::Result;
use crate::transport::Transport;

use super::Params;

/// Time-range and size filters for the analytics read endpoints.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsQuery {
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    limit: Option<u32>,
}

impl AnalyticsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    pub fn until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(since) = self.since {
            params.push(("since", since.to_string()));
        }
        if let Some(until) = self.until {
            params.push(("until", until.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Read side of the visitor analytics (the write side is the tracker).
pub struct AnalyticsApi {
    transport: Arc<Transport>,
}

impl AnalyticsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn summary(&self, query: AnalyticsQuery) -> Result<AnalyticsSummary> {
        let builder = self
            .transport
            .request(Method::GET, "/analytics/summary")
            .query(&query.to_params());
        self.transport.send_enveloped("/analytics/summary", builder).await
    }

    pub async fn page_views(&self, query: AnalyticsQuery) -> Result<Vec<PageViewRow>> {
        let builder = self
            .transport
            .request(Method::GET, "/analytics/pages")
            .query(&query.to_params());
        self.transport.send_enveloped("/analytics/pages", builder).await
    }

    pub async fn sessions(&self, query: AnalyticsQuery) -> Result<Paginated<VisitorSession>> {
        let builder = self
            .transport
            .request(Method::GET, "/analytics/sessions")
            .query(&query.to_params());
        self.transport.send_raw("/analytics/sessions", builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_marshals_dates_as_iso() {
        let params = AnalyticsQuery::new()
            .since(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
            .until(NaiveDate::from_ymd_opt(2025, 7, 31).unwrap())
            .limit(10)
            .to_params();

        assert_eq!(
            params,
            vec![
                ("since", "2025-07-01".to_string()),
                ("until", "2025-07-31".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }
}
