// One thin service per backend resource, all sharing the same transport.
// Each call composes a route, marshals filters to query parameters or the
// draft to a JSON body, and hands the response back decoded.

pub mod analytics;
pub mod contacts;
pub mod dashboard;
pub mod media;
pub mod posts;
pub mod projects;
pub mod services;
pub mod settings;
pub mod team;

pub use analytics::{AnalyticsApi, AnalyticsQuery};
pub use contacts::ContactsApi;
pub use dashboard::DashboardApi;
pub use media::MediaApi;
pub use posts::{PostQuery, PostsApi};
pub use projects::{ProjectQuery, ProjectsApi};
pub use services::{ServiceQuery, ServicesApi};
pub use settings::SettingsApi;
pub use team::{TeamApi, TestimonialsApi};

/// Marshaled query parameters.
pub(crate) type Params = Vec<(&'static str, String)>;

/// Shared paging filters, embedded by the per-resource query types.
#[derive(Debug, Clone, Default)]
pub(crate) struct PageFilter {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageFilter {
    pub(crate) fn push_params(&self, params: &mut Params) {
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
    }
}
