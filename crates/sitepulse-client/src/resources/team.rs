use std::sync::Arc;

use reqwest::Method;

use sitepulse_types::{TeamMember, TeamMemberDraft, Testimonial, TestimonialDraft};

use crate::error::Result;
use crate::transport::Transport;

pub struct TeamApi {
    transport: Arc<Transport>,
}

impl TeamApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Team rosters are small; the endpoint returns the full list.
    pub async fn list(&self) -> Result<Vec<TeamMember>> {
        let builder = self.transport.request(Method::GET, "/team");
        self.transport.send_enveloped("/team", builder).await
    }

    pub async fn create(&self, draft: &TeamMemberDraft) -> Result<TeamMember> {
        let builder = self.transport.request(Method::POST, "/team").json(draft);
        self.transport.send_enveloped("/team", builder).await
    }

    pub async fn update(&self, id: u64, draft: &TeamMemberDraft) -> Result<TeamMember> {
        let route = format!("/team/{}", id);
        let builder = self.transport.request(Method::PUT, &route).json(draft);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let route = format!("/team/{}", id);
        let builder = self.transport.request(Method::DELETE, &route);
        self.transport.send_no_content(&route, builder).await
    }
}

pub struct TestimonialsApi {
    transport: Arc<Transport>,
}

impl TestimonialsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Vec<Testimonial>> {
        let builder = self.transport.request(Method::GET, "/testimonials");
        self.transport.send_enveloped("/testimonials", builder).await
    }

    pub async fn create(&self, draft: &TestimonialDraft) -> Result<Testimonial> {
        let builder = self
            .transport
            .request(Method::POST, "/testimonials")
            .json(draft);
        self.transport.send_enveloped("/testimonials", builder).await
    }

    pub async fn update(&self, id: u64, draft: &TestimonialDraft) -> Result<Testimonial> {
        let route = format!("/testimonials/{}", id);
        let builder = self.transport.request(Method::PUT, &route).json(draft);
        self.transport.send_enveloped(&route, builder).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let route = format!("/testimonials/{}", id);
        let builder = self.transport.request(Method::DELETE, &route);
        self.transport.send_no_content(&route, builder).await
    }
}
