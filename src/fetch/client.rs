use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes a prepared request against the registration portal.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
