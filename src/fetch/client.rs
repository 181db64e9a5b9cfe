use async_trait::async_trait;
use reqwest::{Request, Response};

/// Sends one prepared request. The shuttle API needs no auth, so the only
/// production implementation is [`BasicClient`](super::BasicClient); tests
/// swap in canned responses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
