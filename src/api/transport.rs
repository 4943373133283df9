use std::time::Duration;

use crate::error::AppError;

const USER_AGENT: &str = "rib_stats/0.1.0";

/// What came back over the wire. Status interpretation is the client's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The blocking "GET this URL" capability the client is built on. Swapped
/// out for a canned implementation in tests.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        UreqTransport { agent }
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError> {
        match self.agent.get(url).set("User-Agent", USER_AGENT).call() {
            Ok(resp) => {
                let status = resp.status();
                let body = resp
                    .into_string()
                    .map_err(|e| AppError::Transport(e.to_string()))?;
                Ok(HttpResponse { status, body })
            }
            // ureq reports non-2xx as an error; surface it as a plain
            // response so the caller sees the status code.
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Ok(HttpResponse { status, body })
            }
            Err(e) => Err(AppError::Transport(e.to_string())),
        }
    }
}
