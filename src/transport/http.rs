use std::time::Duration;

use tracing::debug;

use super::{Result, TransportError};

/// Raw answer from a successful (2xx) exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Outbound HTTP used by the token and imagery clients.
pub trait Transport: Send + Sync {
    fn post_form(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<HttpReply>;

    fn post_json(&self, url: &str, headers: &[(&str, &str)], body: &str) -> Result<HttpReply>;
}

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl UreqTransport {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
        }
    }

    fn request(&self, url: &str, headers: &[(&str, &str)]) -> ureq::Request {
        headers
            .iter()
            .fold(self.agent.post(url), |request, (name, value)| {
                request.set(name, value)
            })
    }
}

impl Transport for UreqTransport {
    fn post_form(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<HttpReply> {
        debug!(url, "POST form");
        into_reply(url, self.request(url, headers).send_form(form))
    }

    fn post_json(&self, url: &str, headers: &[(&str, &str)], body: &str) -> Result<HttpReply> {
        debug!(url, bytes = body.len(), "POST json");
        into_reply(url, self.request(url, headers).send_string(body))
    }
}

fn into_reply(
    url: &str,
    outcome: std::result::Result<ureq::Response, ureq::Error>,
) -> Result<HttpReply> {
    match outcome {
        Ok(response) => {
            let status = response.status();
            let body = response.into_string()?;
            Ok(HttpReply { status, body })
        }
        Err(ureq::Error::Status(status, response)) => Err(TransportError::Status {
            url: url.to_string(),
            status,
            body: response.into_string().unwrap_or_default(),
        }),
        Err(ureq::Error::Transport(transport)) => Err(TransportError::Request {
            url: url.to_string(),
            message: transport.to_string(),
        }),
    }
}
