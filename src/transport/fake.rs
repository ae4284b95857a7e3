use std::collections::VecDeque;
use std::sync::Mutex;

use super::{HttpReply, Result, Transport, TransportError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub(crate) url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) form: Vec<(String, String)>,
    pub(crate) body: Option<String>,
}

impl RecordedCall {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Scripted transport: answers calls in order and remembers what was sent.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<VecDeque<Result<HttpReply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub(crate) fn with_bodies(bodies: &[&str]) -> Self {
        let fake = Self::default();
        for body in bodies {
            fake.push_body(body);
        }
        fake
    }

    pub(crate) fn push_body(&self, body: &str) {
        self.push(Ok(HttpReply {
            status: 200,
            body: body.to_string(),
        }));
    }

    pub(crate) fn push(&self, reply: Result<HttpReply>) {
        self.replies.lock().expect("replies lock").push_back(reply);
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    fn answer(&self, call: RecordedCall) -> Result<HttpReply> {
        let url = call.url.clone();
        self.calls.lock().expect("calls lock").push(call);
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Request {
                    url,
                    message: "no scripted reply".to_string(),
                })
            })
    }
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

impl Transport for FakeTransport {
    fn post_form(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<HttpReply> {
        self.answer(RecordedCall {
            url: url.to_string(),
            headers: owned(headers),
            form: owned(form),
            body: None,
        })
    }

    fn post_json(&self, url: &str, headers: &[(&str, &str)], body: &str) -> Result<HttpReply> {
        self.answer(RecordedCall {
            url: url.to_string(),
            headers: owned(headers),
            form: Vec::new(),
            body: Some(body.to_string()),
        })
    }
}
