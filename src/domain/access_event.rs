//! Resolution event sent to the background access-count worker.

/// One successful resolution of a short code.
///
/// Events ride a bounded channel from the redirect handler to the worker;
/// when the channel is full the event is dropped rather than blocking the
/// redirect (fire-and-forget).
#[derive(Debug, Clone)]
pub struct AccessEvent {
    pub code: String,
    pub client_ip: Option<String>,
}

impl AccessEvent {
    pub fn new(code: impl Into<String>, client_ip: Option<String>) -> Self {
        Self {
            code: code.into(),
            client_ip,
        }
    }
}
