//! Signal source collaborators for the risk fusion engine.
//!
//! Three independent, unreliable external sources feed the engine:
//! - an event-severity feed (Ambee disasters API)
//! - a live weather feed (Open-Meteo, no API key)
//! - a semantic confidence model (Hugging Face inference router)
//!
//! Every fetch is wrapped so that failures, timeouts, and malformed payloads
//! resolve to that source's documented fallback value; the fusion stage
//! always receives a complete [`risk_engine::SignalBundle`], never an error.

use std::time::Duration;

use thiserror::Error;

pub mod events;
pub mod hub;
pub mod semantic;
pub mod weather;

pub use events::EventFeedClient;
pub use hub::{EventSource, SemanticSource, SignalHub, WeatherSource};
pub use semantic::SemanticClient;
pub use weather::WeatherClient;

/// Per-source fetch timeout recommended by the resource model.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("source returned status {0}")]
    ApiStatus(u16),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("timeout")]
    Timeout,
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
}

/// Explicit collaborator configuration, constructed once at startup.
/// Nothing below `main` reads process environment.
#[derive(Debug, Clone)]
pub struct SignalSettings {
    /// Ambee disasters API key; `None` means the event feed is disabled and
    /// always falls back.
    pub ambee_key: Option<String>,
    /// Hugging Face inference token; `None` disables the semantic source.
    pub hf_token: Option<String>,
    /// Independent timeout applied to each source fetch.
    pub timeout: Duration,
}

impl Default for SignalSettings {
    fn default() -> Self {
        Self {
            ambee_key: None,
            hf_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
