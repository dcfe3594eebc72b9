//! Concurrent signal gathering with per-source timeouts and fallbacks.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::warn;

use risk_engine::{
    EventSignal, HazardType, Region, SemanticSignal, SignalBundle, Sourced, WeatherSnapshot,
};

use crate::{EventFeedClient, SemanticClient, SignalSettings, SourceError, WeatherClient};

/// Recent-event/severity feed.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(
        &self,
        region: &Region,
        hazard: &HazardType,
    ) -> Result<EventSignal, SourceError>;
}

/// Live weather feed.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_weather(&self, region: &Region) -> Result<WeatherSnapshot, SourceError>;
}

/// Semantic/NLP confidence source. Takes the resolved weather because the
/// prompt embeds it.
#[async_trait]
pub trait SemanticSource: Send + Sync {
    async fn fetch_confidence(
        &self,
        region: &Region,
        hazard: &HazardType,
        weather: &WeatherSnapshot,
    ) -> Result<SemanticSignal, SourceError>;
}

/// Gathers the three signals for a request.
///
/// Weather and events are fetched concurrently under independent timeouts;
/// the semantic source follows because its prompt needs the resolved
/// weather. Every failure resolves to the documented fallback, so `gather`
/// always returns a complete bundle. Cancelling the caller drops the whole
/// future; fusion never sees a partial bundle.
pub struct SignalHub {
    events: Arc<dyn EventSource>,
    weather: Arc<dyn WeatherSource>,
    semantic: Arc<dyn SemanticSource>,
    timeout: Duration,
}

impl SignalHub {
    pub fn new(
        events: Arc<dyn EventSource>,
        weather: Arc<dyn WeatherSource>,
        semantic: Arc<dyn SemanticSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            events,
            weather,
            semantic,
            timeout,
        }
    }

    /// Hub wired to the real external clients, sharing one HTTP connection
    /// pool.
    pub fn from_settings(settings: &SignalSettings) -> Self {
        let http = reqwest::Client::new();
        Self::new(
            Arc::new(EventFeedClient::new(http.clone(), settings.ambee_key.clone())),
            Arc::new(WeatherClient::new(http.clone())),
            Arc::new(SemanticClient::new(http, settings.hf_token.clone())),
            settings.timeout,
        )
    }

    pub async fn gather(&self, region: &Region, hazard: &HazardType) -> SignalBundle {
        let (weather_res, event_res) = futures::join!(
            timeout(self.timeout, self.weather.fetch_weather(region)),
            timeout(self.timeout, self.events.fetch_events(region, hazard)),
        );

        let weather = resolve("weather feed", weather_res, WeatherSnapshot::fallback);
        let event = resolve("event feed", event_res, EventSignal::quiet);

        let semantic_res = timeout(
            self.timeout,
            self.semantic.fetch_confidence(region, hazard, weather.value()),
        )
        .await;
        let semantic = resolve("semantic model", semantic_res, SemanticSignal::neutral);

        SignalBundle {
            event,
            weather,
            semantic,
        }
    }
}

/// Collapse timeout/error layers into a `Sourced` value, logging fallbacks.
fn resolve<T>(
    source: &'static str,
    result: Result<Result<T, SourceError>, tokio::time::error::Elapsed>,
    fallback: impl FnOnce() -> T,
) -> Sourced<T> {
    match result.unwrap_or(Err(SourceError::Timeout)) {
        Ok(value) => Sourced::Live(value),
        Err(err) => {
            warn!(source, error = %err, "signal source failed, using fallback");
            Sourced::Fallback {
                value: fallback(),
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use risk_engine::{load_default_regions, EventReport};

    #[derive(Default)]
    pub(crate) struct CountingSources {
        pub events: AtomicUsize,
        pub weather: AtomicUsize,
        pub semantic: AtomicUsize,
        pub fail: bool,
    }

    #[async_trait]
    impl EventSource for CountingSources {
        async fn fetch_events(
            &self,
            _region: &Region,
            _hazard: &HazardType,
        ) -> Result<EventSignal, SourceError> {
            self.events.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SourceError::ApiStatus(500));
            }
            Ok(EventSignal {
                events: vec![EventReport {
                    severity: 2.0,
                    distance_km: 10.0,
                    event_type: None,
                }],
                alert: true,
            })
        }
    }

    #[async_trait]
    impl WeatherSource for CountingSources {
        async fn fetch_weather(&self, _region: &Region) -> Result<WeatherSnapshot, SourceError> {
            self.weather.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SourceError::RequestFailed("connection refused".to_string()));
            }
            Ok(WeatherSnapshot {
                temperature_c: Some(31.0),
                humidity_pct: Some(82.0),
                precipitation_mm: Some(3.2),
                wind_speed_kmh: Some(14.0),
            })
        }
    }

    #[async_trait]
    impl SemanticSource for CountingSources {
        async fn fetch_confidence(
            &self,
            _region: &Region,
            _hazard: &HazardType,
            _weather: &WeatherSnapshot,
        ) -> Result<SemanticSignal, SourceError> {
            self.semantic.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SourceError::Parse("empty classifier output".to_string()));
            }
            Ok(SemanticSignal::new(0.7))
        }
    }

    fn hub_with(sources: Arc<CountingSources>) -> SignalHub {
        SignalHub::new(
            sources.clone(),
            sources.clone(),
            sources,
            Duration::from_millis(100),
        )
    }

    #[tokio::test]
    async fn gather_returns_live_values_and_calls_each_source_once() {
        let sources = Arc::new(CountingSources::default());
        let hub = hub_with(sources.clone());
        let regions = load_default_regions();
        let region = regions.get("Kerala").unwrap();

        let bundle = hub.gather(region, &HazardType::Flood).await;

        assert!(bundle.event.is_live());
        assert!(bundle.weather.is_live());
        assert!(bundle.semantic.is_live());
        assert_eq!(sources.events.load(Ordering::SeqCst), 1);
        assert_eq!(sources.weather.load(Ordering::SeqCst), 1);
        assert_eq!(sources.semantic.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failing_sources_resolve_to_documented_fallbacks() {
        let sources = Arc::new(CountingSources {
            fail: true,
            ..Default::default()
        });
        let hub = hub_with(sources);
        let regions = load_default_regions();
        let region = regions.get("Kerala").unwrap();

        let bundle = hub.gather(region, &HazardType::Flood).await;

        assert!(!bundle.event.is_live());
        assert!(bundle.event.value().events.is_empty());
        assert_eq!(*bundle.weather.value(), WeatherSnapshot::fallback());
        assert_eq!(bundle.semantic.value().confidence, 0.5);
        assert!(bundle
            .weather
            .fallback_reason()
            .is_some_and(|r| r.contains("connection refused")));
    }

    struct SlowSources;

    #[async_trait]
    impl EventSource for SlowSources {
        async fn fetch_events(
            &self,
            _region: &Region,
            _hazard: &HazardType,
        ) -> Result<EventSignal, SourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(EventSignal::quiet())
        }
    }

    #[async_trait]
    impl WeatherSource for SlowSources {
        async fn fetch_weather(&self, _region: &Region) -> Result<WeatherSnapshot, SourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(WeatherSnapshot::fallback())
        }
    }

    #[async_trait]
    impl SemanticSource for SlowSources {
        async fn fetch_confidence(
            &self,
            _region: &Region,
            _hazard: &HazardType,
            _weather: &WeatherSnapshot,
        ) -> Result<SemanticSignal, SourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(SemanticSignal::new(0.9))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_sources_time_out_independently() {
        let slow = Arc::new(SlowSources);
        let hub = SignalHub::new(slow.clone(), slow.clone(), slow, Duration::from_secs(10));
        let regions = load_default_regions();
        let region = regions.get("Odisha").unwrap();

        let bundle = hub.gather(region, &HazardType::Cyclone).await;

        let timeout_reason = SourceError::Timeout.to_string();
        assert_eq!(bundle.event.fallback_reason(), Some(timeout_reason.as_str()));
        assert_eq!(bundle.weather.fallback_reason(), Some(timeout_reason.as_str()));
        assert_eq!(bundle.semantic.fallback_reason(), Some(timeout_reason.as_str()));
    }
}
