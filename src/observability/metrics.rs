use anyhow::Result;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info};

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Option<Arc<Metrics>>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the process-wide `Metrics`.
/// `None` when the registry could not be built; recording is then a no-op.
pub async fn get_metrics() -> Option<&'static Arc<Metrics>> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
                .inspect_err(|e| error!("metrics disabled, registry setup failed: {}", e))
                .ok()
        })
        .await
        .as_ref()
}

/// Text exposition of every client metric, empty when metrics are disabled.
pub async fn render_metrics() -> Result<String> {
    let Some(metrics) = get_metrics().await else {
        return Ok(String::new());
    };
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metrics.registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub async fn record_auth(scope: &str, outcome: &str) {
    if let Some(metrics) = get_metrics().await {
        metrics.auth_requests.with_label_values(&[scope, outcome]).inc();
    }
}

pub async fn record_cache_hit(scope: &str) {
    if let Some(metrics) = get_metrics().await {
        metrics.token_cache_hits.with_label_values(&[scope]).inc();
    }
}

/// `status` is the HTTP status code, or `error` for transport failures.
pub async fn record_api_request(scope: &str, method: &str, status: &str, elapsed_secs: f64) {
    if let Some(metrics) = get_metrics().await {
        metrics.api_requests.with_label_values(&[scope, method, status]).inc();
        metrics.api_request_duration.with_label_values(&[scope]).observe(elapsed_secs);
    }
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Auth metrics
    pub auth_requests: IntCounterVec,
    pub token_cache_hits: IntCounterVec,

    // API metrics
    pub api_requests: IntCounterVec,
    pub api_request_duration: HistogramVec,
}

impl Metrics {
    fn new() -> Result<Arc<Self>> {
        let registry = Registry::new_custom(Some("iopay".into()), None)?;

        let metrics = Arc::new(Self {
            auth_requests: IntCounterVec::new(Opts::new("auth_requests_total", "Auth requests by scope and outcome"), &["scope", "outcome"])?,
            token_cache_hits: IntCounterVec::new(Opts::new("token_cache_hits_total", "Requests served with a cached token"), &["scope"])?,
            api_requests: IntCounterVec::new(Opts::new("api_requests_total", "API requests by scope, method and status"), &["scope", "method", "status"])?,
            api_request_duration: HistogramVec::new(HistogramOpts::new("api_request_duration_seconds", "API request duration seconds").buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]), &["scope"])?,
            registry,
        });

        let reg = &metrics.registry;
        reg.register(Box::new(metrics.auth_requests.clone()))?;
        reg.register(Box::new(metrics.token_cache_hits.clone()))?;
        reg.register(Box::new(metrics.api_requests.clone()))?;
        reg.register(Box::new(metrics.api_request_duration.clone()))?;

        Ok(metrics)
    }
}
