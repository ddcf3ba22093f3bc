use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{fmt::Display, future::Future};
use tokio::time::Instant;
use tracing::error;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    /// Registers this service's counter and histogram under `<service>_service_*`.
    pub fn register(&self, service: &str, registry: &mut Registry) {
        registry.register(
            format!("{service}_service_request_counter"),
            format!("Total number of requests to the {service} service"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{service}_service_request_duration"),
            format!("Histogram of request durations for the {service} service"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    /// Runs `operation`, recording its outcome and duration under `method`.
    pub async fn observe<T, E, F>(&self, method: Method, operation: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let start = Instant::now();
        let result = operation.await;

        let status = match &result {
            Ok(_) => Status::Success,
            Err(err) => {
                error!("❌ Operation failed: {err}");
                Status::Error
            }
        };
        self.record(method, status, start.elapsed().as_secs_f64());

        result
    }
}
