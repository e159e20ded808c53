use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::order::OrderError;

// ============================================================================
// Metrics Module - Prometheus counters
// ============================================================================
//
// Provides counters for:
// - FrontService dispatches and back service failures
// - Order processing outcomes (accepted / rejected)
//
// There is no HTTP exporter; render() produces the text exposition format.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // Dispatch Metrics
    pub dispatch_total: IntCounter,
    pub dispatch_failures_total: IntCounter,

    // Order Metrics
    pub orders_processed: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let dispatch_total = IntCounter::new(
            "dispatch_total",
            "Total FrontService executions",
        )?;
        registry.register(Box::new(dispatch_total.clone()))?;

        let dispatch_failures_total = IntCounter::new(
            "dispatch_failures_total",
            "FrontService executions whose back service action failed",
        )?;
        registry.register(Box::new(dispatch_failures_total.clone()))?;

        let orders_processed = IntCounterVec::new(
            Opts::new("orders_processed_total", "Orders processed by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(orders_processed.clone()))?;

        Ok(Self {
            registry,
            dispatch_total,
            dispatch_failures_total,
            orders_processed,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Hook for library callers that process orders; the binary never does.
    pub fn observe_order(&self, result: &Result<(), OrderError>) {
        let outcome = if result.is_ok() { "accepted" } else { "rejected" };
        self.orders_processed.with_label_values(&[outcome]).inc();
    }

    /// Prometheus text exposition of everything registered.
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
