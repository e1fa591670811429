use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};

#[derive(Clone)]
pub struct QueryMetrics {
    pub lookups: IntCounter,
    pub lookup_misses: IntCounter,
    pub values_formatted: IntCounter,
    pub params_registered: IntGauge,
}

#[derive(Clone)]
pub struct MetricsHub {
    pub registry: Registry,
    pub query: QueryMetrics,
}

impl MetricsHub {
    pub fn new() -> Result<Self, String> {
        let registry = Registry::new();
        let lookups = IntCounter::new("dq_lookups_total", "Parameter name lookups")
            .map_err(|e| format!("metrics init error: {e}"))?;
        let lookup_misses =
            IntCounter::new("dq_lookup_misses_total", "Lookups with no registry entry")
                .map_err(|e| format!("metrics init error: {e}"))?;
        let values_formatted =
            IntCounter::new("dq_values_formatted_total", "Raw values rendered to text")
                .map_err(|e| format!("metrics init error: {e}"))?;
        let params_registered =
            IntGauge::new("dq_params_registered", "Number of parameters in the registry")
                .map_err(|e| format!("metrics init error: {e}"))?;
        params_registered.set(crate::info_map_len() as i64);
        let query = QueryMetrics {
            lookups,
            lookup_misses,
            values_formatted,
            params_registered,
        };
        registry
            .register(Box::new(query.lookups.clone()))
            .map_err(|e| format!("metrics register error: {e}"))?;
        registry
            .register(Box::new(query.lookup_misses.clone()))
            .map_err(|e| format!("metrics register error: {e}"))?;
        registry
            .register(Box::new(query.values_formatted.clone()))
            .map_err(|e| format!("metrics register error: {e}"))?;
        registry
            .register(Box::new(query.params_registered.clone()))
            .map_err(|e| format!("metrics register error: {e}"))?;
        Ok(Self { registry, query })
    }

    /// Count one lookup and whether it missed.
    pub fn record_lookup(&self, found: bool) {
        self.query.lookups.inc();
        if !found {
            self.query.lookup_misses.inc();
        }
    }

    pub fn encode_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            return format!("error encoding metrics: {e}");
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_in_text() {
        let hub = MetricsHub::new().unwrap();
        hub.record_lookup(true);
        hub.record_lookup(false);
        hub.query.values_formatted.inc();
        let text = hub.encode_text();
        assert!(text.contains("dq_lookups_total 2"));
        assert!(text.contains("dq_lookup_misses_total 1"));
        assert!(text.contains("dq_values_formatted_total 1"));
        assert!(text.contains("dq_params_registered 96"));
    }

    #[test]
    fn hub_owns_its_collectors() {
        let hub = MetricsHub::new().unwrap();
        assert_eq!(hub.registry.gather().len(), 4);
        let again = hub.registry.register(Box::new(hub.query.lookups.clone()));
        assert!(again.is_err());
    }
}
