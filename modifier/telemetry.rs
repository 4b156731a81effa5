use std::{fmt, path::PathBuf, sync::Arc};

use anyhow::Result;
use serde_json::Value;
use sizegen_logging::{JsonLogger, LogLevel, LogRecord};

/// Builder for the modifier pipeline's telemetry sink.
pub struct ModifierTelemetryBuilder {
    component: String,
    log_path: Option<PathBuf>,
}

impl ModifierTelemetryBuilder {
    /// Creates the builder.
    #[must_use]
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            log_path: None,
        }
    }

    /// Sets the log path.
    #[must_use]
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Builds the telemetry handle.
    pub fn build(self) -> Result<ModifierTelemetry> {
        ModifierTelemetry::new(self.component, self.log_path)
    }
}

/// Telemetry handle shared across pipeline components. Without a log
/// path every call is a no-op, so callers thread it through
/// unconditionally.
#[derive(Clone)]
pub struct ModifierTelemetry {
    inner: Arc<TelemetryInner>,
}

impl fmt::Debug for ModifierTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierTelemetry")
            .field("component", &self.inner.component)
            .finish()
    }
}

struct TelemetryInner {
    component: String,
    logger: Option<JsonLogger>,
}

impl ModifierTelemetry {
    fn new(component: impl Into<String>, log_path: Option<PathBuf>) -> Result<Self> {
        let logger = if let Some(path) = log_path {
            Some(JsonLogger::new(path)?)
        } else {
            None
        };
        Ok(Self {
            inner: Arc::new(TelemetryInner {
                component: component.into(),
                logger,
            }),
        })
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder(component: impl Into<String>) -> ModifierTelemetryBuilder {
        ModifierTelemetryBuilder::new(component)
    }

    /// Logs structured metadata.
    pub fn log(&self, level: LogLevel, message: &str, metadata: Value) -> Result<()> {
        if let Some(logger) = &self.inner.logger {
            let mut record = LogRecord::new(&self.inner.component, level, message);
            if let Some(obj) = metadata.as_object() {
                record.metadata = obj.clone();
            }
            logger.log(&record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn telemetry_writes_structured_records() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("modifier.log");
        let telemetry = ModifierTelemetry::builder("evaluator")
            .log_path(&path)
            .build()
            .unwrap();
        telemetry
            .log(
                LogLevel::Info,
                "evaluate.referent.scored",
                json!({ "precision": 0.5, "recall": 1.0 }),
            )
            .unwrap();
        let records = sizegen_logging::read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "evaluate.referent.scored");
        assert_eq!(records[0].metadata["precision"], 0.5);
    }

    #[test]
    fn telemetry_without_sink_is_a_noop() {
        let telemetry = ModifierTelemetry::builder("predictor").build().unwrap();
        telemetry
            .log(LogLevel::Debug, "predict.term", json!({}))
            .unwrap();
    }
}
