//! Configured decomposition entry point.
//!
//! `Decomposer` wraps parsing and the sweep with the ambient concerns a host
//! program wants: a validation policy, structured logging of each figure,
//! and running metrics.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::error::Result;
use crate::figure::{Figure, ValidationMode};
use crate::geometry::Rect;
use crate::logging::{LogFields, LogLevel, Logger, json_kv, json_str};
use crate::metrics::{DecomposeMetrics, MetricSnapshot};
use crate::render::render_block;

/// Session configuration.
#[derive(Clone)]
pub struct DecomposerConfig {
    /// How strictly input figures are checked before the sweep.
    pub validation: ValidationMode,
    /// Optional structured logger used by the session.
    pub logger: Option<Logger>,
    /// Metrics accumulator shared with whoever holds the handle.
    pub metrics: Option<Arc<Mutex<DecomposeMetrics>>>,
    /// Target field used for every event the session emits.
    pub log_target: String,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Strict,
            logger: None,
            metrics: None,
            log_target: "figure_rects::decompose".to_string(),
        }
    }
}

impl DecomposerConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(DecomposeMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<DecomposeMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Parses figures and decomposes them under one configuration.
pub struct Decomposer {
    config: DecomposerConfig,
}

impl Decomposer {
    pub fn new(config: DecomposerConfig) -> Self {
        Self { config }
    }

    pub fn with_default() -> Self {
        Self::new(DecomposerConfig::default())
    }

    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DecomposerConfig {
        &mut self.config
    }

    /// Parse `input` under the configured validation mode.
    pub fn parse(&self, input: &str) -> Result<Figure> {
        match Figure::parse_with(input, self.config.validation) {
            Ok(figure) => {
                self.emit(
                    LogLevel::Debug,
                    "figure_parsed",
                    [
                        json_kv("width", figure.width()),
                        json_kv("height", figure.height()),
                        json_str("validation", format!("{:?}", self.config.validation)),
                    ],
                );
                Ok(figure)
            }
            Err(err) => {
                self.with_metrics(DecomposeMetrics::record_rejected);
                let mut fields = vec![json_str("error", err.to_string())];
                if let Some((row, column)) = err.position() {
                    fields.push(json_kv("row", row));
                    fields.push(json_kv("column", column));
                }
                self.emit(LogLevel::Warn, "figure_rejected", fields);
                Err(err)
            }
        }
    }

    /// Decompose `input` into its rectangles, in the order the sweep closes them.
    pub fn decompose(&self, input: &str) -> Result<Vec<Rect>> {
        let figure = self.parse(input)?;
        Ok(self.sweep(&figure))
    }

    /// Decompose `input` and render every rectangle as a standalone block.
    pub fn decompose_blocks(&self, input: &str) -> Result<Vec<String>> {
        let rects = self.decompose(input)?;
        Ok(rects.iter().map(|rect| render_block(rect.size())).collect())
    }

    /// Run the sweep over an already parsed figure.
    pub fn sweep(&self, figure: &Figure) -> Vec<Rect> {
        let mut rects = Vec::new();
        for rect in figure.rectangles() {
            self.emit(LogLevel::Trace, "rectangle_emitted", [json_kv("rect", json!(rect))]);
            rects.push(rect);
        }

        self.with_metrics(|metrics| metrics.record_figure(figure.size().area(), rects.len()));
        self.emit(
            LogLevel::Info,
            "figure_decomposed",
            [
                json_kv("rectangles", rects.len()),
                json_kv("cells", figure.size().area()),
            ],
        );
        rects
    }

    /// Current metrics, if collection is enabled.
    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let handle = self.config.metrics.as_ref()?;
        handle.lock().ok().map(|metrics| metrics.snapshot())
    }

    /// Log the current metrics snapshot through the configured logger.
    ///
    /// Unlike per-figure events, sink failures here are reported to the caller.
    pub fn emit_metrics(&self) -> Result<()> {
        let (Some(logger), Some(snapshot)) = (&self.config.logger, self.metrics_snapshot()) else {
            return Ok(());
        };
        logger.log_event(snapshot.to_log_event(&self.config.log_target))?;
        Ok(())
    }

    fn with_metrics(&self, update: impl FnOnce(&mut DecomposeMetrics)) {
        if let Some(handle) = &self.config.metrics {
            if let Ok(mut metrics) = handle.lock() {
                update(&mut metrics);
            }
        }
    }

    fn emit(&self, level: LogLevel, message: &str, fields: impl IntoIterator<Item = (String, Value)>) {
        let Some(logger) = &self.config.logger else {
            return;
        };
        if !logger.enabled(level) {
            return;
        }
        let fields: LogFields = fields.into_iter().collect();
        // Sink failures never interrupt a sweep; `emit_metrics` reports them.
        logger
            .log_with_fields(level, &self.config.log_target, message, fields)
            .ok();
    }
}
