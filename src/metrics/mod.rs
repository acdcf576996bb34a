use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters for a decomposition session.
#[derive(Debug, Default, Clone)]
pub struct DecomposeMetrics {
    figures: u64,
    rejected: u64,
    cells_scanned: u64,
    rectangles: u64,
}

impl DecomposeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a figure that parsed and was swept in full.
    pub fn record_figure(&mut self, cells: usize, rectangles: usize) {
        self.figures = self.figures.saturating_add(1);
        self.cells_scanned = self.cells_scanned.saturating_add(cells as u64);
        self.rectangles = self.rectangles.saturating_add(rectangles as u64);
    }

    pub fn record_rejected(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            figures: self.figures,
            rejected: self.rejected,
            cells_scanned: self.cells_scanned,
            rectangles: self.rectangles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub figures: u64,
    pub rejected: u64,
    pub cells_scanned: u64,
    pub rectangles: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "decompose_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("figures".to_string(), json!(self.figures));
        map.insert("rejected".to_string(), json!(self.rejected));
        map.insert("cells_scanned".to_string(), json!(self.cells_scanned));
        map.insert("rectangles".to_string(), json!(self.rectangles));
        map
    }
}
