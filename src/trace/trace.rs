use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::locator::locator_model::Decision;

/// One line of the decision trace.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    /// File or URL the HTML came from.
    pub page: String,

    #[serde(flatten)]
    pub decision: Decision,
}

impl TraceEvent {
    pub fn now(step: u64, page: &str, decision: Decision) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            page: page.to_string(),
            decision,
        }
    }
}

/// Wrap a parse run's decisions as numbered trace events.
pub fn events_for(page: &str, decisions: &[Decision]) -> Vec<TraceEvent> {
    decisions
        .iter()
        .enumerate()
        .map(|(i, d)| TraceEvent::now(i as u64, page, d.clone()))
        .collect()
}
