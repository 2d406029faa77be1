//! Progress sink backed by tracing

use inject_it_domain::{ClassFailure, ProgressSink};
use tracing::{error, info, warn};

/// Reports run progress as log events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressSink;

impl ProgressSink for TracingProgressSink {
    fn started(&self, message: &str) {
        info!("{message}");
    }

    fn class_failed(&self, failure: &ClassFailure) {
        warn!(
            file = %failure.file.display(),
            class = %failure.class_name,
            kind = ?failure.kind,
            "{}",
            failure.reason
        );
    }

    fn succeeded(&self, message: &str) {
        info!("{message}");
    }

    fn failed(&self, message: &str) {
        error!("{message}");
    }
}
