//! Progress sink port

use crate::value_objects::ClassFailure;

/// Observer of a run's progress
///
/// Purely observational: nothing a sink does can change the outcome.
pub trait ProgressSink {
    /// The run started
    fn started(&self, message: &str);

    /// A class was left unmodified because of a recoverable error
    fn class_failed(&self, _failure: &ClassFailure) {}

    /// The run finished
    fn succeeded(&self, message: &str);

    /// The run aborted on a fatal error
    fn failed(&self, message: &str);
}

/// Sink that discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn started(&self, _message: &str) {}

    fn succeeded(&self, _message: &str) {}

    fn failed(&self, _message: &str) {}
}
