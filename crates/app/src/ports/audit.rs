//! Audit port: fire-and-forget sink for structured events.

use hotelhub_domain::audit::AuditEvent;

/// Receives audit events. Implementations must not block or fail the caller.
pub trait AuditSink {
    /// Record an event. Delivery problems are the sink's own business.
    fn record(&self, event: AuditEvent);
}

impl<T: AuditSink + ?Sized> AuditSink for std::sync::Arc<T> {
    fn record(&self, event: AuditEvent) {
        (**self).record(event);
    }
}
