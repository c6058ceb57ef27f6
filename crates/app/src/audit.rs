//! Audit sink that writes every event as a structured `tracing` record.

use hotelhub_domain::audit::AuditEvent;

use crate::ports::AuditSink;

/// Target every audit record is emitted under, so it can be filtered apart.
pub const AUDIT_TARGET: &str = "audit";

/// Audit sink that logs each event at `info` under the [`AUDIT_TARGET`] target.
///
/// Recording never fails and never blocks: delivery is whatever the installed
/// subscriber does with the record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        tracing::info!(target: AUDIT_TARGET, action = event.action(), event = ?event, "audit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelhub_domain::id::RoomId;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn record_with_capture(event: AuditEvent) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || TracingAuditSink::new().record(event));
        captured.text()
    }

    #[test]
    fn should_log_event_under_audit_target() {
        let output = record_with_capture(AuditEvent::RoomDeleted { id: RoomId::new(4) });

        assert!(output.contains("INFO"));
        assert!(output.contains("audit:"));
        assert!(output.contains("action=\"room_deleted\""));
    }

    #[test]
    fn should_not_panic_when_no_subscriber_installed() {
        TracingAuditSink::new().record(AuditEvent::LogsReported { count: 2 });
    }
}
