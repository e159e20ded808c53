use std::io::{self, Write};
use std::sync::Arc;

use crate::metrics::Metrics;
use super::back_service::BackService;

// ============================================================================
// Front Service
// ============================================================================
//
// Orchestrates: trace line → BackService::perform_action
//
// ============================================================================

/// Line written before every delegation.
pub const TRACE_MESSAGE: &str = "FrontService: Calling back service...";

pub struct FrontService<B: BackService + ?Sized> {
    back_service: Arc<B>,
    metrics: Option<Arc<Metrics>>,
}

impl<B: BackService + ?Sized> FrontService<B> {
    pub fn new(back_service: Arc<B>) -> Self {
        Self {
            back_service,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Print the trace line to stdout, then run the back service action once.
    pub fn execute(&self) -> Result<(), B::Error> {
        self.execute_traced(&mut io::stdout())
    }

    /// Same as [`execute`](Self::execute) with the trace line sent to `out`.
    ///
    /// The back service error is returned as-is. A failed trace write is
    /// logged and does not prevent the delegation.
    pub fn execute_traced<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), B::Error> {
        if let Err(e) = writeln!(out, "{TRACE_MESSAGE}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to write dispatch trace line");
        }

        tracing::debug!("Delegating to back service");
        if let Some(metrics) = &self.metrics {
            metrics.dispatch_total.inc();
        }

        let result = self.back_service.perform_action();

        if result.is_err() {
            tracing::warn!("Back service action failed");
            if let Some(metrics) = &self.metrics {
                metrics.dispatch_failures_total.inc();
            }
        }

        result
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{BackServiceError, LoggingBackService};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Writer backed by a buffer the back service can also see.
    struct SharedWriter(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Records each call together with what had been written when it ran.
    struct RecordingBackService {
        output: Rc<RefCell<Vec<u8>>>,
        calls: RefCell<Vec<String>>,
    }

    impl BackService for RecordingBackService {
        type Error = BackServiceError;

        fn perform_action(&self) -> Result<(), Self::Error> {
            let seen = String::from_utf8_lossy(&self.output.borrow()).into_owned();
            self.calls.borrow_mut().push(seen);
            Ok(())
        }
    }

    struct FailingBackService {
        calls: Cell<u32>,
    }

    impl BackService for FailingBackService {
        type Error = BackServiceError;

        fn perform_action(&self) -> Result<(), Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Err(BackServiceError::ActionFailed("backend offline".to_string()))
        }
    }

    fn recording() -> (Rc<RefCell<Vec<u8>>>, Arc<RecordingBackService>) {
        let output = Rc::new(RefCell::new(Vec::new()));
        let back = Arc::new(RecordingBackService {
            output: output.clone(),
            calls: RefCell::new(Vec::new()),
        });
        (output, back)
    }

    #[test]
    fn test_execute_invokes_back_service_once_after_trace() {
        let (output, back) = recording();
        let front = FrontService::new(back.clone());

        front.execute_traced(&mut SharedWriter(output.clone())).unwrap();

        let calls = back.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], format!("{TRACE_MESSAGE}\n"));
        assert_eq!(String::from_utf8_lossy(&output.borrow()), format!("{TRACE_MESSAGE}\n"));
    }

    #[test]
    fn test_each_execute_delegates_again() {
        let (output, back) = recording();
        let front = FrontService::new(back.clone());
        let mut writer = SharedWriter(output);

        front.execute_traced(&mut writer).unwrap();
        front.execute_traced(&mut writer).unwrap();

        let calls = back.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], format!("{TRACE_MESSAGE}\n{TRACE_MESSAGE}\n"));
    }

    #[test]
    fn test_back_service_error_propagates_unchanged() {
        let back = Arc::new(FailingBackService { calls: Cell::new(0) });
        let front = FrontService::new(back.clone());

        let err = front.execute_traced(&mut Vec::<u8>::new()).unwrap_err();

        assert_eq!(err, BackServiceError::ActionFailed("backend offline".to_string()));
        assert_eq!(back.calls.get(), 1);
    }

    #[test]
    fn test_trace_write_failure_still_delegates() {
        let (_output, back) = recording();
        let front = FrontService::new(back.clone());

        front.execute_traced(&mut BrokenWriter).unwrap();

        assert_eq!(back.calls.borrow().len(), 1);
    }

    #[test]
    fn test_execute_with_trait_object() {
        let back: Arc<dyn BackService<Error = BackServiceError>> =
            Arc::new(LoggingBackService::new());
        let front = FrontService::new(back);

        let mut out: Vec<u8> = Vec::new();
        front.execute_traced(&mut out).unwrap();

        assert_eq!(out, format!("{TRACE_MESSAGE}\n").into_bytes());
    }

    #[test]
    fn test_execute_to_stdout() {
        let front = FrontService::new(Arc::new(LoggingBackService::new()));
        assert!(front.execute().is_ok());
    }

    #[test]
    fn test_metrics_count_dispatches_and_failures() {
        let metrics = Arc::new(Metrics::new().unwrap());

        let ok = FrontService::new(Arc::new(LoggingBackService::new()))
            .with_metrics(metrics.clone());
        ok.execute_traced(&mut Vec::<u8>::new()).unwrap();
        ok.execute_traced(&mut Vec::<u8>::new()).unwrap();

        let failing = FrontService::new(Arc::new(FailingBackService { calls: Cell::new(0) }))
            .with_metrics(metrics.clone());
        assert!(failing.execute_traced(&mut Vec::<u8>::new()).is_err());

        assert_eq!(metrics.dispatch_total.get(), 3);
        assert_eq!(metrics.dispatch_failures_total.get(), 1);
    }
}
